pub mod authentication;
pub mod checks;
pub mod config;
pub mod crypto;
pub mod formatting;
pub mod image;
pub mod state;
pub mod utils;
pub mod validation;

pub use authentication::*;
pub use validation::*;
