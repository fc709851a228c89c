pub mod options;
pub mod token;

pub use options::{SignOptions, VerifyOptions};
pub use token::*;
