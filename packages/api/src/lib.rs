pub mod config;
pub mod handlers;
pub mod response;

pub use config::ApiConfig;
pub use handlers::configure;
pub use response::{allowed_methods, respond, DEFAULT_METHODS};
