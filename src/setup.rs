// src/setup.rs

use std::env;

use api::ApiConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub(super) struct AppConfig {
    pub host: String,
    pub port: u16,
    pub json_logs: bool,
    pub api: ApiConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let json_logs = env::var("LOG_FORMAT")
            .map(|f| f.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let jwt_secret = env::var("JWT_SECRET").ok().filter(|s| !s.is_empty());
        let token_ttl_seconds = env::var("TOKEN_EXPIRATION_SECONDS")
            .ok()
            .and_then(|s| s.parse::<i64>().ok());

        AppConfig {
            host,
            port,
            json_logs,
            api: ApiConfig {
                jwt_secret,
                token_ttl_seconds,
            },
        }
    }
}

pub(super) fn init_tracing(json_logs: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}
