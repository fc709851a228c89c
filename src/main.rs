mod setup;

use actix_web::{web, App, HttpServer};
use setup::{init_tracing, AppConfig};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();
    init_tracing(config.json_logs);

    if config.api.jwt_secret.is_none() {
        tracing::warn!("JWT_SECRET is not set; token endpoints will fail");
    }

    let api_config = web::Data::new(config.api.clone());
    tracing::info!(host = %config.host, port = config.port, "starting webtools server");

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(api_config.clone())
            .configure(api::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
