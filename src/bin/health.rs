use std::io;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use bd_updates::models::config::ServerConfig;
use bd_updates::routes;

const DEFAULT_PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = ServerConfig::load(DEFAULT_PORT).map_err(|e| {
        log::error!("Failed to load configuration: {e}");
        io::Error::other(e)
    })?;

    log::info!(
        "Health check service listening on {}:{}",
        server_config.address,
        server_config.port
    );

    HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .configure(routes::configure_health)
    })
    .bind((server_config.address, server_config.port))?
    .run()
    .await
}
