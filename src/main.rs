use std::io;

use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{App, HttpServer, web};
use bd_updates::db::{establish_connection_pool, init_schema};
use bd_updates::models::config::ServerConfig;
use bd_updates::repository::DieselRepository;
use bd_updates::routes;
use bd_updates::scraper::{PageFetcher, SourceRegistry};

const DEFAULT_PORT: u16 = 8000;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = ServerConfig::load(DEFAULT_PORT).map_err(|e| {
        log::error!("Failed to load configuration: {e}");
        io::Error::other(e)
    })?;

    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        log::error!("Failed to open database {}: {e}", server_config.database_url);
        io::Error::other(e)
    })?;

    {
        let mut conn = pool.get().map_err(io::Error::other)?;
        init_schema(&mut conn).map_err(|e| {
            log::error!("Failed to initialize database schema: {e}");
            io::Error::other(e)
        })?;
    }
    log::info!("Database initialized at {}", server_config.database_url);

    let registry = SourceRegistry::builtin().map_err(io::Error::other)?;
    let fetcher = PageFetcher::new(&server_config.user_agent, server_config.scrape_timeout())
        .map_err(io::Error::other)?;

    let repo = DieselRepository::new(pool);
    let registry = web::Data::new(registry);
    let fetcher = web::Data::new(fetcher);

    let address = server_config.address.clone();
    let port = server_config.port;
    log::info!("Server is running on {address}:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Access-Control-Allow-Origin", "*")))
            .app_data(web::Data::new(repo.clone()))
            .app_data(registry.clone())
            .app_data(fetcher.clone())
            .configure(routes::configure)
    })
    .bind((address, port))?
    .run()
    .await
}
