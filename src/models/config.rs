use std::env;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_DATABASE_URL: &str = "updates.db";
pub const DEFAULT_SCRAPE_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Runtime settings shared by the API service and the health stub.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Path of the SQLite file backing the store.
    pub database_url: String,
    /// Upper bound on a single source fetch.
    pub scrape_timeout_secs: u64,
    pub user_agent: String,
}

impl ServerConfig {
    /// Layer built-in defaults, `config/default.yaml`, the file named by
    /// `APP_CONFIG` and finally the process environment (`PORT`,
    /// `DATABASE_URL`, ...).
    pub fn load(default_port: u16) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("address", "0.0.0.0")?
            .set_default("port", i64::from(default_port))?
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("scrape_timeout_secs", DEFAULT_SCRAPE_TIMEOUT_SECS)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .add_source(File::with_name("config/default").required(false));

        if let Ok(path) = env::var("APP_CONFIG") {
            builder = builder.add_source(File::with_name(&path));
        }

        builder
            .add_source(Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn scrape_timeout(&self) -> Duration {
        Duration::from_secs(self.scrape_timeout_secs)
    }
}
