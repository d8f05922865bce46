use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::{info, warn};

/// Server configuration, loaded once at startup from the environment.
pub struct Config {
    pub port: u16,
    /// Path of the JSON catalog seed the server loads before it binds.
    pub catalog_seed: String,
    /// Origins allowed to call the API with credentials.
    pub cors_origins: Vec<String>,
    pub app_env: String,
    /// Built frontend served in production mode.
    pub static_dir: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "5000"),
            catalog_seed: try_load("CATALOG_SEED", "data/catalog.json"),
            cors_origins: load_origins(),
            app_env: try_load("APP_ENV", "development"),
            static_dir: try_load("STATIC_DIR", "client/build"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| ())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn load_origins() -> Vec<String> {
    let raw: String = try_load("CORS_ORIGINS", "http://localhost:3000");
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
