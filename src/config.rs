use anyhow::{anyhow, Result};
use std::env;

use crate::services::timezone::{TimezoneCatalog, TimezoneService, DEFAULT_TIMEZONE};

/// Where session preferences are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Sqlite,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub http_port: u16,
    pub preference_store: StoreBackend,
    pub default_timezone: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:./data/clock.db".to_string());
        let database_url = if database_url.trim().is_empty() {
            "sqlite:./data/clock.db".to_string()
        } else {
            database_url
        };

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let preference_store = match env::var("PREFERENCE_STORE")
            .unwrap_or_default()
            .trim()
            .to_lowercase()
            .as_str()
        {
            "" | "sqlite" => StoreBackend::Sqlite,
            "memory" => StoreBackend::Memory,
            _ => return Err(anyhow!("Invalid PREFERENCE_STORE (expected 'sqlite' or 'memory')")),
        };

        let default_timezone = env::var("DEFAULT_TIMEZONE")
            .map(|tz| tz.trim().to_string())
            .ok()
            .filter(|tz| !tz.is_empty())
            .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());

        if !TimezoneCatalog::new().contains(&default_timezone) {
            return Err(anyhow!("Invalid DEFAULT_TIMEZONE: {}", default_timezone));
        }

        Ok(Config {
            database_url,
            http_port,
            preference_store,
            default_timezone,
        })
    }
}
