//! Process configuration read from the environment

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::llm::openai::DEFAULT_BASE_URL;
use crate::store::{self, StoreConfig};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_STATIC_DIR: &str = "build";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Clone)]
pub struct AppConfig {
    /// `DATABASE_URL`
    pub database_url: String,
    /// `DB_NAME`, overrides the database named in the URI
    pub db_name: Option<String>,
    /// `SECRET_KEY`, token signing secret
    pub secret_key: String,
    /// `OPENAI_API_KEY`
    pub openai_api_key: String,
    /// `OPENAI_BASE_URL`
    pub openai_base_url: String,
    /// `BIND_ADDR`
    pub bind_addr: SocketAddr,
    /// `STATIC_DIR`, root of the prebuilt front-end bundle
    pub static_dir: PathBuf,
}

impl AppConfig {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let database_url = require("DATABASE_URL")?;
        let secret_key = require("SECRET_KEY")?;
        let openai_api_key = require("OPENAI_API_KEY")?;

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url,
            db_name: get("DB_NAME"),
            secret_key,
            openai_api_key,
            openai_base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            bind_addr,
            static_dir: PathBuf::from(
                get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            ),
        })
    }

    /// Store settings derived from `DATABASE_URL` and `DB_NAME`
    pub fn store_config(&self) -> store::Result<StoreConfig> {
        let config = StoreConfig::from_connection_string(&self.database_url)?;
        Ok(match &self.db_name {
            Some(name) => config.with_database(name.clone()),
            None => config,
        })
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("db_name", &self.db_name)
            .field("openai_base_url", &self.openai_base_url)
            .field("bind_addr", &self.bind_addr)
            .field("static_dir", &self.static_dir)
            .finish_non_exhaustive()
    }
}
