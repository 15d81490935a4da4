use std::{env, path::PathBuf, time::Duration};

use clap::ValueEnum;
use thiserror::Error;

use crate::storage::PoolSettings;

/// Default location of the API info page, relative to the working directory.
pub const DEFAULT_INDEX_FILE: &str = "public/index.html";

/// Storage backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StorageBackend {
    /// Process-local collection, lost on restart.
    #[default]
    Memory,
    /// SQLite database reached through `DATABASE_URL`.
    Sqlite,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::Sqlite => "sqlite",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No DATABASE_URL set! Have you made a .env file? The sqlite storage backend needs a connection string (env DATABASE_URL or --database-url)")]
    MissingDatabaseUrl,

    #[error("DB_MAX_CONNECTIONS must be at least 1")]
    ZeroMaxConnections,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage backend (default: memory)
    pub storage: StorageBackend,
    /// Database connection string, required by the sqlite backend
    pub database_url: Option<String>,
    /// Path to the static API info page (default: "public/index.html")
    pub index_file: PathBuf,
    /// Maximum pooled database connections (default: 5)
    pub db_max_connections: u32,
    /// Seconds to wait for a pooled connection (default: 10)
    pub db_acquire_timeout_seconds: u64,
    /// Seconds before a request is answered with 408 (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load the tuning knobs from environment variables.
    ///
    /// `STORAGE`, `DATABASE_URL` and `INDEX_FILE` are command line options
    /// (see `main.rs`) and keep their defaults here.
    ///
    /// Environment variables:
    /// - `DB_MAX_CONNECTIONS` - pool size (default: 5)
    /// - `DB_ACQUIRE_TIMEOUT_SECONDS` - pool acquire timeout (default: 10)
    /// - `REQUEST_TIMEOUT_SECONDS` - per-request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            db_acquire_timeout_seconds: env::var("DB_ACQUIRE_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            ..Self::default()
        }
    }

    /// The connection string, or an error when it is required but missing.
    pub fn require_database_url(&self) -> Result<&str, ConfigError> {
        self.database_url
            .as_deref()
            .ok_or(ConfigError::MissingDatabaseUrl)
    }

    /// Pool tuning for the sqlite backend. A pool needs at least one
    /// connection.
    pub fn pool_settings(&self) -> Result<PoolSettings, ConfigError> {
        if self.db_max_connections == 0 {
            return Err(ConfigError::ZeroMaxConnections);
        }

        Ok(PoolSettings {
            max_connections: self.db_max_connections,
            acquire_timeout: Duration::from_secs(self.db_acquire_timeout_seconds),
        })
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageBackend::default(),
            database_url: None,
            index_file: PathBuf::from(DEFAULT_INDEX_FILE),
            db_max_connections: 5,
            db_acquire_timeout_seconds: 10,
            request_timeout_seconds: 10,
        }
    }
}
