use std::env;
use std::str::FromStr;

use persistence::db::DEFAULT_MAX_CONNECTIONS;

pub const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.invalid_storage_backend: {0}")]
    InvalidStorageBackend(String),
    #[error("config.database_url_missing")]
    DatabaseUrlMissing,
    #[error("config.invalid_max_connections: {0}")]
    InvalidMaxConnections(String),
    #[error("config.invalid_port: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(ConfigError::InvalidStorageBackend(other.to_string())),
        }
    }
}

/// Where the catalog lives.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub migrations_path: String,
}

impl StorageConfig {
    /// Environment variables:
    /// - STORAGE_BACKEND: `postgres` or `memory` (default: `postgres` when
    ///   DATABASE_URL is set, otherwise `memory`)
    /// - DATABASE_URL: PostgreSQL connection string
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    /// - DATABASE_MIGRATIONS_PATH: migrations directory
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let backend = match lookup("STORAGE_BACKEND") {
            Some(value) => value.parse()?,
            None if database_url.is_some() => StorageBackend::Postgres,
            None => StorageBackend::Memory,
        };

        if backend == StorageBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::DatabaseUrlMissing);
        }

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidMaxConnections(value))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            backend,
            database_url,
            max_connections,
            migrations_path: lookup("DATABASE_MIGRATIONS_PATH")
                .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string()),
        })
    }
}
