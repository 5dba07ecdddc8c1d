use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};

use super::storage_config::{ConfigError, StorageBackend, StorageConfig};
use crate::setup::dependency_injection::Storage;

/// Opens the configured catalog storage. For Postgres this connects the pool
/// and applies pending migrations before the server starts.
pub async fn init_storage(config: &StorageConfig) -> anyhow::Result<Storage> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory catalog storage, data is lost on restart");
            Ok(Storage::Memory)
        }
        StorageBackend::Postgres => {
            let url = config
                .database_url
                .clone()
                .ok_or(ConfigError::DatabaseUrlMissing)?;
            let db_config = DatabaseConfig::new(url).with_max_connections(config.max_connections);
            let pool = create_postgres_pool(&db_config).await?;
            run_migrations(&pool, &config.migrations_path).await?;
            tracing::info!(
                max_connections = config.max_connections,
                "Connected to PostgreSQL and applied migrations"
            );
            Ok(Storage::Postgres(pool))
        }
    }
}
