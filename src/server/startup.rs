use std::sync::Arc;

use crate::server::{
    config::{Config, StorageBackend},
    data::{DatabaseStorage, MemoryStorage, Storage},
    error::{config::ConfigError, AppError},
};

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up-to-date before anything touches the database.
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let database_url = config
        .database_url
        .as_deref()
        .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the storage backend selected by configuration.
///
/// This is the single construction point for the repository contract; the
/// rest of the application only sees `Arc<dyn Storage>`.
pub async fn build_storage(config: &Config) -> Result<Arc<dyn Storage>, AppError> {
    match config.storage_backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage backend");
            Ok(Arc::new(MemoryStorage::new()))
        }
        StorageBackend::Database => {
            let db = connect_to_database(config).await?;
            Ok(Arc::new(DatabaseStorage::new(db)))
        }
    }
}
