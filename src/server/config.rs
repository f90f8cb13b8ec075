use crate::server::error::{config::ConfigError, AppError};

/// Which storage backend to construct at startup.
///
/// Selected once from the environment; call sites only ever see the
/// `Storage` trait object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Database,
    Memory,
}

pub struct Config {
    /// Connection string for the durable backend. Only required when
    /// `storage_backend` is `Database`.
    pub database_url: Option<String>,

    /// Gateway credential. When absent the API still serves, reporting the
    /// bot offline.
    pub discord_bot_token: Option<String>,

    pub storage_backend: StorageBackend,

    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let storage_backend = match std::env::var("STORAGE_BACKEND") {
            Err(_) => StorageBackend::Database,
            Ok(value) => match value.to_ascii_lowercase().as_str() {
                "database" => StorageBackend::Database,
                "memory" => StorageBackend::Memory,
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        var: "STORAGE_BACKEND".to_string(),
                        value,
                    }
                    .into())
                }
            },
        };

        let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL").ok(),
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN").ok(),
            storage_backend,
            bind_address: format!("0.0.0.0:{port}"),
        })
    }
}
