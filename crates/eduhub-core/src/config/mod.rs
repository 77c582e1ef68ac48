//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field carries a serde default so partial files
//! are accepted.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;
pub mod storage;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::{LogFormat, LoggingConfig};
pub use self::storage::StorageConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides (`EDUHUB__SERVER__PORT=4000`).
const ENV_PREFIX: &str = "EDUHUB";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (base file + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Upload storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// Merges the base file with an optional sibling `{env}.toml` overlay
    /// and environment variables prefixed with `EDUHUB__`.
    pub fn load(path: &str, env: Option<&str>) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(path).required(false));

        if let Some(env) = env {
            let overlay = Path::new(path)
                .with_file_name(format!("{env}.toml"))
                .to_string_lossy()
                .into_owned();
            builder = builder.add_source(config::File::with_name(&overlay).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        loaded.auth.validate()?;
        Ok(loaded)
    }
}
