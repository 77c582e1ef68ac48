//! SQLite connection pool.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::info;

use eduhub_core::config::DatabaseConfig;
use eduhub_core::error::{AppError, ErrorKind};

/// How long a writer waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared handle to the EduHub database file.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: SqlitePool,
}

impl DatabasePool {
    /// Open (creating if needed) the database named by `config.url`.
    ///
    /// Every connection runs in WAL mode with foreign keys enforced, so
    /// deleting a user cascades to their content rows.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Invalid database URL '{}'", config.url),
                    e,
                )
            })?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);

        info!(
            file = %options.get_filename().display(),
            max_connections = config.max_connections,
            "Opening SQLite database"
        );

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect_with(options)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Could not open database", e))?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn into_pool(self) -> SqlitePool {
        self.pool
    }

    /// Round-trips a trivial query.
    pub async fn health_check(&self) -> Result<bool, AppError> {
        let one: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))?;
        Ok(one == 1)
    }

    /// Waits for checked-out connections to return, then closes them all.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}
