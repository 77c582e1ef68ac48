//! Embedded schema migrations.

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use tracing::info;

use eduhub_core::error::{AppError, ErrorKind};

/// Compiled in from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Applies pending migrations. Already-applied ones are skipped, so this is
/// safe on every startup.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    let known = MIGRATOR.iter().count();
    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, format!("Migration failed: {e}"), e)
    })?;
    info!(migrations = known, "Schema up to date");
    Ok(())
}
