//! Content repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use eduhub_core::error::{AppError, ErrorKind};
use eduhub_core::result::AppResult;
use eduhub_entity::content::{Content, CreateContent};

/// Repository for content items.
#[derive(Debug, Clone)]
pub struct ContentRepository {
    pool: SqlitePool,
}

impl ContentRepository {
    /// Create a new content repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a content item by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Content>> {
        sqlx::query_as::<_, Content>("SELECT * FROM contents WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find content", e))
    }

    /// List the items owned by a user, newest first.
    pub async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Content>> {
        sqlx::query_as::<_, Content>(
            "SELECT * FROM contents WHERE owner_id = ? ORDER BY created_at DESC, rowid DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list content", e))
    }

    /// Insert a new content item.
    pub async fn create(&self, data: &CreateContent) -> AppResult<Content> {
        let now = Utc::now();

        sqlx::query_as::<_, Content>(
            "INSERT INTO contents (id, owner_id, title, description, kind, subject, grade, \
                                   status, file_url, file_name, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.owner_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.kind)
        .bind(&data.subject)
        .bind(&data.grade)
        .bind(data.status)
        .bind(&data.file_url)
        .bind(&data.file_name)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            // The owner was deleted after their token was issued.
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::authentication("User not found")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create content", e),
        })
    }

    /// Delete a content item by ID. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM contents WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete content", e))?;

        Ok(result.rows_affected() > 0)
    }
}
