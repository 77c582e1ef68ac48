//! `users` table access.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use eduhub_core::error::{AppError, ErrorKind};
use eduhub_core::result::AppResult;
use eduhub_entity::user::model::normalize_email;
use eduhub_entity::user::{CreateUser, User, UserRole};

/// Emails are normalized on every write and lookup; the column is also
/// `COLLATE NOCASE`.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ? COLLATE NOCASE")
            .bind(normalize_email(email))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// List all users, optionally filtered by role, newest first.
    pub async fn list(&self, role: Option<UserRole>) -> AppResult<Vec<User>> {
        let result = match role {
            Some(role) => {
                sqlx::query_as::<_, User>(
                    "SELECT * FROM users WHERE role = ? ORDER BY created_at DESC, rowid DESC",
                )
                .bind(role)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC, rowid DESC")
                    .fetch_all(&self.pool)
                    .await
            }
        };

        result.map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    /// Create a new user.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let now = Utc::now();
        let email = normalize_email(&data.email);

        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, name, email, password_hash, role, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.name.trim())
        .bind(&email)
        .bind(&data.password_hash)
        .bind(data.role)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::conflict(format!("User with email '{email}' already exists"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Update a user's name and email. `None` leaves a field unchanged.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        name: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<User> {
        let email = email.map(normalize_email);

        sqlx::query_as::<_, User>(
            "UPDATE users SET name = COALESCE(?, name), \
                              email = COALESCE(?, email), \
                              updated_at = ? \
             WHERE id = ? RETURNING *",
        )
        .bind(name.map(str::trim))
        .bind(email.as_deref())
        .bind(Utc::now())
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::conflict("Email already in use")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update user", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }

    /// Update a user's password hash.
    pub async fn update_password(&self, user_id: Uuid, password_hash: &str) -> AppResult<()> {
        let result = sqlx::query("UPDATE users SET password_hash = ?, updated_at = ? WHERE id = ?")
            .bind(password_hash)
            .bind(Utc::now())
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update password", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User {user_id} not found")));
        }
        Ok(())
    }
}
