//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use eduhub_auth::jwt::{JwtDecoder, JwtEncoder};
use eduhub_auth::password::{PasswordHasher, PasswordValidator};
use eduhub_auth::rbac::RbacEnforcer;
use eduhub_core::config::AppConfig;
use eduhub_core::error::AppError;
use eduhub_core::traits::StorageProvider;
use eduhub_database::DatabasePool;
use eduhub_database::migration::run_migrations;
use eduhub_database::repositories::{ContentRepository, UserRepository};
use eduhub_service::{AuthService, ContentService, UploadService, UserService};
use eduhub_storage::{LocalStorageProvider, UploadPolicy};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// When the process started serving
    pub started_at: Instant,

    // ── Infrastructure ───────────────────────────────────────
    /// SQLite connection pool
    pub db: DatabasePool,
    /// Upload storage provider
    pub storage: Arc<dyn StorageProvider>,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// Registration, login, profile
    pub auth_service: Arc<AuthService>,
    /// Profile updates and password changes
    pub user_service: Arc<UserService>,
    /// File uploads
    pub upload_service: Arc<UploadService>,
    /// Content items
    pub content_service: Arc<ContentService>,
}

impl AppState {
    /// Connects the database, applies migrations, prepares the uploads
    /// directory, and wires every service.
    pub async fn build(config: AppConfig) -> Result<Self, AppError> {
        let db = DatabasePool::connect(&config.database).await?;
        run_migrations(db.pool()).await?;
        Self::with_database(config, db).await
    }

    /// Wires services over an already-migrated database.
    pub async fn with_database(config: AppConfig, db: DatabasePool) -> Result<Self, AppError> {
        let storage: Arc<dyn StorageProvider> =
            Arc::new(LocalStorageProvider::new(&config.storage.upload_dir).await?);

        let user_repo = Arc::new(UserRepository::new(db.pool().clone()));
        let content_repo = Arc::new(ContentRepository::new(db.pool().clone()));

        let password_hasher = Arc::new(PasswordHasher::new());
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let rbac_enforcer = Arc::new(RbacEnforcer::new());

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&password_validator),
            jwt_encoder,
        ));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&password_validator),
        ));
        let upload_service = Arc::new(UploadService::new(
            Arc::clone(&storage),
            UploadPolicy::from_config(&config.storage),
            config.storage.public_prefix.clone(),
        ));
        let content_service = Arc::new(ContentService::new(
            content_repo,
            Arc::clone(&upload_service),
            rbac_enforcer,
        ));

        Ok(Self {
            config: Arc::new(config),
            started_at: Instant::now(),
            db,
            storage,
            jwt_decoder,
            auth_service,
            user_service,
            upload_service,
            content_service,
        })
    }
}
