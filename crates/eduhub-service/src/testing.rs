//! Shared fixtures for service tests.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use eduhub_auth::jwt::JwtEncoder;
use eduhub_auth::password::{PasswordHasher, PasswordValidator};
use eduhub_auth::rbac::RbacEnforcer;
use eduhub_core::config::{AuthConfig, DatabaseConfig};
use eduhub_database::DatabasePool;
use eduhub_database::migration::run_migrations;
use eduhub_database::repositories::{ContentRepository, UserRepository};
use eduhub_entity::user::{User, UserRole};
use eduhub_storage::{LocalStorageProvider, UploadPolicy};

use crate::auth::AuthService;
use crate::content::ContentService;
use crate::context::RequestContext;
use crate::upload::UploadService;
use crate::user::UserService;

pub struct TestServices {
    _dir: tempfile::TempDir,
    upload_dir: PathBuf,
    pub hasher: Arc<PasswordHasher>,
    pub auth: AuthService,
    pub users: UserService,
    pub uploads: Arc<UploadService>,
    pub contents: ContentService,
}

impl TestServices {
    pub async fn new() -> Self {
        Self::with_max_upload(eduhub_core::config::storage::DEFAULT_MAX_UPLOAD_BYTES).await
    }

    pub async fn with_max_upload(max_bytes: u64) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db = DatabasePool::connect(&DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("test.sqlite").display()),
            ..DatabaseConfig::default()
        })
        .await
        .unwrap();
        run_migrations(db.pool()).await.unwrap();
        let pool = db.into_pool();

        let auth_config = AuthConfig {
            jwt_secret: "service-test-secret".to_string(),
            ..AuthConfig::default()
        };
        let user_repo = Arc::new(UserRepository::new(pool.clone()));
        let content_repo = Arc::new(ContentRepository::new(pool));
        let hasher = Arc::new(PasswordHasher::new());
        let validator = Arc::new(PasswordValidator::new(&auth_config));
        let encoder = Arc::new(JwtEncoder::new(&auth_config));

        let upload_dir = dir.path().join("uploads");
        let storage = Arc::new(LocalStorageProvider::new(&upload_dir).await.unwrap());
        let uploads = Arc::new(UploadService::new(
            storage,
            UploadPolicy::new(max_bytes),
            "/uploads",
        ));

        Self {
            auth: AuthService::new(
                user_repo.clone(),
                hasher.clone(),
                validator.clone(),
                encoder,
            ),
            users: UserService::new(user_repo, hasher.clone(), validator),
            contents: ContentService::new(
                content_repo,
                uploads.clone(),
                Arc::new(RbacEnforcer::new()),
            ),
            uploads,
            hasher,
            upload_dir,
            _dir: dir,
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Create a regular user with password `secret1` and a context for it.
    pub async fn user_ctx(&self, email: &str) -> (RequestContext, User) {
        let user = self
            .users
            .create_user("Test User", email, "secret1", UserRole::User)
            .await
            .unwrap();
        let ctx = RequestContext::new(user.id, user.role, user.email.clone());
        (ctx, user)
    }
}
