//! Seed the default admin account and sample content.
//!
//! Safe to run repeatedly: an existing admin is reused and sample content
//! is only added when that admin owns none.

use eduhub_api::AppState;
use eduhub_auth::password::PasswordHasher;
use eduhub_core::error::AppError;
use eduhub_database::migration::run_migrations;
use eduhub_database::repositories::UserRepository;
use eduhub_entity::user::{CreateUser, UserRole};
use eduhub_service::content::NewContent;
use eduhub_service::context::RequestContext;

use crate::output;

const ADMIN_NAME: &str = "Admin";
const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD: &str = "admin123";

/// What a seed run created.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub admin_created: bool,
    pub contents_created: usize,
}

fn sample_contents() -> Vec<NewContent> {
    vec![
        NewContent {
            title: "Introduction to Algebra".to_string(),
            description: Some("Basic concepts of algebra".to_string()),
            kind: "lesson".to_string(),
            subject: "Mathematics".to_string(),
            grade: "7".to_string(),
            status: Some("published".to_string()),
        },
        NewContent {
            title: "Photosynthesis Quiz".to_string(),
            description: Some("Test your knowledge about photosynthesis".to_string()),
            kind: "quiz".to_string(),
            subject: "Biology".to_string(),
            grade: "9".to_string(),
            status: Some("draft".to_string()),
        },
    ]
}

/// Execute the seed command
pub async fn execute(config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = super::connect_db(&config).await?;
    run_migrations(db.pool()).await?;

    let state = AppState::with_database(config, db.clone()).await?;
    let report = seed(&state).await?;

    if report.admin_created {
        output::print_success("Admin user created");
        output::print_kv("Email", ADMIN_EMAIL);
        output::print_kv("Password", ADMIN_PASSWORD);
    } else {
        output::print_warning(&format!("Admin user '{ADMIN_EMAIL}' already exists"));
    }
    output::print_success(&format!("{} sample contents created", report.contents_created));

    db.close().await;
    Ok(())
}

/// Creates the admin and sample content where missing.
pub async fn seed(state: &AppState) -> Result<SeedReport, AppError> {
    let mut report = SeedReport::default();
    let user_repo = UserRepository::new(state.db.pool().clone());

    // Created through the repository so the well-known seed password is
    // accepted regardless of the configured strength policy.
    let admin = match user_repo.find_by_email(ADMIN_EMAIL).await? {
        Some(user) => user,
        None => {
            let password_hash = PasswordHasher::new().hash_password(ADMIN_PASSWORD)?;
            report.admin_created = true;
            user_repo
                .create(&CreateUser {
                    name: ADMIN_NAME.to_string(),
                    email: ADMIN_EMAIL.to_string(),
                    password_hash,
                    role: UserRole::Admin,
                })
                .await?
        }
    };

    let ctx = RequestContext::new(admin.id, admin.role, admin.email.clone());
    if state.content_service.list_mine(&ctx).await?.is_empty() {
        for content in sample_contents() {
            state.content_service.create(&ctx, content, None).await?;
            report.contents_created += 1;
        }
    }

    Ok(report)
}
