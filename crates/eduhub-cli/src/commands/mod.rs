//! CLI command definitions and dispatch.

pub mod admin;
pub mod migrate;
pub mod seed;
pub mod serve;
pub mod user;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use eduhub_auth::password::{PasswordHasher, PasswordValidator};
use eduhub_core::config::AppConfig;
use eduhub_core::error::AppError;
use eduhub_database::DatabasePool;
use eduhub_database::repositories::UserRepository;
use eduhub_service::UserService;

use crate::output::OutputFormat;

/// EduHub: content management for educators
#[derive(Debug, Parser)]
#[command(name = "eduhub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the EduHub server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Admin account management
    Admin(admin::AdminArgs),
    /// Create the default admin and sample content
    Seed,
    /// User management
    User(user::UserArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::Admin(args) => admin::execute(args, &self.config).await,
            Commands::Seed => seed::execute(&self.config).await,
            Commands::User(args) => user::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file, honoring `EDUHUB_ENV`
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    let env = std::env::var("EDUHUB_ENV").ok();
    AppConfig::load(config_path, env.as_deref())
}

/// Helper: connect to the configured database
pub async fn connect_db(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}

/// Helper: user service over an open database
pub fn user_service(config: &AppConfig, db: &DatabasePool) -> UserService {
    UserService::new(
        Arc::new(UserRepository::new(db.pool().clone())),
        Arc::new(PasswordHasher::new()),
        Arc::new(PasswordValidator::new(&config.auth)),
    )
}
