//! `eduhub migrate`

use clap::{Args, Subcommand};

use eduhub_core::error::AppError;
use eduhub_database::migration::run_migrations;

use crate::output;

#[derive(Debug, Args)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub command: MigrateCommand,
}

#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Apply every migration not yet recorded in the database
    Run,
}

pub async fn execute(args: &MigrateArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = super::connect_db(&config).await?;

    let result = match args.command {
        MigrateCommand::Run => run_migrations(db.pool()).await,
    };
    db.close().await;
    result?;

    output::print_success(&format!("Database at {} is up to date", config.database.url));
    Ok(())
}
