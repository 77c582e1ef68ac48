//! `eduhub admin`

use clap::{Args, Subcommand};
use dialoguer::{Input, Password};

use eduhub_core::error::{AppError, ErrorKind};
use eduhub_database::migration::run_migrations;
use eduhub_entity::user::UserRole;

use crate::output;

#[derive(Debug, Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create an admin account. Missing values are prompted for.
    Create {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
        /// Visible in shell history; omit to be prompted
        #[arg(short, long)]
        password: Option<String>,
    },
}

fn prompt_failed(e: dialoguer::Error) -> AppError {
    AppError::with_source(ErrorKind::Internal, "Could not read from terminal", e)
}

fn text_or_prompt(given: &Option<String>, prompt: &str) -> Result<String, AppError> {
    match given {
        Some(value) => Ok(value.clone()),
        None => Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(prompt_failed),
    }
}

fn password_or_prompt(given: &Option<String>) -> Result<String, AppError> {
    match given {
        Some(value) => Ok(value.clone()),
        None => Password::new()
            .with_prompt("Admin password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map_err(prompt_failed),
    }
}

pub async fn execute(args: &AdminArgs, config_path: &str) -> Result<(), AppError> {
    let AdminCommand::Create {
        name,
        email,
        password,
    } = &args.command;

    // Gather input first so a cancelled prompt leaves the database untouched.
    let name = text_or_prompt(name, "Admin name")?;
    let email = text_or_prompt(email, "Admin email")?;
    let password = password_or_prompt(password)?;

    let config = super::load_config(config_path)?;
    let db = super::connect_db(&config).await?;
    let created = match run_migrations(db.pool()).await {
        Ok(()) => {
            super::user_service(&config, &db)
                .create_user(&name, &email, &password, UserRole::Admin)
                .await
        }
        Err(e) => Err(e),
    };
    db.close().await;

    let user = created?;
    output::print_success(&format!("Admin '{}' created", user.email));
    output::print_kv("ID", &user.id.to_string());
    Ok(())
}
