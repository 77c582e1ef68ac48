//! `eduhub user`

use std::str::FromStr;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use eduhub_core::error::AppError;
use eduhub_entity::user::{User, UserRole};

use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Print every account, newest first
    List {
        /// Only show `admin` or `user` accounts
        #[arg(short, long)]
        role: Option<String>,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    role: String,
    #[tabled(rename = "created")]
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.to_string(),
            created_at: user.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

pub async fn execute(
    args: &UserArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let UserCommand::List { role } = &args.command;
    // Reject a bad filter before touching the database.
    let role = role.as_deref().map(UserRole::from_str).transpose()?;

    let config = super::load_config(config_path)?;
    let db = super::connect_db(&config).await?;
    let listed = super::user_service(&config, &db).list_users(role).await;
    db.close().await;

    let rows: Vec<UserRow> = listed?.iter().map(UserRow::from).collect();
    output::print_list(&rows, format);
    Ok(())
}
