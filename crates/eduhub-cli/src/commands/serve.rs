//! `eduhub serve`

use clap::Args;

use eduhub_core::config::AppConfig;
use eduhub_core::error::AppError;

use crate::output;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen on this port instead of `server.port`
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Bind to this address instead of `server.host`
    #[arg(long)]
    pub host: Option<String>,
}

impl ServeArgs {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
    }
}

/// Runs the HTTP server until shutdown. Pending migrations are applied first.
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;
    args.apply(&mut config);

    output::print_kv("Listening on", &format!("{}:{}", config.server.host, config.server.port));
    output::print_kv("Uploads", &config.storage.upload_dir);
    output::print_kv("Database", &config.database.url);

    eduhub_api::run_server(config).await
}
