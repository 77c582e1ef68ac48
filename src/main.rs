//! EduHub Server: content management backend for educators.
//!
//! Main entry point that loads configuration, initializes logging, and
//! starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use eduhub_core::config::{AppConfig, LogFormat, LoggingConfig};
use eduhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        upload_dir = %config.storage.upload_dir,
        database = %config.database.url,
        "Starting EduHub"
    );

    if let Err(e) = eduhub_api::run_server(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from file, environment overlay, and `EDUHUB__*`
/// variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("EDUHUB_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    let env = std::env::var("EDUHUB_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(&config_path, Some(&env))
}

/// Initialize tracing. `RUST_LOG` overrides the configured level.
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    match logging.format {
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        LogFormat::Pretty => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
