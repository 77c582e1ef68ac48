//! `[server]` and `[server.cors]` sections.

use serde::{Deserialize, Serialize};

/// Listener settings for `eduhub-server` and `eduhub serve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to listen on; `0.0.0.0` for all IPv4.
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Requests still running after this many seconds get a 408.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// How long in-flight requests may finish after a shutdown signal.
    #[serde(default = "default_shutdown_grace")]
    pub shutdown_grace_seconds: u64,
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
            shutdown_grace_seconds: default_shutdown_grace(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// The `host:port` string to bind the listener to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Cross-origin policy for the browser frontend. A `"*"` entry in the
/// origin or header list means any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Defaults cover the Vite dev server and the API itself on
    /// localhost.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_allowed_methods")]
    pub allowed_methods: Vec<String>,
    #[serde(default = "default_allowed_headers")]
    pub allowed_headers: Vec<String>,
    /// Response headers script may read.
    #[serde(default = "default_exposed_headers")]
    pub exposed_headers: Vec<String>,
    #[serde(default = "default_true")]
    pub allow_credentials: bool,
    /// Preflight cache lifetime in seconds.
    #[serde(default = "default_max_age")]
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            allowed_methods: default_allowed_methods(),
            allowed_headers: default_allowed_headers(),
            exposed_headers: default_exposed_headers(),
            allow_credentials: default_true(),
            max_age_seconds: default_max_age(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    120
}

fn default_shutdown_grace() -> u64 {
    30
}

fn default_allowed_origins() -> Vec<String> {
    [
        "http://localhost:5173",
        "http://127.0.0.1:5173",
        "http://[::1]:5173",
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://[::1]:3000",
    ]
    .map(String::from)
    .into()
}

fn default_allowed_methods() -> Vec<String> {
    ["GET", "HEAD", "PUT", "PATCH", "POST", "DELETE", "OPTIONS"]
        .map(String::from)
        .into()
}

fn default_allowed_headers() -> Vec<String> {
    ["Content-Type", "Accept", "Authorization"]
        .map(String::from)
        .into()
}

fn default_exposed_headers() -> Vec<String> {
    vec!["Authorization".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_max_age() -> u64 {
    3600
}
