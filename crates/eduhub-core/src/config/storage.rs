//! Upload storage configuration.

use serde::{Deserialize, Serialize};

/// Default upload size cap: 50 MB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Upload storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory uploaded files are written to and served from.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// URL prefix under which stored files are served.
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
    /// Maximum upload size in bytes (default 50 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            public_prefix: default_public_prefix(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

impl StorageConfig {
    /// Body limit for multipart requests: the file cap plus room for the
    /// metadata fields and multipart framing.
    pub fn request_body_limit(&self) -> usize {
        (self.max_upload_size_bytes as usize).saturating_add(1024 * 1024)
    }
}

fn default_upload_dir() -> String {
    "./uploads".to_string()
}

fn default_public_prefix() -> String {
    "/uploads".to_string()
}

fn default_max_upload() -> u64 {
    DEFAULT_MAX_UPLOAD_BYTES
}
