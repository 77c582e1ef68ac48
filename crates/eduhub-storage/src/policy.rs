//! Upload acceptance policy: MIME allow-list and size cap.

use eduhub_core::config::StorageConfig;
use eduhub_core::error::AppError;

/// Exact MIME types accepted in addition to the `image/*` and `video/*`
/// families.
const ALLOWED_DOCUMENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Message returned for a rejected MIME type.
pub const INVALID_TYPE_MESSAGE: &str =
    "Invalid file type. Only images, videos, PDFs, and documents are allowed.";

/// Decides whether an incoming upload may be stored.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    max_size_bytes: u64,
}

impl UploadPolicy {
    /// Create a policy with the given size cap.
    pub fn new(max_size_bytes: u64) -> Self {
        Self { max_size_bytes }
    }

    /// Create a policy from storage configuration.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.max_upload_size_bytes)
    }

    /// Maximum accepted size in bytes.
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    /// Check whether a declared MIME type is on the allow-list.
    ///
    /// Parameters such as `; charset=...` are ignored and the comparison is
    /// case-insensitive.
    pub fn is_allowed_mime(mime_type: &str) -> bool {
        let essence = mime_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.split_once('/') {
            Some(("image", sub)) | Some(("video", sub)) => !sub.is_empty(),
            _ => ALLOWED_DOCUMENT_TYPES.contains(&essence.as_str()),
        }
    }

    /// Reject MIME types outside the allow-list.
    pub fn check_mime(&self, mime_type: &str) -> Result<(), AppError> {
        if Self::is_allowed_mime(mime_type) {
            Ok(())
        } else {
            Err(AppError::unsupported_media_type(INVALID_TYPE_MESSAGE))
        }
    }

    /// Reject payloads strictly larger than the cap.
    pub fn check_size(&self, size: u64) -> Result<(), AppError> {
        if size > self.max_size_bytes {
            Err(AppError::payload_too_large(format!(
                "File too large. Maximum size is {} MB",
                self.max_size_bytes / (1024 * 1024)
            )))
        } else {
            Ok(())
        }
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::from_config(&StorageConfig::default())
    }
}
