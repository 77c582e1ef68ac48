//! Upload service: policy checks, stored-name allocation, and writes.

use std::sync::Arc;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use eduhub_core::error::{AppError, ErrorKind};
use eduhub_core::traits::StorageProvider;
use eduhub_storage::{UploadPolicy, generate_stored_name};

/// How many fresh names to try before giving up on a write.
const MAX_NAME_ATTEMPTS: usize = 8;

/// An incoming file, fully buffered.
#[derive(Debug, Clone)]
pub struct UploadParams {
    /// Filename as sent by the client.
    pub original_name: String,
    /// Declared MIME type.
    pub mime_type: String,
    /// File content bytes.
    pub data: Bytes,
}

/// A file that has been written to upload storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredFile {
    /// Generated name under the uploads directory.
    pub filename: String,
    /// Filename as sent by the client.
    pub original_name: String,
    /// Size in bytes.
    pub size: u64,
    /// Declared MIME type.
    pub mime_type: String,
    /// Public URL, `{public_prefix}/{filename}`.
    pub url: String,
}

/// Stores uploads under generated names.
#[derive(Debug, Clone)]
pub struct UploadService {
    storage: Arc<dyn StorageProvider>,
    policy: UploadPolicy,
    public_prefix: String,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(
        storage: Arc<dyn StorageProvider>,
        policy: UploadPolicy,
        public_prefix: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            policy,
            public_prefix: format!("/{}", public_prefix.into().trim().trim_matches('/')),
        }
    }

    /// The policy applied to incoming files.
    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    /// Validates and writes a file. Nothing is written when a check fails.
    pub async fn store(&self, params: UploadParams) -> Result<StoredFile, AppError> {
        self.policy.check_mime(&params.mime_type)?;
        self.policy.check_size(params.data.len() as u64)?;

        let size = params.data.len() as u64;
        let filename = self
            .write_unique(&params.original_name, params.data)
            .await?;

        info!(
            filename = %filename,
            original_name = %params.original_name,
            size,
            mime_type = %params.mime_type,
            "File uploaded"
        );

        Ok(StoredFile {
            url: self.url_for(&filename),
            filename,
            original_name: params.original_name,
            size,
            mime_type: params.mime_type,
        })
    }

    /// Deletes a previously stored file by its public URL.
    ///
    /// URLs outside the public prefix or naming nested paths are ignored.
    pub async fn remove(&self, url: &str) -> Result<(), AppError> {
        let Some(filename) = self.filename_from_url(url) else {
            debug!(url, "Ignoring removal of foreign upload URL");
            return Ok(());
        };

        self.storage.delete(filename).await?;
        info!(filename, "Upload removed");
        Ok(())
    }

    /// Build the public URL for a stored filename.
    pub fn url_for(&self, filename: &str) -> String {
        format!("{}/{}", self.public_prefix, filename)
    }

    fn filename_from_url<'a>(&self, url: &'a str) -> Option<&'a str> {
        let name = url.strip_prefix(self.public_prefix.as_str())?.strip_prefix('/')?;
        if name.is_empty() || name.contains('/') || name.contains("..") {
            None
        } else {
            Some(name)
        }
    }

    async fn write_unique(&self, original_name: &str, data: Bytes) -> Result<String, AppError> {
        for _ in 0..MAX_NAME_ATTEMPTS {
            let candidate = generate_stored_name(original_name);
            if self.storage.exists(&candidate).await? {
                continue;
            }
            match self.storage.write(&candidate, data.clone()).await {
                Ok(()) => return Ok(candidate),
                Err(e) if e.kind == ErrorKind::Conflict => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::storage(
            "Could not allocate a unique filename for the upload",
        ))
    }
}
