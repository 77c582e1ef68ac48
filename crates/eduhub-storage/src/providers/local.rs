//! Local filesystem storage provider.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use eduhub_core::error::{AppError, ErrorKind};
use eduhub_core::result::AppResult;
use eduhub_core::traits::storage::StorageProvider;

/// Local filesystem storage provider.
///
/// Objects live directly under the root directory; names containing path
/// separators or parent references are rejected.
#[derive(Debug, Clone)]
pub struct LocalStorageProvider {
    /// Root directory for all stored files.
    root: PathBuf,
}

impl LocalStorageProvider {
    /// Create a new local storage provider rooted at the given path.
    pub async fn new(root_path: impl AsRef<Path>) -> AppResult<Self> {
        let root = root_path.as_ref().to_path_buf();
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Return the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map an object name to a file directly under the root.
    fn resolve(&self, path: &str) -> AppResult<PathBuf> {
        let clean = path.trim_start_matches('/');
        if clean.is_empty()
            || clean.contains('/')
            || clean.contains('\\')
            || clean == "."
            || clean == ".."
        {
            return Err(AppError::validation(format!("Invalid storage path: {path}")));
        }
        Ok(self.root.join(clean))
    }
}

fn io_failure(action: &str, path: &str, err: std::io::Error) -> AppError {
    AppError::with_source(ErrorKind::Storage, format!("Failed to {action} {path}"), err)
}

#[async_trait]
impl StorageProvider for LocalStorageProvider {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(fs::metadata(&self.root)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false))
    }

    async fn read_bytes(&self, path: &str) -> AppResult<Bytes> {
        let full_path = self.resolve(path)?;
        match fs::read(&full_path).await {
            Ok(data) => Ok(Bytes::from(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::not_found(format!("File not found: {path}")))
            }
            Err(e) => Err(io_failure("read", path, e)),
        }
    }

    async fn write(&self, path: &str, data: Bytes) -> AppResult<()> {
        let full_path = self.resolve(path)?;

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&full_path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => {
                    AppError::conflict(format!("File already exists: {path}"))
                }
                _ => io_failure("create", path, e),
            })?;

        let written = async {
            file.write_all(&data).await?;
            file.flush().await
        }
        .await;

        if let Err(e) = written {
            // Never leave a truncated upload behind.
            let _ = fs::remove_file(&full_path).await;
            return Err(io_failure("write", path, e));
        }

        debug!(path, bytes = data.len(), "Wrote file");
        Ok(())
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        let full_path = self.resolve(path)?;
        match fs::remove_file(&full_path).await {
            Ok(()) => {
                debug!(path, "Deleted file");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_failure("delete", path, e)),
        }
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        let full_path = self.resolve(path)?;
        fs::try_exists(&full_path)
            .await
            .map_err(|e| io_failure("stat", path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_read_delete() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalStorageProvider::new(dir.path()).await.unwrap();

        let data = Bytes::from("hello world");
        provider.write("file.txt", data.clone()).await.unwrap();
        assert!(provider.exists("file.txt").await.unwrap());

        let read_back = provider.read_bytes("file.txt").await.unwrap();
        assert_eq!(read_back, data);

        provider.delete("file.txt").await.unwrap();
        assert!(!provider.exists("file.txt").await.unwrap());
        provider.delete("file.txt").await.unwrap();
    }

    #[tokio::test]
    async fn test_write_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalStorageProvider::new(dir.path()).await.unwrap();

        provider.write("a.pdf", Bytes::from("first")).await.unwrap();
        let err = provider
            .write("a.pdf", Bytes::from("second"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(
            provider.read_bytes("a.pdf").await.unwrap(),
            Bytes::from("first")
        );
    }

    #[tokio::test]
    async fn test_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalStorageProvider::new(dir.path().join("uploads"))
            .await
            .unwrap();

        for bad in ["../escape.txt", "nested/file.txt", "..", ""] {
            let err = provider.write(bad, Bytes::from("x")).await.unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation, "{bad}");
        }
    }

    #[tokio::test]
    async fn test_read_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalStorageProvider::new(dir.path()).await.unwrap();
        let err = provider.read_bytes("missing.png").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(provider.health_check().await.unwrap());
    }
}
