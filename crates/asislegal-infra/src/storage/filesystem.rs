//! Local-filesystem implementation of `DocumentStore`.
//!
//! Blobs live under `<base_dir>/documents/` with freshly generated
//! UUID names, so the stored path never derives from user input. Paths
//! persisted on document rows are relative to `base_dir`; resolution
//! rejects anything that could escape it.

use std::path::{Path, PathBuf};

use asislegal_core::store::DocumentStore;
use asislegal_types::error::StorageError;
use tracing::debug;
use uuid::Uuid;

/// Subdirectory under the base dir where PDF blobs are written.
const DOCUMENTS_SUBDIR: &str = "documents";

/// Stores document blobs as files under a base directory.
pub struct LocalDocumentStore {
    base_dir: PathBuf,
}

impl LocalDocumentStore {
    /// Create a store rooted at the given directory.
    ///
    /// The `documents/` subdirectory is created lazily on first save.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolve a stored relative path against the base directory.
    ///
    /// Stored paths are generated by `save`, so anything absolute or
    /// containing parent components indicates a corrupted row and is
    /// rejected rather than resolved.
    fn resolve(&self, path: &str) -> Result<PathBuf, StorageError> {
        if path.is_empty()
            || path.starts_with('/')
            || path.contains('\\')
            || Path::new(path)
                .components()
                .any(|c| !matches!(c, std::path::Component::Normal(_)))
        {
            return Err(StorageError::InvalidPath(path.to_string()));
        }
        Ok(self.base_dir.join(path))
    }
}

impl DocumentStore for LocalDocumentStore {
    async fn save(&self, data: &[u8]) -> Result<String, StorageError> {
        let relative = format!("{DOCUMENTS_SUBDIR}/{}.pdf", Uuid::now_v7().simple());
        let full = self.base_dir.join(&relative);

        if let Some(parent) = full.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }

        tokio::fs::write(&full, data)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        debug!(path = %relative, bytes = data.len(), "stored document blob");
        Ok(relative)
    }

    async fn exists(&self, path: &str) -> bool {
        match self.resolve(path) {
            Ok(full) => tokio::fs::try_exists(&full).await.unwrap_or(false),
            Err(_) => false,
        }
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        let full = self.resolve(path)?;
        match tokio::fs::read(&full).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(path.to_string()))
            }
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        let full = self.resolve(path)?;
        match tokio::fs::remove_file(&full).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(path.to_string()))
            }
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }
}
