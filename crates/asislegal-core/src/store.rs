//! Document blob store trait.
//!
//! An opaque blob store keyed by a generated path. The relational row in
//! `documents` owns its blob exclusively; no two rows alias one path.
//! Implementations live in asislegal-infra.

use asislegal_types::error::StorageError;

/// Trait for PDF blob storage.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait DocumentStore: Send + Sync {
    /// Persist a blob under a freshly generated path and return that path.
    ///
    /// The returned path is the immutable `file_path` stored on the
    /// document row.
    fn save(
        &self,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String, StorageError>> + Send;

    /// Whether a blob is still retrievable under the given path.
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;

    /// Read the blob stored under the given path.
    fn read(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<Vec<u8>, StorageError>> + Send;

    /// Delete the blob stored under the given path, if present.
    fn delete(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;
}
