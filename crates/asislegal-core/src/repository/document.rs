//! DocumentRepository trait definition.

use asislegal_types::document::Document;
use asislegal_types::error::RepositoryError;
use asislegal_types::owner::OwnerId;
use uuid::Uuid;

/// Repository trait for document metadata persistence.
///
/// The blob itself lives in the document store; this trait covers only the
/// relational row. Deleting a document cascades to its chats and messages
/// at the schema level.
pub trait DocumentRepository: Send + Sync {
    /// Insert a new document row.
    fn create(
        &self,
        document: &Document,
    ) -> impl std::future::Future<Output = Result<Document, RepositoryError>> + Send;

    /// Get a document by its unique ID.
    fn get(
        &self,
        document_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<Document>, RepositoryError>> + Send;

    /// List documents for an owner, ordered by created_at DESC.
    fn list(
        &self,
        owner: &OwnerId,
    ) -> impl std::future::Future<Output = Result<Vec<Document>, RepositoryError>> + Send;

    /// Delete a document row. Returns `NotFound` when no row matched.
    fn delete(
        &self,
        document_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Count all document rows.
    fn count(&self) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
