//! MessageRepository trait definition.

use asislegal_types::error::RepositoryError;
use asislegal_types::message::Message;
use uuid::Uuid;

/// Repository trait for message persistence.
///
/// Messages are append-only: there is no update operation.
pub trait MessageRepository: Send + Sync {
    /// Insert a new message row.
    fn save(
        &self,
        message: &Message,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Get messages for a chat, ordered by created_at ASC (oldest first).
    fn list_for_chat(
        &self,
        chat_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;

    /// Delete a single message row. No re-numbering of the remaining
    /// sequence is performed; gaps are acceptable. Returns `NotFound`
    /// when no row matched.
    fn delete(
        &self,
        message_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Count all message rows.
    fn count(&self) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
