//! ChatRepository trait definition.

use asislegal_types::chat::Chat;
use asislegal_types::error::RepositoryError;
use asislegal_types::owner::OwnerId;
use uuid::Uuid;

/// Repository trait for chat persistence.
///
/// Implementations live in asislegal-infra (e.g. `SqliteChatRepository`).
pub trait ChatRepository: Send + Sync {
    /// Insert a new chat row.
    fn create(
        &self,
        chat: &Chat,
    ) -> impl std::future::Future<Output = Result<Chat, RepositoryError>> + Send;

    /// Get a chat by its unique ID.
    fn get(
        &self,
        chat_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<Chat>, RepositoryError>> + Send;

    /// List chats for an owner, ordered by created_at DESC (newest first).
    fn list(
        &self,
        owner: &OwnerId,
    ) -> impl std::future::Future<Output = Result<Vec<Chat>, RepositoryError>> + Send;

    /// Delete a chat row; messages go with it via FK cascade, the document
    /// stays. Returns `NotFound` when no row matched.
    fn delete(
        &self,
        chat_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Count all chat rows.
    fn count(&self) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
