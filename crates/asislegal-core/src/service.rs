//! Chat lifecycle service orchestrating document upload, conversation
//! persistence, and the round-trip to the AI collaborator.
//!
//! The service is generic over its five ports (three repositories, the
//! document store, the QA client) to maintain clean architecture:
//! asislegal-core never depends on asislegal-infra.

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use asislegal_types::chat::{Chat, ChatWithHistory};
use asislegal_types::document::{Document, DocumentUpload, MAX_UPLOAD_SIZE_BYTES, PDF_MIME};
use asislegal_types::error::{ChatError, RepositoryError};
use asislegal_types::message::{Message, MessageExchange, SenderRole};
use asislegal_types::owner::OwnerId;

use crate::qa::DocumentQa;
use crate::repository::{ChatRepository, DocumentRepository, MessageRepository};
use crate::store::DocumentStore;

/// Row counts across all aggregates, for the status command.
#[derive(Debug, Clone, Serialize)]
pub struct LifecycleStats {
    pub documents: u64,
    pub chats: u64,
    pub messages: u64,
}

/// Orchestrates the chat lifecycle: upload, history, message exchange,
/// deletion.
///
/// Writes are single-row atomic only. No transaction spans the blob write
/// and the row writes in `create_chat`, and none spans the user-message
/// and AI-message writes in `send_message` (the user's question is real
/// history whether or not an answer ever arrives). Concurrent
/// `send_message` calls against one chat are not serialized; interleaved
/// ordering by timestamp is accepted.
pub struct ChatLifecycleService<D, C, M, S, Q> {
    documents: D,
    chats: C,
    messages: M,
    store: S,
    qa: Q,
}

/// Map a repository `NotFound` to the lifecycle `NotFound` for an entity.
fn map_not_found(entity: &'static str) -> impl FnOnce(RepositoryError) -> ChatError {
    move |e| match e {
        RepositoryError::NotFound => ChatError::NotFound(entity),
        other => ChatError::Repository(other),
    }
}

impl<D, C, M, S, Q> ChatLifecycleService<D, C, M, S, Q>
where
    D: DocumentRepository,
    C: ChatRepository,
    M: MessageRepository,
    S: DocumentStore,
    Q: DocumentQa,
{
    pub fn new(documents: D, chats: C, messages: M, store: S, qa: Q) -> Self {
        Self {
            documents,
            chats,
            messages,
            store,
            qa,
        }
    }

    // --- Chat lifecycle ---

    /// Create a chat bound to a freshly uploaded document.
    ///
    /// Validates the upload first (declared media type must be PDF, size
    /// at most 10 MiB) so that a rejection has no side effects. Then a
    /// two-phase write: blob first, rows second. A row failure after the
    /// blob write surfaces as a server error and leaves an orphaned blob
    /// behind; that inconsistency window is accepted and not cleaned up.
    pub async fn create_chat(
        &self,
        owner: OwnerId,
        upload: DocumentUpload,
        title: Option<String>,
    ) -> Result<Chat, ChatError> {
        if !upload.content_type.eq_ignore_ascii_case(PDF_MIME) {
            return Err(ChatError::Validation(format!(
                "expected {PDF_MIME}, got '{}'",
                upload.content_type
            )));
        }
        if upload.data.len() as u64 > MAX_UPLOAD_SIZE_BYTES {
            return Err(ChatError::Validation(format!(
                "file exceeds maximum size of {MAX_UPLOAD_SIZE_BYTES} bytes (got {})",
                upload.data.len()
            )));
        }

        // Blob written, rows pending: failures from here on orphan the blob.
        let file_path = self.store.save(&upload.data).await?;

        let document = Document {
            id: Uuid::now_v7(),
            name: upload.filename,
            file_path,
            owner_id: owner.clone(),
            created_at: Utc::now(),
        };
        let document = self.documents.create(&document).await?;

        let title = match title {
            Some(t) if !t.trim().is_empty() => t,
            _ => Chat::default_title(&document.name),
        };
        let chat = Chat {
            id: Uuid::now_v7(),
            document_id: document.id,
            owner_id: owner,
            title,
            created_at: Utc::now(),
        };
        let chat = self.chats.create(&chat).await?;

        info!(chat_id = %chat.id, document_id = %document.id, "Chat created");
        Ok(chat)
    }

    /// List all chats for an owner, newest first. No pagination.
    pub async fn list_chats(&self, owner: &OwnerId) -> Result<Vec<Chat>, ChatError> {
        Ok(self.chats.list(owner).await?)
    }

    /// Get a chat with its full history (oldest first) and its document.
    pub async fn get_chat(&self, chat_id: &Uuid) -> Result<ChatWithHistory, ChatError> {
        let chat = self
            .chats
            .get(chat_id)
            .await?
            .ok_or(ChatError::NotFound("chat"))?;
        let messages = self.messages.list_for_chat(chat_id).await?;
        let document = self
            .documents
            .get(&chat.document_id)
            .await?
            .ok_or(ChatError::NotFound("document"))?;

        Ok(ChatWithHistory {
            chat,
            messages,
            document,
        })
    }

    /// Delete a chat; its messages go with it, its document stays.
    pub async fn delete_chat(&self, chat_id: &Uuid) -> Result<(), ChatError> {
        self.chats
            .delete(chat_id)
            .await
            .map_err(map_not_found("chat"))?;
        info!(chat_id = %chat_id, "Chat deleted");
        Ok(())
    }

    // --- Message exchange ---

    /// The core protocol step: persist the user's question, round-trip to
    /// the AI collaborator, persist its answer.
    ///
    /// The user message is committed BEFORE the external call and is never
    /// rolled back: a failed AI call leaves a persisted, unanswered user
    /// message in the history. The optional audio clip is relayed to the
    /// caller only and never persisted.
    pub async fn send_message(
        &self,
        chat_id: &Uuid,
        content: &str,
    ) -> Result<MessageExchange, ChatError> {
        if content.trim().is_empty() {
            return Err(ChatError::Validation(
                "message content must not be empty".to_string(),
            ));
        }

        let chat = self
            .chats
            .get(chat_id)
            .await?
            .ok_or(ChatError::NotFound("chat"))?;

        let user_message = Message {
            id: Uuid::now_v7(),
            chat_id: chat.id,
            sender: SenderRole::User,
            content: content.to_string(),
            created_at: Utc::now(),
        };
        self.messages.save(&user_message).await?;

        let document = self
            .documents
            .get(&chat.document_id)
            .await?
            .ok_or_else(|| ChatError::DocumentMissing(chat.document_id.to_string()))?;

        if !self.store.exists(&document.file_path).await {
            warn!(
                chat_id = %chat.id,
                path = %document.file_path,
                "Document blob missing, user message kept"
            );
            return Err(ChatError::DocumentMissing(document.file_path));
        }
        let blob = self.store.read(&document.file_path).await?;

        let answer = self
            .qa
            .ask(&blob, &document.name, content)
            .await
            .map_err(|e| {
                warn!(chat_id = %chat.id, error = %e, "AI call failed, user message kept");
                ChatError::from(e)
            })?;

        let ai_message = Message {
            id: Uuid::now_v7(),
            chat_id: chat.id,
            sender: SenderRole::Ai,
            content: answer.answer,
            created_at: Utc::now(),
        };
        self.messages.save(&ai_message).await?;

        info!(chat_id = %chat.id, "Message exchange completed");
        Ok(MessageExchange {
            user_message,
            ai_message,
            audio_base64: answer.audio_base64,
        })
    }

    /// Delete a single message. Gaps in the remaining sequence are fine.
    pub async fn delete_message(&self, message_id: &Uuid) -> Result<(), ChatError> {
        self.messages
            .delete(message_id)
            .await
            .map_err(map_not_found("message"))?;
        Ok(())
    }

    // --- Documents ---

    /// List all documents for an owner, newest first.
    pub async fn list_documents(&self, owner: &OwnerId) -> Result<Vec<Document>, ChatError> {
        Ok(self.documents.list(owner).await?)
    }

    /// Delete a document: blob first (when still present), then the row.
    /// The relational cascade removes every chat and message referencing it.
    pub async fn delete_document(&self, document_id: &Uuid) -> Result<(), ChatError> {
        let document = self
            .documents
            .get(document_id)
            .await?
            .ok_or(ChatError::NotFound("document"))?;

        if self.store.exists(&document.file_path).await {
            self.store.delete(&document.file_path).await?;
        }
        self.documents
            .delete(document_id)
            .await
            .map_err(map_not_found("document"))?;

        info!(document_id = %document_id, "Document deleted");
        Ok(())
    }

    /// Fetch a document's bytes together with its original filename.
    pub async fn download_document(
        &self,
        document_id: &Uuid,
    ) -> Result<(Vec<u8>, String), ChatError> {
        let document = self
            .documents
            .get(document_id)
            .await?
            .ok_or(ChatError::NotFound("document"))?;

        if !self.store.exists(&document.file_path).await {
            return Err(ChatError::NotFound("document blob"));
        }
        let bytes = self.store.read(&document.file_path).await?;
        Ok((bytes, document.name))
    }

    /// Row counts for the status command.
    pub async fn stats(&self) -> Result<LifecycleStats, ChatError> {
        Ok(LifecycleStats {
            documents: self.documents.count().await?,
            chats: self.chats.count().await?,
            messages: self.messages.count().await?,
        })
    }
}
