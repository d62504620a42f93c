//! Chat types: a conversation thread bound to one document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::Document;
use crate::message::Message;
use crate::owner::OwnerId;

/// A conversation thread over exactly one document.
///
/// A chat references its document for its entire life (FK, no orphans).
/// Deleting a chat cascades to its messages but never deletes the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: Uuid,
    pub document_id: Uuid,
    pub owner_id: OwnerId,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl Chat {
    /// Default title when the user supplies none: `"Chat: " + file name`.
    pub fn default_title(document_name: &str) -> String {
        format!("Chat: {document_name}")
    }
}

/// A chat together with its full history and its document, as returned by
/// the get-chat operation. Messages are ordered oldest to newest.
#[derive(Debug, Clone, Serialize)]
pub struct ChatWithHistory {
    #[serde(flatten)]
    pub chat: Chat,
    pub messages: Vec<Message>,
    pub document: Document,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_title() {
        assert_eq!(Chat::default_title("contract.pdf"), "Chat: contract.pdf");
    }

    #[test]
    fn test_chat_with_history_flattens_chat() {
        let doc = Document {
            id: Uuid::now_v7(),
            name: "lease.pdf".to_string(),
            file_path: "documents/x.pdf".to_string(),
            owner_id: OwnerId::local(),
            created_at: Utc::now(),
        };
        let chat = Chat {
            id: Uuid::now_v7(),
            document_id: doc.id,
            owner_id: OwnerId::local(),
            title: "Chat: lease.pdf".to_string(),
            created_at: Utc::now(),
        };
        let detail = ChatWithHistory {
            chat: chat.clone(),
            messages: Vec::new(),
            document: doc,
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["title"], "Chat: lease.pdf");
        assert_eq!(json["id"], chat.id.to_string());
        assert!(json["messages"].as_array().unwrap().is_empty());
        assert_eq!(json["document"]["name"], "lease.pdf");
    }
}
