//! Message types: one turn (user or AI) within a chat.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Who authored a message.
///
/// Maps to the CHECK constraint in the SQLite schema:
/// `CHECK (sender IN ('user', 'ai'))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderRole {
    User,
    Ai,
}

impl fmt::Display for SenderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SenderRole::User => write!(f, "user"),
            SenderRole::Ai => write!(f, "ai"),
        }
    }
}

impl FromStr for SenderRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(SenderRole::User),
            "ai" => Ok(SenderRole::Ai),
            other => Err(format!("invalid sender role: '{other}'")),
        }
    }
}

/// A single message within a chat.
///
/// Messages form an append-only sequence ordered by `created_at` and are
/// never mutated after creation. Content is always plain text; audio from
/// the AI collaborator is ephemeral and never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub chat_id: Uuid,
    pub sender: SenderRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Result of a successful message exchange with the AI collaborator.
///
/// `audio_base64` is return-only: it is relayed to the caller of this one
/// call and never re-derivable from history.
#[derive(Debug, Clone, Serialize)]
pub struct MessageExchange {
    pub user_message: Message,
    pub ai_message: Message,
    pub audio_base64: Option<String>,
}
