//! Document types: a stored PDF and its metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::owner::OwnerId;

/// Maximum accepted upload size: 10 MiB.
pub const MAX_UPLOAD_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// The only accepted declared media type for uploads.
pub const PDF_MIME: &str = "application/pdf";

/// One uploaded PDF document.
///
/// `file_path` is an opaque key into the document store and is immutable
/// once set. A document may be referenced by zero or more chats; deleting
/// the document cascades to all of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    /// Original file name as uploaded (e.g. `contract.pdf`).
    pub name: String,
    /// Opaque reference into the document store.
    pub file_path: String,
    pub owner_id: OwnerId,
    pub created_at: DateTime<Utc>,
}

/// An uploaded file as received at the API boundary, before validation.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub filename: String,
    /// Declared media type from the multipart part.
    pub content_type: String,
    pub data: Vec<u8>,
}
