use thiserror::Error;

/// Errors from repository operations (used by trait definitions in asislegal-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Errors from the document blob store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("blob not found: {0}")]
    NotFound(String),

    #[error("invalid stored path: {0}")]
    InvalidPath(String),

    #[error("io error: {0}")]
    Io(String),
}

/// Errors from the AI document-QA collaborator.
#[derive(Debug, Error)]
pub enum QaError {
    /// Transport-level failure: service unreachable or timed out.
    #[error("AI service unreachable: {0}")]
    Unavailable(String),

    /// The service was reached but reported a failure. The raw body is
    /// kept for diagnostics.
    #[error("AI service returned HTTP {status}")]
    Service { status: u16, body: String },

    #[error("invalid AI service response: {0}")]
    Deserialization(String),
}

/// Chat lifecycle error taxonomy.
///
/// Each variant maps to one HTTP status at the API boundary:
/// Validation -> 422, NotFound/DocumentMissing -> 404, AiError -> 500,
/// AiUnavailable -> 503, Repository/Storage -> 500.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Bad or missing input, user-correctable. Guaranteed no side effects.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced entity does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The document row exists but its blob is gone from the store.
    /// A data-consistency fault, not a user error.
    #[error("document blob missing from store: {0}")]
    DocumentMissing(String),

    /// Collaborator unreachable or timed out. Transient infra fault.
    #[error("AI service unavailable: {0}")]
    AiUnavailable(String),

    /// Collaborator reached but returned a failure; raw payload carried
    /// for diagnostics.
    #[error("AI service returned an error")]
    AiError { details: String },

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<QaError> for ChatError {
    fn from(e: QaError) -> Self {
        match e {
            QaError::Unavailable(msg) => ChatError::AiUnavailable(msg),
            QaError::Service { body, .. } => ChatError::AiError { details: body },
            QaError::Deserialization(msg) => ChatError::AiError { details: msg },
        }
    }
}
