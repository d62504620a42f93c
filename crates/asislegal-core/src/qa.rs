//! AI document-QA collaborator trait.
//!
//! The external HTTP service that answers a query about a supplied
//! document. Everything interesting (parsing, retrieval, answer
//! generation, text-to-speech) happens on the other side of this port;
//! the `HttpQaClient` implementation lives in asislegal-infra.

use asislegal_types::error::QaError;
use asislegal_types::qa::QaAnswer;

/// Trait for the AI question-answering collaborator.
///
/// Implementations must bound the wait on the external call; the contract
/// is an upper limit of 120 seconds, after which the call fails with
/// [`QaError::Unavailable`].
pub trait DocumentQa: Send + Sync {
    /// Submit the document blob plus the user's query, synchronously
    /// waiting for the textual answer and optional audio clip.
    fn ask(
        &self,
        document: &[u8],
        filename: &str,
        query: &str,
    ) -> impl std::future::Future<Output = Result<QaAnswer, QaError>> + Send;
}
