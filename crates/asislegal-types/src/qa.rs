//! Types exchanged with the external AI document-QA collaborator.

use serde::{Deserialize, Serialize};

/// A successful answer from the AI collaborator.
///
/// `audio_base64` is an optional base64-encoded audio clip of the answer.
/// It is relayed to the caller and intentionally never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaAnswer {
    pub answer: String,
    pub audio_base64: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_without_audio() {
        let answer = QaAnswer {
            answer: "$500".to_string(),
            audio_base64: None,
        };
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json["answer"], "$500");
        assert!(json["audio_base64"].is_null());
    }
}
