//! reqwest-based client for the AI document-QA HTTP service.
//!
//! The service takes a multipart request with the PDF bytes under the
//! `files` field and the question under `query`, and answers with
//! `{"respuesta": "...", "audio": "..."}` where `audio` may be absent.

use std::time::Duration;

use asislegal_core::qa::DocumentQa;
use asislegal_types::error::QaError;
use asislegal_types::qa::QaAnswer;
use serde::Deserialize;
use tracing::{debug, warn};

/// Upper bound on the end-to-end wait for one QA call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// HTTP client for the AI document-QA service.
pub struct HttpQaClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpQaClient {
    /// Create a client pointed at the given service base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, QaError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| QaError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Wire shape of a successful service response.
#[derive(Debug, Deserialize)]
struct QaResponseBody {
    respuesta: String,
    #[serde(default)]
    audio: Option<String>,
}

impl DocumentQa for HttpQaClient {
    async fn ask(
        &self,
        document: &[u8],
        filename: &str,
        query: &str,
    ) -> Result<QaAnswer, QaError> {
        let part = reqwest::multipart::Part::bytes(document.to_vec())
            .file_name(filename.to_string())
            .mime_str("application/pdf")
            .map_err(|e| QaError::Unavailable(e.to_string()))?;

        let form = reqwest::multipart::Form::new()
            .part("files", part)
            .text("query", query.to_string());

        debug!(filename, query_len = query.len(), "submitting document QA request");

        let response = self
            .client
            .post(self.url("/api/chat-documentos"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| QaError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "AI service returned an error");
            return Err(QaError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let body: QaResponseBody = response
            .json()
            .await
            .map_err(|e| QaError::Deserialization(e.to_string()))?;

        Ok(QaAnswer {
            answer: body.respuesta,
            audio_base64: body.audio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = HttpQaClient::new("http://localhost:8000/").unwrap();
        assert_eq!(
            client.url("/api/chat-documentos"),
            "http://localhost:8000/api/chat-documentos"
        );
    }

    #[test]
    fn test_response_body_with_audio() {
        let body: QaResponseBody =
            serde_json::from_str(r#"{"respuesta": "$500", "audio": "UklGRg=="}"#).unwrap();
        assert_eq!(body.respuesta, "$500");
        assert_eq!(body.audio.as_deref(), Some("UklGRg=="));
    }

    #[test]
    fn test_response_body_without_audio() {
        let body: QaResponseBody = serde_json::from_str(r#"{"respuesta": "ok"}"#).unwrap();
        assert_eq!(body.respuesta, "ok");
        assert!(body.audio.is_none());
    }

    #[test]
    fn test_response_body_with_null_audio() {
        let body: QaResponseBody =
            serde_json::from_str(r#"{"respuesta": "ok", "audio": null}"#).unwrap();
        assert!(body.audio.is_none());
    }
}
