//! Application error type mapping to HTTP status codes and envelope format.
//!
//! Error envelope: `{"status": "error", "message": "...", "details"?: ...}`.
//! One status per lifecycle variant: Validation 422, NotFound and
//! DocumentMissing 404, AiUnavailable 503, AiError 500 with the raw
//! collaborator payload under `details`, everything else 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use asislegal_types::error::ChatError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Chat lifecycle errors.
    Chat(ChatError),
    /// Malformed request outside the lifecycle (bad multipart, bad UUID).
    Validation(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg, None),
            AppError::Chat(e) => match e {
                ChatError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg, None),
                ChatError::NotFound(entity) => {
                    (StatusCode::NOT_FOUND, format!("{entity} not found"), None)
                }
                ChatError::DocumentMissing(_) => (
                    StatusCode::NOT_FOUND,
                    "document is no longer available".to_string(),
                    None,
                ),
                ChatError::AiUnavailable(msg) => {
                    error!(error = %msg, "AI service unavailable");
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "AI service unavailable".to_string(),
                        None,
                    )
                }
                ChatError::AiError { details } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "AI service returned an error".to_string(),
                    Some(details),
                ),
                ChatError::Repository(e) => {
                    error!(error = %e, "repository failure");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "internal server error".to_string(),
                        None,
                    )
                }
                ChatError::Storage(e) => {
                    error!(error = %e, "storage failure");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "internal server error".to_string(),
                        None,
                    )
                }
            },
        };

        let body = match details {
            Some(details) => json!({
                "status": "error",
                "message": message,
                "details": details,
            }),
            None => json!({
                "status": "error",
                "message": message,
            }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_validation_is_422() {
        let err = AppError::Chat(ChatError::Validation("bad".to_string()));
        assert_eq!(status_of(err), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_not_found_is_404() {
        assert_eq!(
            status_of(AppError::Chat(ChatError::NotFound("chat"))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::Chat(ChatError::DocumentMissing(
                "documents/x.pdf".to_string()
            ))),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_ai_unavailable_is_503() {
        let err = AppError::Chat(ChatError::AiUnavailable("timeout".to_string()));
        assert_eq!(status_of(err), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_ai_error_is_500() {
        let err = AppError::Chat(ChatError::AiError {
            details: "boom".to_string(),
        });
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
