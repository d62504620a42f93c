//! Envelope response format for API responses.
//!
//! Every success is wrapped in a consistent envelope:
//! ```json
//! { "status": "success", "data": { ... } }
//! ```
//! Deletions carry no `data` key. The message-exchange endpoint uses its
//! own flat shape (see `handlers::chat`).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Envelope wrapping successful API responses.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success response with a payload.
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Success response without a payload (deletions).
    pub fn ok() -> Self {
        Self {
            status: "success",
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let resp = ApiResponse::success(serde_json::json!({"id": 1}));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["id"], 1);
    }

    #[test]
    fn test_ok_envelope_has_no_data_key() {
        let resp = ApiResponse::ok();
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "success");
        assert!(json.get("data").is_none());
    }
}
