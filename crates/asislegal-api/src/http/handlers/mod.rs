//! REST API request handlers.

pub mod chat;
pub mod document;
pub mod message;

use uuid::Uuid;

use asislegal_types::error::ChatError;

use crate::http::error::AppError;

/// Parse a path segment as a UUID. A malformed id cannot refer to any
/// existing entity, so it surfaces as that entity's not-found error.
pub(crate) fn parse_id(raw: &str, entity: &'static str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::Chat(ChatError::NotFound(entity)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_well_formed_id_parses() {
        let id = Uuid::now_v7();
        assert_eq!(parse_id(&id.to_string(), "chat").unwrap(), id);
    }

    #[test]
    fn test_malformed_id_is_not_found() {
        let err = parse_id("not-a-uuid", "chat").unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
