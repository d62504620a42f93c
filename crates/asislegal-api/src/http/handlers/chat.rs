//! Chat lifecycle handlers: create (with upload), list, get, delete, and
//! the message-exchange endpoint.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use asislegal_types::chat::{Chat, ChatWithHistory};
use asislegal_types::document::DocumentUpload;
use asislegal_types::message::Message;

use crate::http::error::AppError;
use crate::http::handlers::parse_id;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/chats - List all chats, newest first.
pub async fn list_chats(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Chat>>, AppError> {
    let chats = state.lifecycle.list_chats(&state.owner).await?;
    Ok(ApiResponse::success(chats))
}

/// POST /api/chats - Upload a PDF and create a chat bound to it.
///
/// Multipart fields: `pdf_file` (required), `titulo` (optional).
pub async fn create_chat(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut upload: Option<DocumentUpload> = None;
    let mut title: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        // field.name() borrows the field; copy it out before consuming.
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "pdf_file" => {
                let filename = field.file_name().unwrap_or("document.pdf").to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
                upload = Some(DocumentUpload {
                    filename,
                    content_type,
                    data: data.to_vec(),
                });
            }
            "titulo" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("invalid title field: {e}")))?;
                title = Some(text);
            }
            _ => {}
        }
    }

    let upload =
        upload.ok_or_else(|| AppError::Validation("missing 'pdf_file' field".to_string()))?;

    let chat = state
        .lifecycle
        .create_chat(state.owner.clone(), upload, title)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(chat))))
}

/// GET /api/chats/{id} - A chat with its full history and document.
pub async fn get_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<ChatWithHistory>, AppError> {
    let chat_id = parse_id(&id, "chat")?;
    let detail = state.lifecycle.get_chat(&chat_id).await?;
    Ok(ApiResponse::success(detail))
}

/// DELETE /api/chats/{id} - Delete a chat and its messages.
pub async fn delete_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, AppError> {
    let chat_id = parse_id(&id, "chat")?;
    state.lifecycle.delete_chat(&chat_id).await?;
    Ok(ApiResponse::ok())
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

/// Flat response shape for the message exchange. `audio_base64` is
/// explicitly null when the collaborator sent no audio.
#[derive(Debug, Serialize)]
pub struct ExchangeResponse {
    pub status: &'static str,
    pub user_message: Message,
    pub ai_message: Message,
    pub audio_base64: Option<String>,
}

/// POST /api/chats/{id}/mensaje - Persist the question, ask the AI
/// collaborator, persist and relay its answer.
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<SendMessageRequest>,
) -> Result<Json<ExchangeResponse>, AppError> {
    let chat_id = parse_id(&id, "chat")?;
    let exchange = state.lifecycle.send_message(&chat_id, &body.content).await?;

    Ok(Json(ExchangeResponse {
        status: "success",
        user_message: exchange.user_message,
        ai_message: exchange.ai_message,
        audio_base64: exchange.audio_base64,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use asislegal_types::message::SenderRole;
    use asislegal_types::owner::OwnerId;
    use chrono::Utc;
    use uuid::Uuid;

    fn message(sender: SenderRole, content: &str) -> Message {
        Message {
            id: Uuid::now_v7(),
            chat_id: Uuid::now_v7(),
            sender,
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_exchange_response_audio_serializes_as_null() {
        let resp = ExchangeResponse {
            status: "success",
            user_message: message(SenderRole::User, "What is the deposit?"),
            ai_message: message(SenderRole::Ai, "$500"),
            audio_base64: None,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["user_message"]["content"], "What is the deposit?");
        assert_eq!(json["ai_message"]["sender"], "ai");
        assert!(json["audio_base64"].is_null());
    }

    #[test]
    fn test_chat_envelope_shape() {
        let chat = Chat {
            id: Uuid::now_v7(),
            document_id: Uuid::now_v7(),
            owner_id: OwnerId::local(),
            title: "Chat: lease.pdf".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(ApiResponse::success(chat)).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["title"], "Chat: lease.pdf");
    }
}
