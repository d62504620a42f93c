//! Message handlers.

use axum::extract::{Path, State};

use crate::http::error::AppError;
use crate::http::handlers::parse_id;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// DELETE /api/messages/{id} - Delete a single message.
///
/// The surrounding history keeps its order; a gap is fine.
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, AppError> {
    let message_id = parse_id(&id, "message")?;
    state.lifecycle.delete_message(&message_id).await?;
    Ok(ApiResponse::ok())
}
