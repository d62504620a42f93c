//! Document handlers: list, download, delete.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;

use asislegal_types::document::{Document, PDF_MIME};

use crate::http::error::AppError;
use crate::http::handlers::parse_id;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/documents - List all documents, newest first.
pub async fn list_documents(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Document>>, AppError> {
    let documents = state.lifecycle.list_documents(&state.owner).await?;
    Ok(ApiResponse::success(documents))
}

/// GET /api/documents/{id}/download - Raw PDF bytes with the original
/// filename in the Content-Disposition header.
pub async fn download_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let document_id = parse_id(&id, "document")?;
    let (bytes, filename) = state.lifecycle.download_document(&document_id).await?;

    // Quotes in the original filename would break the header.
    let safe_name = filename.replace('"', "");
    Ok((
        [
            (header::CONTENT_TYPE, PDF_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{safe_name}\""),
            ),
        ],
        bytes,
    ))
}

/// DELETE /api/documents/{id} - Delete a document, its blob, and every
/// chat (with messages) referencing it.
pub async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, AppError> {
    let document_id = parse_id(&id, "document")?;
    state.lifecycle.delete_document(&document_id).await?;
    Ok(ApiResponse::ok())
}
