//! Axum router configuration with middleware.
//!
//! All routes are under `/api`.
//! Middleware: CORS, tracing, raised body limit for PDF uploads.
//!
//! In production, the built frontend is served from `web/dist/`
//! (configurable via `ASISLEGAL_WEB_DIR`). API routes take priority;
//! unknown paths fall through to the SPA's `index.html` for client-side
//! routing. If the directory does not exist, only the API is served.

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Uploads max out at 10 MiB; allow multipart framing overhead on top.
const BODY_LIMIT_BYTES: usize = 12 * 1024 * 1024;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Chat lifecycle
        .route("/chats", get(handlers::chat::list_chats))
        .route("/chats", post(handlers::chat::create_chat))
        .route("/chats/{id}", get(handlers::chat::get_chat))
        .route("/chats/{id}", delete(handlers::chat::delete_chat))
        // Message exchange
        .route("/chats/{id}/mensaje", post(handlers::chat::send_message))
        .route("/messages/{id}", delete(handlers::message::delete_message))
        // Documents
        .route("/documents", get(handlers::document::list_documents))
        .route(
            "/documents/{id}/download",
            get(handlers::document::download_document),
        )
        .route(
            "/documents/{id}",
            delete(handlers::document::delete_document),
        );

    let mut router = Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Serve the built SPA from disk if the directory exists. API routes
    // and /health take priority; unknown paths fall through to index.html
    // for client-side routing.
    let web_dir = std::env::var("ASISLEGAL_WEB_DIR").unwrap_or_else(|_| "web/dist".to_string());
    if std::path::Path::new(&web_dir).exists() {
        let index_path = format!("{web_dir}/index.html");
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir, "SPA static file serving enabled");
    }

    router
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
