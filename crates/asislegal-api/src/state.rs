//! Application state wiring all services together.
//!
//! The lifecycle service is generic over its five ports; AppState pins it
//! to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;

use asislegal_core::service::ChatLifecycleService;
use asislegal_infra::qa::HttpQaClient;
use asislegal_infra::sqlite::chat::SqliteChatRepository;
use asislegal_infra::sqlite::document::SqliteDocumentRepository;
use asislegal_infra::sqlite::message::SqliteMessageRepository;
use asislegal_infra::sqlite::pool::DatabasePool;
use asislegal_infra::storage::{resolve_data_dir, LocalDocumentStore};
use asislegal_types::owner::OwnerId;

/// Default base URL of the AI document-QA service.
const DEFAULT_AI_URL: &str = "http://127.0.0.1:8000";

/// Concrete type alias for the lifecycle service pinned to infra implementations.
pub type ConcreteLifecycleService = ChatLifecycleService<
    SqliteDocumentRepository,
    SqliteChatRepository,
    SqliteMessageRepository,
    LocalDocumentStore,
    HttpQaClient,
>;

/// Shared application state used by both CLI commands and REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub lifecycle: Arc<ConcreteLifecycleService>,
    /// Single-user deployment: every request acts as this owner.
    pub owner: OwnerId,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: connect to DB, wire services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        // Initialize database
        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("asislegal.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;

        let ai_url =
            std::env::var("ASISLEGAL_AI_URL").unwrap_or_else(|_| DEFAULT_AI_URL.to_string());
        let qa_client = HttpQaClient::new(ai_url)
            .map_err(|e| anyhow::anyhow!("failed to build AI service client: {e}"))?;

        let lifecycle = ChatLifecycleService::new(
            SqliteDocumentRepository::new(db_pool.clone()),
            SqliteChatRepository::new(db_pool.clone()),
            SqliteMessageRepository::new(db_pool.clone()),
            LocalDocumentStore::new(data_dir.clone()),
            qa_client,
        );

        Ok(Self {
            lifecycle: Arc::new(lifecycle),
            owner: OwnerId::local(),
            data_dir,
        })
    }
}
