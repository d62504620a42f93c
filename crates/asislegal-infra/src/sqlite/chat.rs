//! SQLite chat repository implementation.
//!
//! Follows the same patterns as `SqliteDocumentRepository`: raw queries,
//! private Row structs, split reader/writer pool usage. Message cascade on
//! chat deletion comes from the FK in the schema, not from code here.

use asislegal_core::repository::ChatRepository;
use asislegal_types::chat::Chat;
use asislegal_types::error::RepositoryError;
use asislegal_types::owner::OwnerId;
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime};

/// SQLite-backed implementation of `ChatRepository`.
pub struct SqliteChatRepository {
    pool: DatabasePool,
}

impl SqliteChatRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain Chat.
struct ChatRow {
    id: String,
    document_id: String,
    owner_id: String,
    title: String,
    created_at: String,
}

impl ChatRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            document_id: row.try_get("document_id")?,
            owner_id: row.try_get("owner_id")?,
            title: row.try_get("title")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_chat(self) -> Result<Chat, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Query(format!("invalid chat id: {e}")))?;
        let document_id = Uuid::parse_str(&self.document_id)
            .map_err(|e| RepositoryError::Query(format!("invalid document_id: {e}")))?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(Chat {
            id,
            document_id,
            owner_id: OwnerId(self.owner_id),
            title: self.title,
            created_at,
        })
    }
}

impl ChatRepository for SqliteChatRepository {
    async fn create(&self, chat: &Chat) -> Result<Chat, RepositoryError> {
        sqlx::query(
            r#"INSERT INTO chats (id, document_id, owner_id, title, created_at)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(chat.id.to_string())
        .bind(chat.document_id.to_string())
        .bind(chat.owner_id.as_str())
        .bind(&chat.title)
        .bind(format_datetime(&chat.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(chat.clone())
    }

    async fn get(&self, chat_id: &Uuid) -> Result<Option<Chat>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM chats WHERE id = ?")
            .bind(chat_id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let chat_row =
                    ChatRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(chat_row.into_chat()?))
            }
            None => Ok(None),
        }
    }

    async fn list(&self, owner: &OwnerId) -> Result<Vec<Chat>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM chats WHERE owner_id = ? ORDER BY created_at DESC")
            .bind(owner.as_str())
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut chats = Vec::with_capacity(rows.len());
        for row in &rows {
            let chat_row =
                ChatRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            chats.push(chat_row.into_chat()?);
        }

        Ok(chats)
    }

    async fn delete(&self, chat_id: &Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM chats WHERE id = ?")
            .bind(chat_id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) as cnt FROM chats")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let count: i64 = row
            .try_get("cnt")
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::document::SqliteDocumentRepository;
    use asislegal_core::repository::DocumentRepository;
    use asislegal_types::document::Document;
    use chrono::Utc;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    async fn setup_document(pool: &DatabasePool) -> Uuid {
        let repo = SqliteDocumentRepository::new(pool.clone());
        let doc = Document {
            id: Uuid::now_v7(),
            name: "contract.pdf".to_string(),
            file_path: format!("documents/{}.pdf", Uuid::now_v7().simple()),
            owner_id: OwnerId::local(),
            created_at: Utc::now(),
        };
        repo.create(&doc).await.unwrap();
        doc.id
    }

    fn make_chat(document_id: Uuid, title: &str) -> Chat {
        Chat {
            id: Uuid::now_v7(),
            document_id,
            owner_id: OwnerId::local(),
            title: title.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_chat() {
        let pool = test_pool().await;
        let document_id = setup_document(&pool).await;
        let repo = SqliteChatRepository::new(pool);

        let chat = make_chat(document_id, "Chat: contract.pdf");
        let created = repo.create(&chat).await.unwrap();
        assert_eq!(created.id, chat.id);

        let found = repo.get(&chat.id).await.unwrap().unwrap();
        assert_eq!(found.title, "Chat: contract.pdf");
        assert_eq!(found.document_id, document_id);
    }

    #[tokio::test]
    async fn test_create_chat_requires_existing_document() {
        let pool = test_pool().await;
        let repo = SqliteChatRepository::new(pool);

        // FK violation: no such document.
        let chat = make_chat(Uuid::now_v7(), "Orphan");
        let result = repo.create(&chat).await;
        assert!(matches!(result, Err(RepositoryError::Query(_))));
    }

    #[tokio::test]
    async fn test_list_chats_newest_first() {
        let pool = test_pool().await;
        let document_id = setup_document(&pool).await;
        let repo = SqliteChatRepository::new(pool);

        for title in ["first", "second", "third"] {
            repo.create(&make_chat(document_id, title)).await.unwrap();
        }

        let chats = repo.list(&OwnerId::local()).await.unwrap();
        assert_eq!(chats.len(), 3);
        assert_eq!(chats[0].title, "third");
        assert_eq!(chats[2].title, "first");
    }

    #[tokio::test]
    async fn test_delete_chat() {
        let pool = test_pool().await;
        let document_id = setup_document(&pool).await;
        let repo = SqliteChatRepository::new(pool);

        let chat = make_chat(document_id, "to delete");
        repo.create(&chat).await.unwrap();
        repo.delete(&chat.id).await.unwrap();

        assert!(repo.get(&chat.id).await.unwrap().is_none());
        let result = repo.delete(&chat.id).await;
        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_deleting_document_cascades_to_chats() {
        let pool = test_pool().await;
        let document_id = setup_document(&pool).await;
        let doc_repo = SqliteDocumentRepository::new(pool.clone());
        let repo = SqliteChatRepository::new(pool);

        let chat = make_chat(document_id, "cascades");
        repo.create(&chat).await.unwrap();

        doc_repo.delete(&document_id).await.unwrap();
        assert!(repo.get(&chat.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_count_chats() {
        let pool = test_pool().await;
        let document_id = setup_document(&pool).await;
        let repo = SqliteChatRepository::new(pool);

        assert_eq!(repo.count().await.unwrap(), 0);
        repo.create(&make_chat(document_id, "one")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
