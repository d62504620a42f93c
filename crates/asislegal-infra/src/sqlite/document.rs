//! SQLite document repository implementation.
//!
//! Implements `DocumentRepository` from `asislegal-core` using sqlx with
//! split read/write pools: raw queries, private Row structs.

use asislegal_core::repository::DocumentRepository;
use asislegal_types::document::Document;
use asislegal_types::error::RepositoryError;
use asislegal_types::owner::OwnerId;
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime};

/// SQLite-backed implementation of `DocumentRepository`.
pub struct SqliteDocumentRepository {
    pool: DatabasePool,
}

impl SqliteDocumentRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain Document.
struct DocumentRow {
    id: String,
    name: String,
    file_path: String,
    owner_id: String,
    created_at: String,
}

impl DocumentRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            file_path: row.try_get("file_path")?,
            owner_id: row.try_get("owner_id")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_document(self) -> Result<Document, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Query(format!("invalid document id: {e}")))?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(Document {
            id,
            name: self.name,
            file_path: self.file_path,
            owner_id: OwnerId(self.owner_id),
            created_at,
        })
    }
}

impl DocumentRepository for SqliteDocumentRepository {
    async fn create(&self, document: &Document) -> Result<Document, RepositoryError> {
        sqlx::query(
            r#"INSERT INTO documents (id, name, file_path, owner_id, created_at)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(document.id.to_string())
        .bind(&document.name)
        .bind(&document.file_path)
        .bind(document.owner_id.as_str())
        .bind(format_datetime(&document.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(document.clone())
    }

    async fn get(&self, document_id: &Uuid) -> Result<Option<Document>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM documents WHERE id = ?")
            .bind(document_id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let doc_row = DocumentRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(doc_row.into_document()?))
            }
            None => Ok(None),
        }
    }

    async fn list(&self, owner: &OwnerId) -> Result<Vec<Document>, RepositoryError> {
        let rows =
            sqlx::query("SELECT * FROM documents WHERE owner_id = ? ORDER BY created_at DESC")
                .bind(owner.as_str())
                .fetch_all(&self.pool.reader)
                .await
                .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut documents = Vec::with_capacity(rows.len());
        for row in &rows {
            let doc_row =
                DocumentRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            documents.push(doc_row.into_document()?);
        }

        Ok(documents)
    }

    async fn delete(&self, document_id: &Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM documents WHERE id = ?")
            .bind(document_id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) as cnt FROM documents")
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
    use chrono::Utc;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        // Leak tempdir so it lives for the test
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    fn make_document(name: &str) -> Document {
        Document {
            id: Uuid::now_v7(),
            name: name.to_string(),
            file_path: format!("documents/{}.pdf", Uuid::now_v7().simple()),
            owner_id: OwnerId::local(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_document() {
        let pool = test_pool().await;
        let repo = SqliteDocumentRepository::new(pool);

        let doc = make_document("contract.pdf");
        let created = repo.create(&doc).await.unwrap();
        assert_eq!(created.id, doc.id);

        let found = repo.get(&doc.id).await.unwrap().unwrap();
        assert_eq!(found.name, "contract.pdf");
        assert_eq!(found.file_path, doc.file_path);
        assert_eq!(found.owner_id, OwnerId::local());
    }

    #[tokio::test]
    async fn test_get_unknown_document_is_none() {
        let pool = test_pool().await;
        let repo = SqliteDocumentRepository::new(pool);

        let found = repo.get(&Uuid::now_v7()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_list_documents_newest_first() {
        let pool = test_pool().await;
        let repo = SqliteDocumentRepository::new(pool);

        for name in ["a.pdf", "b.pdf", "c.pdf"] {
            repo.create(&make_document(name)).await.unwrap();
        }

        let docs = repo.list(&OwnerId::local()).await.unwrap();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0].name, "c.pdf");
        assert_eq!(docs[2].name, "a.pdf");

        let other = repo.list(&OwnerId("someone-else".to_string())).await.unwrap();
        assert!(other.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_file_path_rejected() {
        let pool = test_pool().await;
        let repo = SqliteDocumentRepository::new(pool);

        let doc = make_document("first.pdf");
        repo.create(&doc).await.unwrap();

        // No two documents may alias the same stored path.
        let mut alias = make_document("second.pdf");
        alias.file_path = doc.file_path.clone();
        let result = repo.create(&alias).await;
        assert!(matches!(result, Err(RepositoryError::Query(_))));
    }

    #[tokio::test]
    async fn test_delete_document() {
        let pool = test_pool().await;
        let repo = SqliteDocumentRepository::new(pool);

        let doc = make_document("gone.pdf");
        repo.create(&doc).await.unwrap();
        repo.delete(&doc.id).await.unwrap();

        assert!(repo.get(&doc.id).await.unwrap().is_none());

        let result = repo.delete(&doc.id).await;
        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_count_documents() {
        let pool = test_pool().await;
        let repo = SqliteDocumentRepository::new(pool);

        assert_eq!(repo.count().await.unwrap(), 0);
        repo.create(&make_document("one.pdf")).await.unwrap();
        repo.create(&make_document("two.pdf")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
