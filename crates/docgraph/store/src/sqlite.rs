use std::str::FromStr;

use async_trait::async_trait;
use docgraph_types::Document;
use serde_json::{Map, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, trace};

use crate::{validate, DocumentStore, Result, LOG_TARGET};

const CREATE_DOCUMENTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS documents (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    collection TEXT NOT NULL,
    id TEXT NOT NULL,
    data TEXT NOT NULL,
    UNIQUE (collection, id)
)";

/// Stores documents as JSON text in a single `documents` table, one row per
/// (collection, id).
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn new(pool: SqlitePool) -> Result<Self> {
        sqlx::query(CREATE_DOCUMENTS_TABLE).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Opens (or creates) the database at `url`. In-memory databases are
    /// limited to one connection, every connection would otherwise see its own
    /// empty database.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let max_connections = if url.contains(":memory:") { 1 } else { 5 };
        let pool =
            SqlitePoolOptions::new().max_connections(max_connections).connect_with(options).await?;

        debug!(target: LOG_TARGET, %url, "Connected to sqlite document store.");
        Self::new(pool).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn document_from_row((collection, id, data): (String, String, String)) -> Result<Document> {
    let fields: Map<String, Value> = serde_json::from_str(&data)?;
    Ok(Document { id, collection, fields })
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn insert(&self, document: Document) -> Result<Document> {
        validate(&document)?;
        trace!(target: LOG_TARGET, collection = %document.collection, id = %document.id, "Saving document.");

        let data = serde_json::to_string(&document.fields)?;
        sqlx::query(
            "INSERT INTO documents (collection, id, data) VALUES (?, ?, ?)
             ON CONFLICT (collection, id) DO UPDATE SET data = excluded.data",
        )
        .bind(&document.collection)
        .bind(&document.id)
        .bind(data)
        .execute(&self.pool)
        .await?;

        Ok(document)
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let row: Option<(String, String, String)> = sqlx::query_as(
            "SELECT collection, id, data FROM documents WHERE collection = ? AND id = ?",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(document_from_row).transpose()
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>> {
        let rows: Vec<(String, String, String)> = sqlx::query_as(
            "SELECT collection, id, data FROM documents WHERE collection = ? ORDER BY seq",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(document_from_row).collect()
    }

    async fn count(&self, collection: &str) -> Result<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM documents WHERE collection = ?")
                .bind(collection)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    async fn first(&self, collection: &str) -> Result<Option<Document>> {
        let row: Option<(String, String, String)> = sqlx::query_as(
            "SELECT collection, id, data FROM documents WHERE collection = ? ORDER BY seq LIMIT 1",
        )
        .bind(collection)
        .fetch_optional(&self.pool)
        .await?;

        row.map(document_from_row).transpose()
    }
}
