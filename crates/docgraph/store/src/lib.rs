use std::sync::Arc;

use async_trait::async_trait;
use docgraph_types::Document;

pub mod error;
pub mod memory;
pub mod sqlite;

pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub(crate) const LOG_TARGET: &str = "docgraph::store";

/// Shared handle resolvers use to reach the store.
pub type Store = Arc<dyn DocumentStore>;

/// Instance-query surface of the document database.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Saves a document, replacing any stored document with the same id.
    async fn insert(&self, document: Document) -> Result<Document>;

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// All documents of a collection in insertion order.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>>;

    async fn count(&self, collection: &str) -> Result<i64>;

    /// Documents for `ids` in the order given. Unknown ids are skipped.
    async fn find_many(&self, collection: &str, ids: &[String]) -> Result<Vec<Document>> {
        let mut documents = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(document) = self.find_by_id(collection, id).await? {
                documents.push(document);
            }
        }
        Ok(documents)
    }

    async fn first(&self, collection: &str) -> Result<Option<Document>> {
        Ok(self.find_all(collection).await?.into_iter().next())
    }
}

pub(crate) fn validate(document: &Document) -> Result<()> {
    if document.id.is_empty() {
        return Err(Error::InvalidDocument("document id cannot be empty".into()));
    }
    if document.collection.is_empty() {
        return Err(Error::InvalidDocument(format!(
            "document {} has no collection",
            document.id
        )));
    }
    Ok(())
}
