use std::collections::HashMap;

use async_trait::async_trait;
use docgraph_types::Document;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use tracing::trace;

use crate::{validate, DocumentStore, Result, LOG_TARGET};

type Collection = IndexMap<String, Document>;

/// Keeps every collection in process memory. Used by tests and by the schema
/// printer, which never reads data.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, document: Document) -> Result<Document> {
        validate(&document)?;
        trace!(target: LOG_TARGET, collection = %document.collection, id = %document.id, "Saving document.");

        let mut collections = self.collections.write().await;
        collections
            .entry(document.collection.clone())
            .or_default()
            .insert(document.id.clone(), document.clone());
        Ok(document)
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).and_then(|docs| docs.get(id)).cloned())
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).map(|docs| docs.values().cloned().collect()).unwrap_or_default())
    }

    async fn count(&self, collection: &str) -> Result<i64> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).map_or(0, |docs| docs.len() as i64))
    }
}
