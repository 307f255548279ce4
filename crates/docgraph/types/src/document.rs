use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::object_id::ObjectId;

/// A stored instance of a model. Reference fields hold the id of the referenced
/// document, reference lists an array of ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub collection: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Document {
    /// Creates an empty document with a freshly generated id.
    pub fn new(collection: impl Into<String>) -> Self {
        Self { id: ObjectId::new().to_string(), collection: collection.into(), fields: Map::new() }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).filter(|v| !v.is_null())
    }

    /// Ids stored in a reference or reference list field.
    pub fn reference_ids(&self, name: &str) -> Vec<String> {
        match self.get(name) {
            Some(Value::String(id)) => vec![id.clone()],
            Some(Value::Array(ids)) => {
                ids.iter().filter_map(|id| id.as_str().map(str::to_string)).collect()
            }
            _ => vec![],
        }
    }
}
