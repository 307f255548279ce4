use std::fmt;

use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};

/// Name of the implicit primary key every model carries.
pub const ID_FIELD: &str = "id";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("model name cannot be empty")]
    EmptyModelName,
    #[error("model {model} has a field with an empty name")]
    EmptyFieldName { model: String },
    #[error("model {model} declares field {field} more than once")]
    DuplicateField { model: String, field: String },
    #[error("model {model} cannot redefine the reserved field `{ID_FIELD}`")]
    ReservedField { model: String },
}

/// Semantic kind of a model field, mirroring the field classes of a document ORM.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    String,
    Email,
    Url,
    Int,
    Long,
    Float,
    Decimal,
    Boolean,
    DateTime,
    ObjectId,
    List { of: Box<FieldKind> },
    Reference { model: String },
    Embedded { document: String },
    Dict,
}

impl FieldKind {
    pub fn list(of: FieldKind) -> Self {
        FieldKind::List { of: Box::new(of) }
    }

    pub fn reference(model: impl Into<String>) -> Self {
        FieldKind::Reference { model: model.into() }
    }

    pub fn embedded(document: impl Into<String>) -> Self {
        FieldKind::Embedded { document: document.into() }
    }

    /// Model targeted by a reference, looking through lists.
    pub fn reference_target(&self) -> Option<&str> {
        match self {
            FieldKind::Reference { model } => Some(model),
            FieldKind::List { of } => of.reference_target(),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::String => write!(f, "StringField"),
            FieldKind::Email => write!(f, "EmailField"),
            FieldKind::Url => write!(f, "URLField"),
            FieldKind::Int => write!(f, "IntField"),
            FieldKind::Long => write!(f, "LongField"),
            FieldKind::Float => write!(f, "FloatField"),
            FieldKind::Decimal => write!(f, "DecimalField"),
            FieldKind::Boolean => write!(f, "BooleanField"),
            FieldKind::DateTime => write!(f, "DateTimeField"),
            FieldKind::ObjectId => write!(f, "ObjectIdField"),
            FieldKind::List { of } => write!(f, "ListField({of})"),
            FieldKind::Reference { model } => write!(f, "ReferenceField({model})"),
            FieldKind::Embedded { document } => write!(f, "EmbeddedDocumentField({document})"),
            FieldKind::Dict => write!(f, "DictField"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelField {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
}

impl ModelField {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self { name: name.into(), kind, required: false }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Field metadata of a document model. Built once and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model {
    name: String,
    collection: String,
    fields: Vec<ModelField>,
}

impl Model {
    /// Builds a model from its declared fields. The primary key `id` is added in
    /// front of them.
    pub fn new(name: impl Into<String>, fields: Vec<ModelField>) -> Result<Self, ModelError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ModelError::EmptyModelName);
        }

        let mut all_fields = vec![ModelField::new(ID_FIELD, FieldKind::ObjectId).required()];
        for field in fields {
            if field.name.is_empty() {
                return Err(ModelError::EmptyFieldName { model: name });
            }
            if field.name == ID_FIELD {
                return Err(ModelError::ReservedField { model: name });
            }
            if all_fields.iter().any(|f| f.name == field.name) {
                return Err(ModelError::DuplicateField { model: name, field: field.name });
            }
            all_fields.push(field);
        }

        let collection = name.to_case(Case::Snake);
        Ok(Self { name, collection, fields: all_fields })
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn fields(&self) -> &[ModelField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&ModelField> {
        self.fields.iter().find(|f| f.name == name)
    }
}
