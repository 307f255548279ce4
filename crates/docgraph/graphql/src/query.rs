use async_graphql::dynamic::{Field, FieldFuture, FieldValue, InputValue, TypeRef};
use docgraph_store::Store;

use crate::constants::{ID_FIELD, NODE_FIELD};
use crate::error::{Error, Result};
use crate::object::connection::Connection;
use crate::object::node::node_field;
use crate::registry::Registry;

/// Entry point of the `Query` root. Fields naming a type are checked against the
/// registry when the schema is built.
pub enum RootField {
    /// First document of the collection, null when it is empty.
    First { name: String, type_name: String },
    List { name: String, type_name: String },
    /// Document looked up by the `id` argument.
    ById { name: String, type_name: String },
    Connection { name: String, type_name: String },
    Node { name: String },
    Custom(Field),
}

impl RootField {
    pub fn first(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::First { name: name.into(), type_name: type_name.into() }
    }

    pub fn list(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::List { name: name.into(), type_name: type_name.into() }
    }

    pub fn by_id(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::ById { name: name.into(), type_name: type_name.into() }
    }

    pub fn connection(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::Connection { name: name.into(), type_name: type_name.into() }
    }

    pub fn node() -> Self {
        Self::Node { name: NODE_FIELD.to_string() }
    }

    pub fn custom(field: Field) -> Self {
        Self::Custom(field)
    }

    /// Name of the root field. Custom fields carry their own name.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::First { name, .. }
            | Self::List { name, .. }
            | Self::ById { name, .. }
            | Self::Connection { name, .. }
            | Self::Node { name } => Some(name),
            Self::Custom(_) => None,
        }
    }

    pub fn into_field(self, registry: &Registry) -> Result<Field> {
        let collection_of = |type_name: &str| {
            registry
                .get(type_name)
                .map(|descriptor| descriptor.model.collection().to_string())
                .ok_or_else(|| Error::UnknownType(type_name.to_string()))
        };

        let field = match self {
            Self::First { name, type_name } => {
                let collection = collection_of(&type_name)?;
                Field::new(name, TypeRef::named(type_name), move |ctx| {
                    let collection = collection.clone();
                    FieldFuture::new(async move {
                        let store = ctx.data::<Store>()?;
                        let document = store.first(&collection).await?;
                        Ok(document.map(FieldValue::owned_any))
                    })
                })
            }
            Self::List { name, type_name } => {
                let collection = collection_of(&type_name)?;
                Field::new(name, TypeRef::named_list(type_name), move |ctx| {
                    let collection = collection.clone();
                    FieldFuture::new(async move {
                        let store = ctx.data::<Store>()?;
                        let documents = store.find_all(&collection).await?;
                        Ok(Some(FieldValue::list(documents.into_iter().map(FieldValue::owned_any))))
                    })
                })
            }
            Self::ById { name, type_name } => {
                let collection = collection_of(&type_name)?;
                Field::new(name, TypeRef::named(type_name), move |ctx| {
                    let collection = collection.clone();
                    FieldFuture::new(async move {
                        let id = ctx.args.try_get(ID_FIELD)?.string()?;
                        let store = ctx.data::<Store>()?;
                        let document = store.find_by_id(&collection, id).await?;
                        Ok(document.map(FieldValue::owned_any))
                    })
                })
                .argument(InputValue::new(ID_FIELD, TypeRef::named_nn(TypeRef::ID)))
            }
            Self::Connection { name, type_name } => {
                let collection = collection_of(&type_name)?;
                let connection = registry
                    .get(&type_name)
                    .and_then(|descriptor| descriptor.connection.clone())
                    .ok_or(Error::MissingConnection(type_name))?;

                Field::new(name, TypeRef::named(connection), move |ctx| {
                    let collection = collection.clone();
                    FieldFuture::new(async move {
                        let store = ctx.data::<Store>()?;
                        let documents = store.find_all(&collection).await?;
                        Ok(Some(FieldValue::owned_any(Connection::new(documents))))
                    })
                })
            }
            Self::Node { name } => {
                if !registry.types().any(|descriptor| descriptor.node) {
                    return Err(Error::MissingNodeType(name));
                }
                node_field(&name, registry)
            }
            Self::Custom(field) => field,
        };

        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use docgraph_types::{FieldKind, Model, ModelField};

    use super::*;
    use crate::options::ObjectTypeOptions;

    fn registry() -> Registry {
        let editor = Model::new("Editor", vec![ModelField::new("first_name", FieldKind::String)])
            .unwrap();
        let mut registry = Registry::new();
        registry.register(ObjectTypeOptions::new("EditorType").model(editor)).unwrap();
        registry
    }

    fn build_error(field: RootField) -> Error {
        match field.into_field(&registry()) {
            Ok(_) => panic!("root field should not build"),
            Err(err) => err,
        }
    }

    #[test]
    fn unknown_types_are_rejected() {
        let err = build_error(RootField::list("articles", "ArticleType"));
        assert!(matches!(err, Error::UnknownType(name) if name == "ArticleType"));
    }

    #[test]
    fn connection_requires_a_connection_type() {
        let err = build_error(RootField::connection("editors", "EditorType"));
        assert!(matches!(err, Error::MissingConnection(name) if name == "EditorType"));
    }

    #[test]
    fn node_field_requires_a_node_type() {
        let err = build_error(RootField::node());
        assert!(matches!(err, Error::MissingNodeType(name) if name == "node"));
    }

    #[test]
    fn custom_fields_have_no_name() {
        assert_eq!(RootField::list("editors", "EditorType").name(), Some("editors"));
        assert_eq!(RootField::node().name(), Some("node"));

        let custom = Field::new("hello", TypeRef::named(TypeRef::STRING), |_| {
            FieldFuture::new(async { Ok(Some(FieldValue::value("world"))) })
        });
        assert_eq!(RootField::custom(custom).name(), None);
    }
}
