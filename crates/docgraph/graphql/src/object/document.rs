use std::sync::Arc;

use async_graphql::dynamic::{Field, FieldFuture, FieldValue, Object, ResolverContext, TypeRef};
use async_graphql::Value;
use docgraph_store::Store;
use docgraph_types::Document;
use tracing::warn;

use super::connection::Connection;
use super::node::to_global_id;
use super::BasicObject;
use crate::constants::{ID_FIELD, NODE_TYPE_NAME};
use crate::error::{Error, Result};
use crate::mapper::ObjectTypeDescriptor;
use crate::options::FieldResolver;
use crate::registry::Registry;
use crate::types::{non_null_if, FieldSpec, TypeData};
use crate::utils::{json_to_value, parent_document};
use crate::LOG_TARGET;

#[derive(Clone, Debug)]
enum Resolution {
    // stored value returned as is
    Value,
    GlobalId,
    Reference { collection: String },
    ReferenceList { collection: String },
    ReferenceConnection { collection: String },
}

struct DocumentField {
    key: String,
    type_name: String,
    collection: String,
    resolution: Resolution,
    resolver: Option<FieldResolver>,
}

/// Object type backed by stored documents of one collection. Reference fields
/// are bound to their target types when the object is created, so every model
/// must be registered before.
pub struct DocumentObject {
    type_name: String,
    description: Option<String>,
    node: bool,
    fields: Vec<(FieldSpec, TypeRef, Arc<DocumentField>)>,
}

impl DocumentObject {
    pub fn new(descriptor: &ObjectTypeDescriptor, registry: &Registry) -> Result<Self> {
        let mut fields = Vec::with_capacity(descriptor.type_mapping.len());

        for (key, spec) in &descriptor.type_mapping {
            let (type_ref, resolution) = resolve_type(descriptor, registry, key, spec)?;
            let field = DocumentField {
                key: key.clone(),
                type_name: descriptor.type_name.clone(),
                collection: descriptor.model.collection().to_string(),
                resolution,
                resolver: descriptor.resolvers.get(key).cloned(),
            };
            fields.push((spec.clone(), type_ref, Arc::new(field)));
        }

        Ok(Self {
            type_name: descriptor.type_name.clone(),
            description: descriptor.description.clone(),
            node: descriptor.node,
            fields,
        })
    }
}

impl BasicObject for DocumentObject {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn objects(&self) -> Vec<Object> {
        let mut object = Object::new(self.type_name());
        if let Some(description) = &self.description {
            object = object.description(description);
        }
        if self.node {
            object = object.implement(NODE_TYPE_NAME);
        }

        for (spec, type_ref, field) in &self.fields {
            let field = field.clone();
            object = object.field(Field::new(spec.name.as_str(), type_ref.clone(), move |ctx| {
                let field = field.clone();

                FieldFuture::new(async move {
                    let document = parent_document(&ctx, &field.collection)?;
                    field.resolve(&ctx, document).await
                })
            }));
        }

        vec![object]
    }
}

fn resolve_type(
    descriptor: &ObjectTypeDescriptor,
    registry: &Registry,
    key: &str,
    spec: &FieldSpec,
) -> Result<(TypeRef, Resolution)> {
    let target = |model: &str| {
        registry.get_type_for_model(model).ok_or_else(|| Error::UnknownReference {
            type_name: descriptor.type_name.clone(),
            field: key.to_string(),
            model: model.to_string(),
        })
    };

    let resolved = match (&spec.type_data, spec.type_data.inner()) {
        (TypeData::Simple(_), _) if key == ID_FIELD && descriptor.node => {
            (TypeRef::named_nn(TypeRef::ID), Resolution::GlobalId)
        }
        (TypeData::Reference(model), _) => {
            let target = target(model)?;
            let collection = target.model.collection().to_string();
            let type_ref = non_null_if(TypeRef::named(&target.type_name), spec.required);
            (type_ref, Resolution::Reference { collection })
        }
        (TypeData::List(_), Some(TypeData::Reference(model))) => {
            let target = target(model)?;
            let collection = target.model.collection().to_string();

            match &target.connection {
                Some(connection) => (
                    non_null_if(TypeRef::named(connection), spec.required),
                    Resolution::ReferenceConnection { collection },
                ),
                None => (
                    non_null_if(TypeRef::named_list(&target.type_name), spec.required),
                    Resolution::ReferenceList { collection },
                ),
            }
        }
        (type_data, _) => {
            let type_ref = type_data.scalar_type_ref().ok_or_else(|| Error::UnsupportedFieldKind {
                model: descriptor.model.name().to_string(),
                field: key.to_string(),
                kind: format!("{type_data:?}"),
            })?;
            (non_null_if(type_ref, spec.required), Resolution::Value)
        }
    };

    Ok(resolved)
}

impl DocumentField {
    fn stored_value(&self, document: &Document) -> async_graphql::Result<Option<Value>> {
        if let Some(resolver) = &self.resolver {
            return resolver(document);
        }
        if self.key == ID_FIELD {
            return Ok(Some(Value::String(document.id.clone())));
        }

        document.get(&self.key).map(json_to_value).transpose()
    }

    fn stored_ids(&self, document: &Document) -> async_graphql::Result<Vec<String>> {
        if self.resolver.is_none() {
            return Ok(document.reference_ids(&self.key));
        }

        let ids = match self.stored_value(document)? {
            Some(Value::String(id)) => vec![id],
            Some(Value::List(ids)) => ids
                .into_iter()
                .filter_map(|id| match id {
                    Value::String(id) => Some(id),
                    _ => None,
                })
                .collect(),
            _ => vec![],
        };
        Ok(ids)
    }

    async fn resolve<'a>(
        &self,
        ctx: &ResolverContext<'a>,
        document: &Document,
    ) -> async_graphql::Result<Option<FieldValue<'a>>> {
        match &self.resolution {
            Resolution::Value => Ok(self.stored_value(document)?.map(FieldValue::value)),
            Resolution::GlobalId => Ok(self.stored_value(document)?.map(|id| match id {
                Value::String(id) => FieldValue::value(to_global_id(&self.type_name, &id)),
                other => FieldValue::value(other),
            })),
            Resolution::Reference { collection } => {
                let Some(id) = self.stored_ids(document)?.into_iter().next() else {
                    return Ok(None);
                };

                let store = ctx.data::<Store>()?;
                let referenced = store.find_by_id(collection, &id).await?;
                if referenced.is_none() {
                    warn!(
                        target: LOG_TARGET,
                        document = %document.id,
                        field = %self.key,
                        reference = %id,
                        "Dangling reference."
                    );
                }
                Ok(referenced.map(FieldValue::owned_any))
            }
            Resolution::ReferenceList { collection } => {
                let documents = self.referenced_documents(ctx, document, collection).await?;
                Ok(Some(FieldValue::list(documents.into_iter().map(FieldValue::owned_any))))
            }
            Resolution::ReferenceConnection { collection } => {
                let documents = self.referenced_documents(ctx, document, collection).await?;
                Ok(Some(FieldValue::owned_any(Connection::new(documents))))
            }
        }
    }

    async fn referenced_documents(
        &self,
        ctx: &ResolverContext<'_>,
        document: &Document,
        collection: &str,
    ) -> async_graphql::Result<Vec<Document>> {
        let ids = self.stored_ids(document)?;
        let store = ctx.data::<Store>()?;
        let documents = store.find_many(collection, &ids).await?;

        if documents.len() != ids.len() {
            warn!(
                target: LOG_TARGET,
                document = %document.id,
                field = %self.key,
                missing = ids.len() - documents.len(),
                "Dangling references skipped."
            );
        }
        Ok(documents)
    }
}
