use std::collections::HashSet;

use async_graphql::dynamic::{Field, Object, Scalar, Schema, Type};
use docgraph_store::Store;
use tracing::info;

use crate::constants::{MUTATION_TYPE_NAME, QUERY_TYPE_NAME};
use crate::error::{Error, Result};
use crate::object::connection::edge::EdgeObject;
use crate::object::connection::page_info::PageInfoObject;
use crate::object::connection::ConnectionObject;
use crate::object::document::DocumentObject;
use crate::object::node::node_interface;
use crate::object::BasicObject;
use crate::query::RootField;
use crate::registry::Registry;
use crate::types::GraphqlType;
use crate::LOG_TARGET;

/// Assembles the registered types and root fields into an executable schema.
///
/// ```ignore
/// let schema = SchemaBuilder::new(registry)
///     .query(RootField::list("editors", "EditorType"))
///     .finish(store)?;
/// ```
pub struct SchemaBuilder {
    registry: Registry,
    query: Vec<RootField>,
    mutation: Vec<Field>,
    types: Vec<Type>,
}

impl SchemaBuilder {
    pub fn new(registry: Registry) -> Self {
        Self { registry, query: Vec::new(), mutation: Vec::new(), types: Vec::new() }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn query(mut self, field: RootField) -> Self {
        self.query.push(field);
        self
    }

    pub fn mutation(mut self, field: Field) -> Self {
        self.mutation.push(field);
        self
    }

    /// Registers a hand-written type, eg the payload of a mutation.
    pub fn register(mut self, ty: impl Into<Type>) -> Self {
        self.types.push(ty.into());
        self
    }

    /// Builds the schema. The store is attached as context data and shared by
    /// every resolver.
    pub fn finish(self, store: Store) -> Result<Schema> {
        let Self { registry, query, mutation, types } = self;

        let mut root_names = HashSet::new();
        let repeated = query.iter().filter_map(RootField::name).find(|name| !root_names.insert(*name));
        if let Some(name) = repeated {
            return Err(Error::DuplicateRootField(name.to_string()));
        }

        let objects = build_objects(&registry)?;
        let mutation_type_name = (!mutation.is_empty()).then_some(MUTATION_TYPE_NAME);
        let mut schema_builder = Schema::build(QUERY_TYPE_NAME, mutation_type_name, None);

        // register custom scalars
        for scalar_type in GraphqlType::all() {
            schema_builder = schema_builder.register(Scalar::new(scalar_type));
        }

        if registry.types().any(|descriptor| descriptor.node) {
            schema_builder = schema_builder.register(node_interface());
        }

        for object in &objects {
            for object in object.objects() {
                schema_builder = schema_builder.register(object);
            }
        }

        let mut query_root = Object::new(QUERY_TYPE_NAME);
        for field in query {
            query_root = query_root.field(field.into_field(&registry)?);
        }
        schema_builder = schema_builder.register(query_root);

        if !mutation.is_empty() {
            let mut mutation_root = Object::new(MUTATION_TYPE_NAME);
            for field in mutation {
                mutation_root = mutation_root.field(field);
            }
            schema_builder = schema_builder.register(mutation_root);
        }

        for ty in types {
            schema_builder = schema_builder.register(ty);
        }

        let schema = schema_builder.data(store).finish()?;

        info!(
            target: LOG_TARGET,
            types = registry.len(),
            objects = objects.len(),
            "Built schema."
        );

        Ok(schema)
    }
}

// Document objects of every registered type, plus the relay objects they need.
fn build_objects(registry: &Registry) -> Result<Vec<Box<dyn BasicObject>>> {
    let mut objects: Vec<Box<dyn BasicObject>> = Vec::new();

    for descriptor in registry.types() {
        objects.push(Box::new(DocumentObject::new(descriptor, registry)?));

        if let Some(connection) = ConnectionObject::new(descriptor) {
            objects.push(Box::new(EdgeObject::new(
                connection.edge_type_name.clone(),
                descriptor.type_name.clone(),
            )));
            objects.push(Box::new(connection));
        }
    }

    if registry.types().any(|descriptor| descriptor.connection.is_some()) {
        objects.push(Box::new(PageInfoObject));
    }

    Ok(objects)
}
