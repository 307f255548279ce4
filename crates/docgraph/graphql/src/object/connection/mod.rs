use async_graphql::dynamic::{Field, FieldFuture, FieldValue, Object, TypeRef};
use async_graphql::{Name, Value};
use docgraph_types::Document;

use super::BasicObject;
use crate::constants::{EDGES_FIELD, PAGE_INFO_FIELD, PAGE_INFO_TYPE_NAME, TOTAL_COUNT_FIELD};
use crate::mapper::ObjectTypeDescriptor;
use crate::types::ValueMapping;

pub mod cursor;
pub mod edge;
pub mod page_info;

/// A resolved relay connection. It always holds the whole result set, so both
/// page flags are false.
#[derive(Debug, Clone)]
pub struct Connection {
    pub edges: Vec<Edge>,
    pub total_count: i64,
}

#[derive(Debug, Clone)]
pub struct Edge {
    pub node: Document,
    pub cursor: String,
}

impl Connection {
    pub fn new(documents: Vec<Document>) -> Self {
        let total_count = documents.len() as i64;
        let edges = documents
            .into_iter()
            .enumerate()
            .map(|(offset, node)| Edge { node, cursor: cursor::encode(offset) })
            .collect();

        Self { edges, total_count }
    }

    pub fn page_info(&self) -> ValueMapping {
        let cursor_value = |edge: Option<&Edge>| {
            edge.map_or(Value::Null, |edge| Value::String(edge.cursor.clone()))
        };

        ValueMapping::from([
            (Name::new("hasPreviousPage"), Value::Boolean(false)),
            (Name::new("hasNextPage"), Value::Boolean(false)),
            (Name::new("startCursor"), cursor_value(self.edges.first())),
            (Name::new("endCursor"), cursor_value(self.edges.last())),
        ])
    }
}

/// `{type_name}Connection` according to the relay spec https://relay.dev/graphql/connections.htm
#[derive(Debug)]
pub struct ConnectionObject {
    pub type_name: String,
    pub edge_type_name: String,
}

impl ConnectionObject {
    pub fn new(descriptor: &ObjectTypeDescriptor) -> Option<Self> {
        let type_name = descriptor.connection.clone()?;
        let edge_type_name = descriptor.edge_type_name()?;
        Some(Self { type_name, edge_type_name })
    }
}

impl BasicObject for ConnectionObject {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn objects(&self) -> Vec<Object> {
        let edges_type = TypeRef::NonNull(Box::new(TypeRef::named_list(&self.edge_type_name)));
        let edges = Field::new(EDGES_FIELD, edges_type, |ctx| {
            FieldFuture::new(async move {
                let connection = ctx.parent_value.try_downcast_ref::<Connection>()?;
                let edges = connection.edges.iter().map(|edge| FieldValue::borrowed_any(edge));
                Ok(Some(FieldValue::list(edges)))
            })
        });

        let page_info_type = TypeRef::named_nn(PAGE_INFO_TYPE_NAME);
        let page_info = Field::new(PAGE_INFO_FIELD, page_info_type, |ctx| {
            FieldFuture::new(async move {
                let connection = ctx.parent_value.try_downcast_ref::<Connection>()?;
                Ok(Some(FieldValue::value(Value::Object(connection.page_info()))))
            })
        });

        let total_count = Field::new(TOTAL_COUNT_FIELD, TypeRef::named_nn(TypeRef::INT), |ctx| {
            FieldFuture::new(async move {
                let connection = ctx.parent_value.try_downcast_ref::<Connection>()?;
                Ok(Some(Value::from(connection.total_count)))
            })
        });

        vec![Object::new(self.type_name()).field(edges).field(page_info).field(total_count)]
    }
}
