use async_graphql::dynamic::{Field, FieldFuture, FieldValue, Object, TypeRef};
use async_graphql::Value;

use super::Edge;
use crate::constants::{CURSOR_FIELD, NODE_FIELD};
use crate::object::BasicObject;

#[derive(Debug)]
pub struct EdgeObject {
    pub type_name: String,
    pub node_type_name: String,
}

impl EdgeObject {
    pub fn new(type_name: String, node_type_name: String) -> Self {
        Self { type_name, node_type_name }
    }
}

impl BasicObject for EdgeObject {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn objects(&self) -> Vec<Object> {
        let node = Field::new(NODE_FIELD, TypeRef::named(&self.node_type_name), |ctx| {
            FieldFuture::new(async move {
                let edge = ctx.parent_value.try_downcast_ref::<Edge>()?;
                Ok(Some(FieldValue::borrowed_any(&edge.node)))
            })
        });

        let cursor = Field::new(CURSOR_FIELD, TypeRef::named_nn(TypeRef::STRING), |ctx| {
            FieldFuture::new(async move {
                let edge = ctx.parent_value.try_downcast_ref::<Edge>()?;
                Ok(Some(Value::String(edge.cursor.clone())))
            })
        });

        vec![Object::new(self.type_name()).field(node).field(cursor)]
    }
}
