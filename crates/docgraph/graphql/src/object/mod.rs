pub mod connection;
pub mod document;
pub mod node;

use async_graphql::dynamic::{Field, FieldFuture, FieldValue, Object};
use async_graphql::Value;

use crate::types::{non_null_if, TypeMapping};

pub trait BasicObject: Send + Sync {
    // Type name of the graphql object (eg "EditorType")
    fn type_name(&self) -> &str;

    // Graphql objects this object contributes to the schema
    fn objects(&self) -> Vec<Object>;
}

// Builds an object whose parent values are `Value::Object`s keyed by graphql field
// name. Only scalar fields of the mapping are exposed.
pub fn value_object(type_name: &str, type_mapping: &TypeMapping) -> Object {
    let mut object = Object::new(type_name);

    for spec in type_mapping.values() {
        let Some(type_ref) = spec.type_data.scalar_type_ref() else {
            continue;
        };

        let field_name = spec.name.clone();
        let type_ref = non_null_if(type_ref, spec.required);
        let field = Field::new(field_name.to_string(), type_ref, move |ctx| {
            let field_name = field_name.clone();

            FieldFuture::new(async move {
                match ctx.parent_value.try_to_value()? {
                    Value::Object(values) => {
                        Ok(values.get(&field_name).cloned().map(FieldValue::value))
                    }
                    _ => Err("incorrect value, requires Value::Object".into()),
                }
            })
        });

        object = object.field(field);
    }

    object
}
