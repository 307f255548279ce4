use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::dynamic::{
    Field, FieldFuture, FieldValue, InputValue, Interface, InterfaceField, TypeRef,
};
use base64::engine::general_purpose;
use base64::Engine as _;
use docgraph_store::Store;

use crate::constants::{ID_FIELD, NODE_TYPE_NAME};
use crate::registry::Registry;

pub fn node_interface() -> Interface {
    Interface::new(NODE_TYPE_NAME)
        .description("An object with an ID")
        .field(InterfaceField::new(ID_FIELD, TypeRef::named_nn(TypeRef::ID)))
}

/// Global ids are `{type_name}:{document id}`, base64 encoded.
pub fn to_global_id(type_name: &str, id: &str) -> String {
    general_purpose::STANDARD.encode(format!("{type_name}:{id}").as_bytes())
}

pub fn from_global_id(global_id: &str) -> async_graphql::Result<(String, String)> {
    let bytes = general_purpose::STANDARD.decode(global_id)?;
    let decoded = String::from_utf8(bytes)?;

    match decoded.split_once(':') {
        Some((type_name, id)) if !type_name.is_empty() && !id.is_empty() => {
            Ok((type_name.to_string(), id.to_string()))
        }
        _ => Err(format!("Invalid global id \"{global_id}\"").into()),
    }
}

/// Root `node(id: ID!)` field resolving any node type from its global id.
pub fn node_field(name: &str, registry: &Registry) -> Field {
    let collections: Arc<HashMap<String, String>> = Arc::new(
        registry
            .types()
            .filter(|descriptor| descriptor.node)
            .map(|descriptor| {
                (descriptor.type_name.clone(), descriptor.model.collection().to_string())
            })
            .collect(),
    );

    Field::new(name, TypeRef::named(NODE_TYPE_NAME), move |ctx| {
        let collections = collections.clone();

        FieldFuture::new(async move {
            let global_id = ctx.args.try_get(ID_FIELD)?.string()?;
            let (type_name, id) = from_global_id(global_id)?;
            let collection = collections
                .get(&type_name)
                .ok_or_else(|| format!("Must receive a Node type, received {type_name}"))?;

            let store = ctx.data::<Store>()?;
            let document = store.find_by_id(collection, &id).await?;
            Ok(document.map(|document| FieldValue::owned_any(document).with_type(type_name)))
        })
    })
    .argument(InputValue::new(ID_FIELD, TypeRef::named_nn(TypeRef::ID)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_ids_carry_type_and_id() {
        let global_id = to_global_id("ArticleNode", "5f0c8c3a9d1e4b2a3c4d5e6f");
        assert_eq!(
            from_global_id(&global_id).unwrap(),
            ("ArticleNode".to_string(), "5f0c8c3a9d1e4b2a3c4d5e6f".to_string())
        );
    }

    #[test]
    fn malformed_global_ids_are_rejected() {
        assert!(from_global_id("not base64!").is_err());
        assert!(from_global_id(&general_purpose::STANDARD.encode("no-separator")).is_err());
        assert!(from_global_id(&general_purpose::STANDARD.encode(":missing-type")).is_err());
    }
}
