use async_graphql::dynamic::ResolverContext;
use async_graphql::Value;
use convert_case::{Case, Casing};
use docgraph_types::Document;

pub fn graphql_field_name(field_name: &str) -> String {
    field_name.to_case(Case::Camel)
}

pub fn json_to_value(json: &serde_json::Value) -> async_graphql::Result<Value> {
    Ok(Value::from_json(json.clone())?)
}

/// Parent document of a field, checked against the collection of the type being
/// resolved.
pub fn parent_document<'a>(
    ctx: &ResolverContext<'a>,
    collection: &str,
) -> async_graphql::Result<&'a Document> {
    let document = ctx
        .parent_value
        .try_downcast_ref::<Document>()
        .map_err(|_| "Received incompatible instance, expected a document")?;

    if document.collection != collection {
        return Err(format!(
            "Received incompatible instance \"{}\" from collection {}, expected {}",
            document.id, document.collection, collection
        )
        .into());
    }

    Ok(document)
}
