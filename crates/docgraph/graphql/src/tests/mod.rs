use async_graphql::dynamic::Schema;
use serde::Deserialize;
use serde_json::Value;

mod common;
mod editors_test;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub total_count: i64,
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Edge<T> {
    pub node: T,
    pub cursor: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

pub async fn run_graphql_query(schema: &Schema, query: &str) -> Value {
    let res = schema.execute(query).await;

    assert!(res.errors.is_empty(), "GraphQL query returned errors: {:?}", res.errors);
    serde_json::to_value(res.data).expect("Failed to serialize GraphQL response")
}

/// Runs a query expected to fail and returns the error messages.
pub async fn run_failing_query(schema: &Schema, query: &str) -> Vec<String> {
    let res = schema.execute(query).await;

    assert!(!res.errors.is_empty(), "GraphQL query should have failed");
    res.errors.into_iter().map(|err| err.message).collect()
}
