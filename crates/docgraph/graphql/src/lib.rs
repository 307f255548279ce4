mod constants;
pub mod config;
pub mod error;
mod mapping;
pub mod mapper;
pub mod object;
pub mod options;
pub mod query;
pub mod registry;
pub mod schema;
pub mod types;
mod utils;

pub use error::{Error, Result};
pub use mapper::ObjectTypeDescriptor;
pub use options::{FieldResolver, ObjectTypeOptions};
pub use query::RootField;
pub use registry::Registry;
pub use schema::SchemaBuilder;

pub(crate) const LOG_TARGET: &str = "docgraph::graphql";

#[cfg(test)]
mod tests;
