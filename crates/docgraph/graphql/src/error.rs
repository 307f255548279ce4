use async_graphql::dynamic::SchemaError;
use docgraph_types::ModelError;

/// Failures raised while building types and schemas. None of them can occur at
/// query time.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("You need to pass a valid model in {type_name}, received none")]
    MissingModelReference { type_name: String },
    #[error("Field {model}.{field} of kind {kind} has no GraphQL type")]
    UnsupportedFieldKind { model: String, field: String, kind: String },
    #[error("Field {model}.{field} maps to {graphql_name}, already used by {existing}")]
    DuplicateFieldName { model: String, field: String, existing: String, graphql_name: String },
    #[error("Type {type_name} names field {field} which its model does not have")]
    UnknownField { type_name: String, field: String },
    #[error("Field {type_name}.{field} references model {model} which has no registered type")]
    UnknownReference { type_name: String, field: String, model: String },
    #[error("Type {type_name} is bound to unknown model {model}")]
    UnknownModel { type_name: String, model: String },
    #[error("Unknown type {0}")]
    UnknownType(String),
    #[error("Type {0} is already registered")]
    DuplicateType(String),
    #[error("Model {model} is already mapped by {existing}, {type_name} needs skip_registry")]
    DuplicateModel { model: String, existing: String, type_name: String },
    #[error("The type {0} doesn't have a connection")]
    MissingConnection(String),
    #[error("Root field {0} is declared more than once")]
    DuplicateRootField(String),
    #[error("Root field {0} needs at least one node type")]
    MissingNodeType(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
