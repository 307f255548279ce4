use async_graphql::dynamic::TypeRef;
use async_graphql::{Name, Value};
use indexmap::IndexMap;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

// TypeMapping is the field-spec table derived from a model, keyed by model field
// name in declaration order. ValueMapping holds resolved values of value-backed
// objects (eg PageInfo) keyed by GraphQL field name.
pub type TypeMapping = IndexMap<String, FieldSpec>;
pub type ValueMapping = IndexMap<Name, Value>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeData {
    Simple(TypeRef),
    // Target model name, resolved to its output type when the schema is built
    Reference(String),
    List(Box<TypeData>),
}

impl TypeData {
    pub fn inner(&self) -> Option<&TypeData> {
        match self {
            TypeData::List(inner) => Some(inner),
            _ => None,
        }
    }

    /// Type ref of scalar data, None if a reference is involved.
    pub fn scalar_type_ref(&self) -> Option<TypeRef> {
        match self {
            TypeData::Simple(ty) => Some(ty.clone()),
            TypeData::List(inner) => inner.scalar_type_ref().map(|ty| TypeRef::List(Box::new(ty))),
            TypeData::Reference(_) => None,
        }
    }
}

/// One output field of a generated type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: Name,
    pub type_data: TypeData,
    pub required: bool,
}

impl FieldSpec {
    pub fn new(name: &str, type_data: TypeData, required: bool) -> Self {
        Self { name: Name::new(name), type_data, required }
    }
}

pub fn non_null_if(ty: TypeRef, required: bool) -> TypeRef {
    if required { TypeRef::NonNull(Box::new(ty)) } else { ty }
}

// basic types like ID and Int are handled by async-graphql
#[derive(AsRefStr, Display, EnumIter, EnumString, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphqlType {
    DateTime,
}

impl GraphqlType {
    pub fn all() -> Vec<String> {
        GraphqlType::iter().map(|ty| ty.to_string()).collect()
    }
}
