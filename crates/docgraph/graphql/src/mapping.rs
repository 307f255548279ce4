use async_graphql::dynamic::TypeRef;
use lazy_static::lazy_static;

use crate::types::{FieldSpec, TypeData, TypeMapping};

lazy_static! {
    pub static ref PAGE_INFO_TYPE_MAPPING: TypeMapping = TypeMapping::from([
        (
            "has_previous_page".to_string(),
            FieldSpec::new("hasPreviousPage", TypeData::Simple(TypeRef::named(TypeRef::BOOLEAN)), true),
        ),
        (
            "has_next_page".to_string(),
            FieldSpec::new("hasNextPage", TypeData::Simple(TypeRef::named(TypeRef::BOOLEAN)), true),
        ),
        (
            "start_cursor".to_string(),
            FieldSpec::new("startCursor", TypeData::Simple(TypeRef::named(TypeRef::STRING)), false),
        ),
        (
            "end_cursor".to_string(),
            FieldSpec::new("endCursor", TypeData::Simple(TypeRef::named(TypeRef::STRING)), false),
        ),
    ]);
}
