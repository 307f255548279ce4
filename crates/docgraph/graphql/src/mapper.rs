use async_graphql::dynamic::TypeRef;
use docgraph_types::{FieldKind, Model, ModelField};
use tracing::debug;

use crate::constants::{CONNECTION_SUFFIX, EDGE_SUFFIX, ID_FIELD};
use crate::error::{Error, Result};
use crate::options::{ObjectTypeOptions, ResolverOverrides};
use crate::types::{FieldSpec, GraphqlType, TypeData, TypeMapping};
use crate::utils::graphql_field_name;
use crate::LOG_TARGET;

/// Output type derived from a model. Built once from [`ObjectTypeOptions`] and
/// never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDescriptor {
    pub type_name: String,
    pub model: Model,
    pub type_mapping: TypeMapping,
    pub node: bool,
    pub connection: Option<String>,
    pub skip_registry: bool,
    pub description: Option<String>,
    pub resolvers: ResolverOverrides,
}

impl ObjectTypeDescriptor {
    pub fn from_options(options: ObjectTypeOptions) -> Result<Self> {
        let ObjectTypeOptions {
            type_name,
            model,
            only_fields,
            exclude_fields,
            node,
            connection,
            skip_registry,
            description,
            resolvers,
        } = options;

        let Some(model) = model else {
            return Err(Error::MissingModelReference { type_name });
        };

        let unknown = only_fields
            .iter()
            .chain(exclude_fields.iter())
            .map(String::as_str)
            .chain(resolvers.fields())
            .find(|field| model.field(field).is_none());
        if let Some(field) = unknown {
            return Err(Error::UnknownField { type_name, field: field.to_string() });
        }

        let type_mapping = build_type_mapping(&model, &only_fields, &exclude_fields, node)?;
        let connection = connection
            .unwrap_or(node)
            .then(|| format!("{type_name}{CONNECTION_SUFFIX}"));

        debug!(
            target: LOG_TARGET,
            type_name = %type_name,
            model = %model.name(),
            fields = type_mapping.len(),
            node,
            "Derived object type from model."
        );

        Ok(Self {
            type_name,
            model,
            type_mapping,
            node,
            connection,
            skip_registry,
            description,
            resolvers,
        })
    }

    pub fn edge_type_name(&self) -> Option<String> {
        self.connection.as_ref().map(|_| format!("{}{EDGE_SUFFIX}", self.type_name))
    }
}

/// Builds the field-spec table of a model. A field is skipped when `only_fields`
/// is non-empty and lacks it, or when `exclude_fields` names it. Node types
/// always keep `id`, the `Node` interface requires it. Two kept fields may not
/// share a camelCased name.
pub fn build_type_mapping(
    model: &Model,
    only_fields: &[String],
    exclude_fields: &[String],
    node: bool,
) -> Result<TypeMapping> {
    let mut type_mapping = TypeMapping::new();

    for field in model.fields() {
        let is_not_in_only = !only_fields.is_empty() && !only_fields.contains(&field.name);
        let is_excluded = exclude_fields.contains(&field.name);
        let is_node_id = node && field.name == ID_FIELD;
        if (is_not_in_only || is_excluded) && !is_node_id {
            continue;
        }

        let graphql_name = graphql_field_name(&field.name);
        let taken = type_mapping.iter().find(|(_, spec)| spec.name.as_str() == graphql_name);
        if let Some((existing, _)) = taken {
            return Err(Error::DuplicateFieldName {
                model: model.name().to_string(),
                field: field.name.clone(),
                existing: existing.clone(),
                graphql_name,
            });
        }

        let type_data = convert_field(model, field)?;
        type_mapping.insert(
            field.name.clone(),
            FieldSpec::new(&graphql_name, type_data, field.required),
        );
    }

    Ok(type_mapping)
}

pub fn convert_field(model: &Model, field: &ModelField) -> Result<TypeData> {
    convert_kind(&field.kind, 0).ok_or_else(|| Error::UnsupportedFieldKind {
        model: model.name().to_string(),
        field: field.name.clone(),
        kind: field.kind.to_string(),
    })
}

// References are allowed on their own or directly inside a list.
fn convert_kind(kind: &FieldKind, list_depth: usize) -> Option<TypeData> {
    let type_data = match kind {
        FieldKind::String | FieldKind::Email | FieldKind::Url => {
            TypeData::Simple(TypeRef::named(TypeRef::STRING))
        }
        FieldKind::Int | FieldKind::Long => TypeData::Simple(TypeRef::named(TypeRef::INT)),
        FieldKind::Float | FieldKind::Decimal => TypeData::Simple(TypeRef::named(TypeRef::FLOAT)),
        FieldKind::Boolean => TypeData::Simple(TypeRef::named(TypeRef::BOOLEAN)),
        FieldKind::DateTime => TypeData::Simple(TypeRef::named(GraphqlType::DateTime.to_string())),
        FieldKind::ObjectId => TypeData::Simple(TypeRef::named(TypeRef::ID)),
        FieldKind::List { of } => TypeData::List(Box::new(convert_kind(of, list_depth + 1)?)),
        FieldKind::Reference { model } if list_depth <= 1 => TypeData::Reference(model.clone()),
        FieldKind::Reference { .. } | FieldKind::Embedded { .. } | FieldKind::Dict => return None,
    };

    Some(type_data)
}
