use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use docgraph_types::{Model, ModelField};
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::options::ObjectTypeOptions;
use crate::query::RootField;
use crate::registry::Registry;
use crate::schema::SchemaBuilder;
use crate::LOG_TARGET;

/// Models, object types and root fields of a schema, read from TOML.
///
/// ```toml
/// [[models]]
/// name = "Editor"
/// fields = [{ name = "first_name", kind = { type = "string" }, required = true }]
///
/// [[types]]
/// name = "EditorType"
/// model = "Editor"
///
/// [[query]]
/// kind = "list"
/// name = "editors"
/// type = "EditorType"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    #[serde(default)]
    pub models: Vec<ModelConfig>,
    #[serde(default)]
    pub types: Vec<TypeConfig>,
    #[serde(default)]
    pub query: Vec<QueryConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    pub name: String,
    pub collection: Option<String>,
    #[serde(default)]
    pub fields: Vec<ModelField>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeConfig {
    pub name: String,
    pub model: Option<String>,
    #[serde(default)]
    pub only_fields: Vec<String>,
    #[serde(default)]
    pub exclude_fields: Vec<String>,
    #[serde(default)]
    pub node: bool,
    pub connection: Option<bool>,
    #[serde(default)]
    pub skip_registry: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryConfig {
    First {
        name: String,
        #[serde(rename = "type")]
        type_name: String,
    },
    List {
        name: String,
        #[serde(rename = "type")]
        type_name: String,
    },
    ById {
        name: String,
        #[serde(rename = "type")]
        type_name: String,
    },
    Connection {
        name: String,
        #[serde(rename = "type")]
        type_name: String,
    },
    Node,
}

impl From<QueryConfig> for RootField {
    fn from(config: QueryConfig) -> Self {
        match config {
            QueryConfig::First { name, type_name } => RootField::first(name, type_name),
            QueryConfig::List { name, type_name } => RootField::list(name, type_name),
            QueryConfig::ById { name, type_name } => RootField::by_id(name, type_name),
            QueryConfig::Connection { name, type_name } => RootField::connection(name, type_name),
            QueryConfig::Node => RootField::node(),
        }
    }
}

impl FromStr for SchemaConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

impl SchemaConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        debug!(target: LOG_TARGET, path = %path.as_ref().display(), "Loaded schema config.");
        content.parse()
    }

    /// Builds the declared models keyed by name. References must target a
    /// declared model.
    pub fn models(&self) -> Result<IndexMap<String, Model>> {
        let mut models = IndexMap::with_capacity(self.models.len());

        for config in &self.models {
            let mut model = Model::new(config.name.clone(), config.fields.clone())?;
            if let Some(collection) = &config.collection {
                model = model.with_collection(collection.clone());
            }
            if models.insert(config.name.clone(), model).is_some() {
                return Err(Error::InvalidConfig(format!("model {} is declared twice", config.name)));
            }
        }

        for model in models.values() {
            for field in model.fields() {
                if let Some(target) = field.kind.reference_target() {
                    if !models.contains_key(target) {
                        return Err(Error::InvalidConfig(format!(
                            "field {}.{} references undeclared model {target}",
                            model.name(),
                            field.name
                        )));
                    }
                }
            }
        }

        Ok(models)
    }

    pub fn registry(&self) -> Result<Registry> {
        let models = self.models()?;
        let mut registry = Registry::new();

        for config in &self.types {
            let Some(model_name) = &config.model else {
                return Err(Error::MissingModelReference { type_name: config.name.clone() });
            };
            let model = models.get(model_name).cloned().ok_or_else(|| Error::UnknownModel {
                type_name: config.name.clone(),
                model: model_name.clone(),
            })?;

            let mut options = ObjectTypeOptions::new(config.name.clone())
                .model(model)
                .only_fields(config.only_fields.iter().cloned())
                .exclude_fields(config.exclude_fields.iter().cloned());
            if config.node {
                options = options.node();
            }
            if let Some(connection) = config.connection {
                options = options.connection(connection);
            }
            if config.skip_registry {
                options = options.skip_registry();
            }
            if let Some(description) = &config.description {
                options = options.description(description.clone());
            }

            registry.register(options)?;
        }

        Ok(registry)
    }

    /// Schema builder holding the configured types and root fields. Root field
    /// names must be unique.
    pub fn schema_builder(&self) -> Result<SchemaBuilder> {
        if self.query.is_empty() {
            return Err(Error::InvalidConfig("at least one [[query]] field is required".into()));
        }

        let fields: Vec<RootField> = self.query.iter().cloned().map(RootField::from).collect();
        let mut names = HashSet::new();
        let repeated = fields.iter().filter_map(RootField::name).find(|name| !names.insert(*name));
        if let Some(name) = repeated {
            return Err(Error::DuplicateRootField(name.to_string()));
        }

        let builder = SchemaBuilder::new(self.registry()?);
        Ok(fields.into_iter().fold(builder, SchemaBuilder::query))
    }
}

#[cfg(test)]
mod tests {
    use docgraph_types::FieldKind;

    use super::*;

    const CONFIG: &str = r#"
        [[models]]
        name = "Editor"
        fields = [
            { name = "first_name", kind = { type = "string" }, required = true },
            { name = "last_name", kind = { type = "string" } },
        ]

        [[models]]
        name = "Article"
        collection = "articles"
        fields = [
            { name = "headline", kind = { type = "string" }, required = true },
            { name = "editor", kind = { type = "reference", model = "Editor" } },
            { name = "tags", kind = { type = "list", of = { type = "string" } } },
        ]

        [[types]]
        name = "EditorType"
        model = "Editor"

        [[types]]
        name = "ArticleNode"
        model = "Article"
        node = true
        exclude_fields = ["tags"]

        [[query]]
        kind = "list"
        name = "editors"
        type = "EditorType"

        [[query]]
        kind = "node"
    "#;

    #[test]
    fn parses_models_types_and_queries() {
        let config: SchemaConfig = CONFIG.parse().unwrap();
        assert_eq!(config.query.len(), 2);
        assert_eq!(config.query[1], QueryConfig::Node);

        let models = config.models().unwrap();
        let article = &models["Article"];
        assert_eq!(article.collection(), "articles");
        assert_eq!(article.field("editor").unwrap().kind, FieldKind::reference("Editor"));
        assert_eq!(article.field("tags").unwrap().kind, FieldKind::list(FieldKind::String));
        assert!(article.field("headline").unwrap().required);

        let registry = config.registry().unwrap();
        let node = registry.get_type_for_model("Article").unwrap();
        assert_eq!(node.type_name, "ArticleNode");
        assert_eq!(node.connection.as_deref(), Some("ArticleNodeConnection"));
        assert!(!node.type_mapping.contains_key("tags"));
    }

    #[test]
    fn types_need_a_known_model() {
        let config: SchemaConfig = r#"
            [[types]]
            name = "EditorType"
        "#
        .parse()
        .unwrap();
        let err = config.registry().unwrap_err();
        assert!(matches!(err, Error::MissingModelReference { type_name } if type_name == "EditorType"));

        let config: SchemaConfig = r#"
            [[types]]
            name = "EditorType"
            model = "Editor"
        "#
        .parse()
        .unwrap();
        let err = config.registry().unwrap_err();
        assert!(matches!(err, Error::UnknownModel { model, .. } if model == "Editor"));
    }

    #[test]
    fn references_need_a_declared_model() {
        let config: SchemaConfig = r#"
            [[models]]
            name = "Article"
            fields = [{ name = "editor", kind = { type = "reference", model = "Editor" } }]
        "#
        .parse()
        .unwrap();
        assert!(matches!(config.models().unwrap_err(), Error::InvalidConfig(_)));
    }

    #[test]
    fn malformed_config_is_rejected() {
        let err = "[[models]]\nname = 1".parse::<SchemaConfig>().unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let config = SchemaConfig::default();
        assert!(matches!(config.schema_builder(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn query_names_must_be_unique() {
        let config: SchemaConfig = format!(
            r#"{CONFIG}
            [[query]]
            kind = "first"
            name = "editors"
            type = "EditorType"
            "#
        )
        .parse()
        .unwrap();

        let err = match config.schema_builder() {
            Ok(_) => panic!("repeated query name should be rejected"),
            Err(err) => err,
        };
        assert!(matches!(err, Error::DuplicateRootField(name) if name == "editors"));
    }
}
