use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{Error, Result};
use crate::mapper::ObjectTypeDescriptor;
use crate::options::ObjectTypeOptions;
use crate::LOG_TARGET;

/// Output types known to a schema, indexed by type name and by the model they
/// map. Passed explicitly to the [`crate::SchemaBuilder`].
#[derive(Debug, Default)]
pub struct Registry {
    types: IndexMap<String, ObjectTypeDescriptor>,
    models: HashMap<String, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the type described by `options` and stores it.
    pub fn register(&mut self, options: ObjectTypeOptions) -> Result<&ObjectTypeDescriptor> {
        if self.types.contains_key(options.type_name()) {
            return Err(Error::DuplicateType(options.type_name().to_string()));
        }

        let descriptor = ObjectTypeDescriptor::from_options(options)?;
        let model_name = descriptor.model.name().to_string();

        if !descriptor.skip_registry {
            if let Some(existing) = self.models.get(&model_name) {
                return Err(Error::DuplicateModel {
                    model: model_name,
                    existing: existing.clone(),
                    type_name: descriptor.type_name,
                });
            }
            self.models.insert(model_name.clone(), descriptor.type_name.clone());
        }

        debug!(
            target: LOG_TARGET,
            type_name = %descriptor.type_name,
            model = %model_name,
            skip_registry = descriptor.skip_registry,
            "Registered object type."
        );

        let type_name = descriptor.type_name.clone();
        Ok(self.types.entry(type_name).or_insert(descriptor))
    }

    pub fn get(&self, type_name: &str) -> Option<&ObjectTypeDescriptor> {
        self.types.get(type_name)
    }

    pub fn get_type_for_model(&self, model: &str) -> Option<&ObjectTypeDescriptor> {
        self.models.get(model).and_then(|type_name| self.types.get(type_name))
    }

    /// Registered types in registration order.
    pub fn types(&self) -> impl Iterator<Item = &ObjectTypeDescriptor> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use docgraph_types::{FieldKind, Model, ModelField};

    use super::*;

    fn editor() -> Model {
        Model::new("Editor", vec![ModelField::new("first_name", FieldKind::String)]).unwrap()
    }

    #[test]
    fn types_are_indexed_by_model() {
        let mut registry = Registry::new();
        registry.register(ObjectTypeOptions::new("EditorType").model(editor())).unwrap();
        registry
            .register(
                ObjectTypeOptions::new("EditorSummary")
                    .model(editor())
                    .only_fields(["first_name"])
                    .skip_registry(),
            )
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get_type_for_model("Editor").unwrap().type_name, "EditorType");
        assert!(registry.get("EditorSummary").is_some());
        assert!(registry.get_type_for_model("Article").is_none());
    }

    #[test]
    fn duplicates_are_rejected() {
        let mut registry = Registry::new();
        registry.register(ObjectTypeOptions::new("EditorType").model(editor())).unwrap();

        let err = registry.register(ObjectTypeOptions::new("EditorType").model(editor())).unwrap_err();
        assert!(matches!(err, Error::DuplicateType(name) if name == "EditorType"));

        let err = registry.register(ObjectTypeOptions::new("EditorNode").model(editor())).unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateModel { model, existing, type_name }
                if model == "Editor" && existing == "EditorType" && type_name == "EditorNode"
        ));
        assert_eq!(registry.len(), 1);
    }
}
