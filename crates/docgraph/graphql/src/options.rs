use std::fmt;
use std::sync::Arc;

use async_graphql::Value;
use docgraph_types::{Document, Model};
use indexmap::IndexMap;

/// Replaces the default resolver of a model field. Receives the parent document.
pub type FieldResolver = Arc<dyn Fn(&Document) -> async_graphql::Result<Option<Value>> + Send + Sync>;

/// Resolver overrides keyed by model field name. Two sets compare equal when they
/// override the same fields.
#[derive(Clone, Default)]
pub struct ResolverOverrides(IndexMap<String, FieldResolver>);

impl ResolverOverrides {
    pub fn insert(&mut self, field: impl Into<String>, resolver: FieldResolver) {
        self.0.insert(field.into(), resolver);
    }

    pub fn get(&self, field: &str) -> Option<&FieldResolver> {
        self.0.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl PartialEq for ResolverOverrides {
    fn eq(&self, other: &Self) -> bool {
        self.0.keys().eq(other.0.keys())
    }
}

impl fmt::Debug for ResolverOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}

/// Declares a GraphQL object type backed by a document model.
///
/// ```ignore
/// let options = ObjectTypeOptions::new("ArticleNode").model(article).node();
/// registry.register(options)?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct ObjectTypeOptions {
    pub(crate) type_name: String,
    pub(crate) model: Option<Model>,
    pub(crate) only_fields: Vec<String>,
    pub(crate) exclude_fields: Vec<String>,
    pub(crate) node: bool,
    pub(crate) connection: Option<bool>,
    pub(crate) skip_registry: bool,
    pub(crate) description: Option<String>,
    pub(crate) resolvers: ResolverOverrides,
}

impl ObjectTypeOptions {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self { type_name: type_name.into(), ..Default::default() }
    }

    pub fn model(mut self, model: Model) -> Self {
        self.model = Some(model);
        self
    }

    /// Only map these model fields.
    pub fn only_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclude_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Implement the relay `Node` interface. Node types get a connection unless
    /// [`Self::connection`] turns it off.
    pub fn node(mut self) -> Self {
        self.node = true;
        self
    }

    pub fn connection(mut self, enabled: bool) -> Self {
        self.connection = Some(enabled);
        self
    }

    /// Keep the type out of the model index, so references to the model keep
    /// resolving to the type registered first.
    pub fn skip_registry(mut self) -> Self {
        self.skip_registry = true;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn resolver<F>(mut self, field: impl Into<String>, resolver: F) -> Self
    where
        F: Fn(&Document) -> async_graphql::Result<Option<Value>> + Send + Sync + 'static,
    {
        self.resolvers.insert(field, Arc::new(resolver));
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}
