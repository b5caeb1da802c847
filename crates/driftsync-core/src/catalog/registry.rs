//! In-memory schema registry.

use std::sync::Arc;

use dashmap::DashMap;

use super::schema::ModelSchema;
use crate::error::Error;

/// Registry mapping model names to their schemas.
///
/// Schemas are registered once at engine startup and read concurrently
/// afterwards; lookups never block each other, so concurrent resolve
/// calls can share one registry.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: DashMap<String, Arc<ModelSchema>>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema, replacing any earlier schema of the same name.
    pub fn register(&self, schema: ModelSchema) -> Arc<ModelSchema> {
        let schema = Arc::new(schema);
        self.schemas.insert(schema.name.clone(), schema.clone());
        schema
    }

    /// Look up the schema for a model name.
    pub fn schema_for(&self, model: &str) -> Result<Arc<ModelSchema>, Error> {
        self.schemas
            .get(model)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::SchemaNotFound {
                model: model.to_string(),
            })
    }

    /// Whether a schema is registered under `model`.
    pub fn contains(&self, model: &str) -> bool {
        self.schemas.contains_key(model)
    }

    /// All registered model names.
    pub fn model_names(&self) -> Vec<String> {
        self.schemas.iter().map(|e| e.key().clone()).collect()
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
