//! Embedded row store over sled.
//!
//! One tree per model, rows stored as JSON objects keyed by their
//! primary-key value. Row shapes are dynamic: the schema is data, not a
//! compile-time type, so rows travel as `serde_json::Value` objects.

use serde_json::Value;
use tracing::debug;

use super::config::StoreConfig;
use super::fetch::{KeyFetcher, KeyScan};
use crate::catalog::ModelSchema;
use crate::error::Error;

/// Tree name prefix for per-model row trees.
const MODEL_TREE_PREFIX: &str = "model:";

/// Embedded row store.
///
/// Readers never block each other; sled serializes writers internally.
/// Concurrent resolve calls may read while unrelated writes proceed, so
/// rows inserted between a resolve and the caller's subsequent apply
/// phase are not captured by that resolve. Callers own that gap.
pub struct RowStore {
    db: sled::Db,
}

impl RowStore {
    /// Open or create a row store.
    pub fn open(config: StoreConfig) -> Result<Self, Error> {
        let db = config.to_sled_config().open()?;
        Ok(Self { db })
    }

    /// Open a temporary in-memory store for testing.
    pub fn temporary() -> Result<Self, Error> {
        Self::open(StoreConfig::temporary())
    }

    fn tree_for(&self, model: &str) -> Result<sled::Tree, Error> {
        Ok(self.db.open_tree(format!("{MODEL_TREE_PREFIX}{model}"))?)
    }

    /// Insert or replace a row, returning its primary-key value.
    ///
    /// The row must be a JSON object carrying the schema's primary-key
    /// field as a scalar.
    pub fn put_row(&self, schema: &ModelSchema, row: Value) -> Result<String, Error> {
        let object = row.as_object().ok_or_else(|| {
            Error::InvalidData(format!("row for `{}` is not a JSON object", schema.name))
        })?;
        let key = object
            .get(&schema.primary_key_field)
            .and_then(scalar_to_key)
            .ok_or_else(|| {
                Error::InvalidData(format!(
                    "row for `{}` has no scalar `{}` field",
                    schema.name, schema.primary_key_field
                ))
            })?;

        let bytes = serde_json::to_vec(&row).map_err(|e| Error::Serialization(e.to_string()))?;
        self.tree_for(&schema.name)?.insert(key.as_bytes(), bytes)?;
        Ok(key)
    }

    /// Fetch a row by primary key.
    pub fn get_row(&self, model: &str, key: &str) -> Result<Option<Value>, Error> {
        match self.tree_for(model)?.get(key.as_bytes())? {
            Some(bytes) => {
                let row = serde_json::from_slice(&bytes)
                    .map_err(|e| Error::Deserialization(e.to_string()))?;
                Ok(Some(row))
            }
            None => Ok(None),
        }
    }

    /// Delete a row by primary key. Returns whether a row was removed.
    pub fn delete_row(&self, model: &str, key: &str) -> Result<bool, Error> {
        Ok(self.tree_for(model)?.remove(key.as_bytes())?.is_some())
    }

    /// Number of rows stored for a model.
    pub fn row_count(&self, model: &str) -> Result<usize, Error> {
        Ok(self.tree_for(model)?.len())
    }

    /// Flush pending writes to disk.
    pub fn flush(&self) -> Result<(), Error> {
        self.db.flush()?;
        Ok(())
    }
}

impl KeyFetcher for RowStore {
    fn fetch_keys_where(&self, scan: &KeyScan) -> Result<Vec<String>, Error> {
        let wanted: std::collections::HashSet<&str> =
            scan.values.iter().map(String::as_str).collect();

        let mut keys = Vec::new();
        for entry in self.tree_for(&scan.table)?.iter() {
            let (_, bytes) = entry?;
            let row: Value = serde_json::from_slice(&bytes)
                .map_err(|e| Error::Deserialization(e.to_string()))?;

            let matched = row
                .get(&scan.filter_field)
                .and_then(scalar_to_key)
                .is_some_and(|v| wanted.contains(v.as_str()));
            if !matched {
                continue;
            }

            if let Some(key) = row.get(&scan.key_field).and_then(scalar_to_key) {
                keys.push(key);
            }
        }

        debug!(query = %scan.to_sql(), rows = keys.len(), "membership scan");
        Ok(keys)
    }
}

/// Canonical string form of a scalar JSON value, used for key matching.
fn scalar_to_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
