//! Resolver output: affected keys grouped by model, plus stub records.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Map from model name to the set of affected primary-key values.
///
/// Contains strict descendants only: the root keys of the resolve call
/// never appear. Freshly allocated per call and owned by the caller;
/// iteration order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescendantMap {
    entries: HashMap<String, HashSet<String>>,
}

impl DescendantMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any descendants were found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of affected keys across all models.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashSet::len).sum()
    }

    /// Number of models with at least one affected key.
    pub fn model_count(&self) -> usize {
        self.entries.len()
    }

    /// Affected keys for one model.
    pub fn keys_for(&self, model: &str) -> Option<&HashSet<String>> {
        self.entries.get(model)
    }

    /// Whether a specific (model, key) pair is affected.
    pub fn contains(&self, model: &str, key: &str) -> bool {
        self.entries.get(model).is_some_and(|keys| keys.contains(key))
    }

    /// Iterate over (model, key set) entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashSet<String>)> {
        self.entries.iter().map(|(model, keys)| (model.as_str(), keys))
    }

    /// Merge keys into a model's entry. Duplicates collapse.
    pub(crate) fn merge(&mut self, model: &str, keys: impl IntoIterator<Item = String>) {
        self.entries
            .entry(model.to_string())
            .or_default()
            .extend(keys);
    }

    /// Flatten into stub records for the delete/sync orchestrator.
    pub fn into_stubs(self) -> Vec<ModelStub> {
        let mut stubs = Vec::with_capacity(self.len());
        for (model, keys) in self.entries {
            for key in keys {
                stubs.push(ModelStub {
                    model: model.clone(),
                    key,
                });
            }
        }
        stubs
    }
}

/// A record identified by model type and primary key only.
///
/// No other fields are populated: the resolver fetches keys, never full
/// rows. Callers needing row contents fetch them separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelStub {
    /// Model name.
    pub model: String,
    /// Primary-key value.
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_deduplicates() {
        let mut map = DescendantMap::new();
        map.merge("Post", ["p1".to_string(), "p2".to_string()]);
        map.merge("Post", ["p2".to_string(), "p3".to_string()]);

        assert_eq!(map.len(), 3);
        assert_eq!(map.model_count(), 1);
        assert!(map.contains("Post", "p2"));
        assert!(!map.contains("Post", "p4"));
    }

    #[test]
    fn test_into_stubs() {
        let mut map = DescendantMap::new();
        map.merge("Post", ["p1".to_string()]);
        map.merge("Comment", ["c1".to_string(), "c2".to_string()]);

        let mut stubs = map.into_stubs();
        stubs.sort_by(|a, b| a.model.cmp(&b.model).then(a.key.cmp(&b.key)));

        assert_eq!(stubs.len(), 3);
        assert_eq!(
            stubs[0],
            ModelStub {
                model: "Comment".to_string(),
                key: "c1".to_string()
            }
        );
        assert_eq!(stubs[2].model, "Post");
    }

    #[test]
    fn test_empty_map() {
        let map = DescendantMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert!(map.keys_for("Post").is_none());
        assert!(map.into_stubs().is_empty());
    }
}
