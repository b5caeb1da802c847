//! Breadth-first cascade resolution.
//!
//! Computes, for a set of root records, the transitive closure of
//! dependent records across the association graph. Traversal is an
//! explicit worklist with per-model visited sets, so it terminates even
//! when the schema graph is cyclic and never recurses on the call
//! stack.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, debug_span, warn};

use super::descendants::DescendantMap;
use super::graph::downward_links;
use crate::catalog::{ModelSchema, SchemaRegistry};
use crate::error::Error;
use crate::store::{KeyFetcher, KeyScan};

/// Default number of keys per membership query.
///
/// Embedded stores cap the number of values in one membership predicate
/// (SQLite's default variable limit is 999), so frontiers are queried in
/// chunks of at most this size.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Upper bound on keys per membership query, matching the tightest
/// predicate-size cap among supported store backends.
pub const MAX_CHUNK_SIZE: usize = 1000;

/// Tuning knobs for one resolve call.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Keys per membership query. Clamped to `1..=MAX_CHUNK_SIZE`.
    pub chunk_size: usize,
    /// Abort with [`Error::DeadlineExceeded`] once this instant passes.
    /// Checked before each chunked query to bound worst-case latency on
    /// very large fan-outs.
    pub deadline: Option<Instant>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            deadline: None,
        }
    }
}

impl ResolveOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.clamp(1, MAX_CHUNK_SIZE);
        self
    }

    /// Set the deadline.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Resolves the full set of records affected by a cascading operation.
///
/// Synchronous and read-only: one call issues only membership reads
/// through the [`KeyFetcher`] and holds no locks, so unrelated resolve
/// calls may run concurrently against the same store.
pub struct CascadeResolver<'a> {
    registry: &'a SchemaRegistry,
    fetcher: &'a dyn KeyFetcher,
}

impl<'a> CascadeResolver<'a> {
    /// Create a resolver over a schema registry and read capability.
    pub fn new(registry: &'a SchemaRegistry, fetcher: &'a dyn KeyFetcher) -> Self {
        Self { registry, fetcher }
    }

    /// Resolve the descendants of `root_keys` under the `root` model.
    ///
    /// The returned map holds strict descendants only; the root keys
    /// themselves are excluded. Schema errors
    /// ([`Error::SchemaNotFound`], [`Error::SchemaInconsistency`])
    /// abort the call. A failed membership query does not: the branch
    /// is logged and skipped, and the map may under-report that
    /// branch's children (best effort beats failing the whole cascade).
    pub fn resolve(&self, root: &str, root_keys: &[String]) -> Result<DescendantMap, Error> {
        self.resolve_with(root, root_keys, &ResolveOptions::default())
    }

    /// [`resolve`](Self::resolve) with explicit options.
    pub fn resolve_with(
        &self,
        root: &str,
        root_keys: &[String],
        options: &ResolveOptions,
    ) -> Result<DescendantMap, Error> {
        let span = debug_span!("cascade_resolve", model = root, roots = root_keys.len());
        let _guard = span.enter();

        let mut descendants = DescendantMap::new();
        if root_keys.is_empty() {
            return Ok(descendants);
        }

        let root_schema = self.registry.schema_for(root)?;
        let chunk_size = options.chunk_size.clamp(1, MAX_CHUNK_SIZE);

        // Roots are pre-marked visited: excluded from output, never
        // re-queried even if a cycle leads back to them.
        let mut visited: HashMap<String, HashSet<String>> = HashMap::new();
        visited
            .entry(root_schema.name.clone())
            .or_default()
            .extend(root_keys.iter().cloned());

        let mut queue: VecDeque<(Arc<ModelSchema>, Vec<String>)> = VecDeque::new();
        queue.push_back((root_schema, root_keys.to_vec()));

        while let Some((schema, frontier)) = queue.pop_front() {
            for link in downward_links(self.registry, &schema)? {
                let mut fetched: HashSet<String> = HashSet::new();
                for chunk in frontier.chunks(chunk_size) {
                    if let Some(deadline) = options.deadline {
                        if Instant::now() >= deadline {
                            return Err(Error::DeadlineExceeded);
                        }
                    }

                    let scan = KeyScan::new(
                        link.child.name.clone(),
                        link.child.primary_key_field.clone(),
                        link.foreign_key.clone(),
                        chunk.to_vec(),
                    );
                    match self.fetcher.fetch_keys_where(&scan) {
                        Ok(keys) => fetched.extend(keys),
                        // Don't cut the traversal short; the rest of
                        // the tree still gets resolved.
                        Err(error) => warn!(
                            model = %link.child.name,
                            association = %link.association,
                            %error,
                            "child key query failed, branch will be incomplete"
                        ),
                    }
                }

                let seen = visited.entry(link.child.name.clone()).or_default();
                let new_keys: Vec<String> = fetched
                    .into_iter()
                    .filter(|key| seen.insert(key.clone()))
                    .collect();

                if !new_keys.is_empty() {
                    debug!(
                        parent = %schema.name,
                        child = %link.child.name,
                        discovered = new_keys.len(),
                        "descended association"
                    );
                    descendants.merge(&link.child.name, new_keys.iter().cloned());
                    queue.push_back((link.child.clone(), new_keys));
                }
            }
        }

        Ok(descendants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoRows;

    impl KeyFetcher for NoRows {
        fn fetch_keys_where(&self, _scan: &KeyScan) -> Result<Vec<String>, Error> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_empty_roots_short_circuit() {
        let registry = SchemaRegistry::new();
        let resolver = CascadeResolver::new(&registry, &NoRows);

        // No registry lookup happens for an empty root set.
        let map = resolver.resolve("Unregistered", &[]).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_unregistered_root_fails() {
        let registry = SchemaRegistry::new();
        let resolver = CascadeResolver::new(&registry, &NoRows);

        let err = resolver
            .resolve("Ghost", &["g1".to_string()])
            .unwrap_err();
        assert!(matches!(err, Error::SchemaNotFound { model } if model == "Ghost"));
    }

    #[test]
    fn test_leaf_schema_yields_empty_map() {
        let registry = SchemaRegistry::new();
        registry.register(crate::catalog::ModelSchema::new("Note", "id"));
        let resolver = CascadeResolver::new(&registry, &NoRows);

        let map = resolver.resolve("Note", &["n1".to_string()]).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_chunk_size_is_clamped() {
        assert_eq!(ResolveOptions::new().with_chunk_size(0).chunk_size, 1);
        assert_eq!(
            ResolveOptions::new().with_chunk_size(50_000).chunk_size,
            MAX_CHUNK_SIZE
        );
    }
}
