//! Cascade dependency resolution.
//!
//! Given a set of root records, computes every record that transitively
//! depends on them through the schema's downward associations. The
//! output feeds the delete orchestrator (which applies the cascade) and
//! tombstone emission for remote sync.

mod descendants;
mod graph;
mod resolver;

pub use descendants::{DescendantMap, ModelStub};
pub use graph::{downward_links, DownwardLink};
pub use resolver::{CascadeResolver, ResolveOptions, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
