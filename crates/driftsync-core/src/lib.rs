//! driftsync core — schema catalog, embedded row store, and cascade
//! dependency resolution for a client-side, offline-first sync engine.
//!
//! The centerpiece is [`CascadeResolver`]: given a set of root records,
//! it walks the schema's downward associations breadth-first and
//! returns the full transitive closure of dependent records as a
//! [`DescendantMap`] of model name to primary keys. The delete
//! orchestrator and tombstone emission consume that map; this crate
//! never applies deletions itself.
//!
//! Known consistency gap: rows inserted between a resolve and the
//! caller's subsequent apply phase are not captured. This is an
//! accepted eventual-consistency property of the read-then-apply
//! split, not something the resolver papers over.

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod cascade;
pub mod catalog;
pub mod error;
pub mod store;

pub use cascade::{
    downward_links, CascadeResolver, DescendantMap, DownwardLink, ModelStub, ResolveOptions,
    DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE,
};
pub use catalog::{
    AssociationDef, AssociationKind, FieldDef, ModelSchema, ScalarType, SchemaRegistry,
};
pub use error::Error;
pub use store::{KeyFetcher, KeyScan, RowStore, StoreConfig};
