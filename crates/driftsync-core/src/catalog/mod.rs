//! Schema catalog for driftsync.
//!
//! The catalog holds metadata about model types: their fields, primary
//! keys, and the associations between them. The cascade resolver reads
//! this metadata to decide which edges to descend.

mod association;
mod field;
mod registry;
mod schema;

pub use association::{AssociationDef, AssociationKind};
pub use field::{FieldDef, ScalarType};
pub use registry::SchemaRegistry;
pub use schema::ModelSchema;
