//! Core error types.

use thiserror::Error;

/// Errors raised by the catalog, row store, and cascade resolver.
#[derive(Debug, Error)]
pub enum Error {
    /// No schema registered under the given model name.
    #[error("no schema registered for model `{model}`")]
    SchemaNotFound {
        /// The model name that was looked up.
        model: String,
    },

    /// A cascading association has no reciprocal belongs-to on the child.
    ///
    /// Fatal to cascade resolution: without the back-reference the child
    /// rows cannot be located, so proceeding would under-report dependents.
    #[error(
        "schema inconsistency: `{parent}.{association}` targets `{child}`, \
         but `{child}` declares no belongs-to back to `{parent}`"
    )]
    SchemaInconsistency {
        /// Parent model declaring the downward association.
        parent: String,
        /// Name of the offending association.
        association: String,
        /// Child model missing the back-reference.
        child: String,
    },

    /// Storage layer error.
    #[error("store query error: {0}")]
    StoreQuery(#[from] sled::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// Invalid data format.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A resolve call ran past its deadline.
    #[error("cascade resolution deadline exceeded")]
    DeadlineExceeded,
}
