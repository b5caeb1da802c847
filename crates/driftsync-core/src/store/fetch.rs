//! The "fetch matching keys" capability consumed by the cascade resolver.

use crate::error::Error;

/// A membership scan: fetch `key_field` values from `table` where
/// `filter_field` equals any of `values`.
///
/// Identifiers (`table`, `key_field`, `filter_field`) and values are
/// separate categories by construction; backends that render query text
/// must quote each category on its own (see [`KeyScan::to_sql`]) rather
/// than interpolating caller-supplied strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyScan {
    /// Table (model) to scan.
    pub table: String,
    /// Field whose values are returned (the child's primary key).
    pub key_field: String,
    /// Field matched against `values` (the child's foreign key).
    pub filter_field: String,
    /// Keys to match, one chunk's worth.
    pub values: Vec<String>,
}

impl KeyScan {
    /// Build a membership scan.
    pub fn new(
        table: impl Into<String>,
        key_field: impl Into<String>,
        filter_field: impl Into<String>,
        values: Vec<String>,
    ) -> Self {
        Self {
            table: table.into(),
            key_field: key_field.into(),
            filter_field: filter_field.into(),
            values,
        }
    }
}

/// Read capability over the embedded store.
///
/// The resolver issues every read through this trait, so tests can
/// substitute failing or instrumented implementations.
pub trait KeyFetcher {
    /// Execute a membership scan, returning the matching key values.
    fn fetch_keys_where(&self, scan: &KeyScan) -> Result<Vec<String>, Error>;
}
