//! Embedded row store and the read capability the resolver consumes.

mod config;
mod engine;
mod fetch;
mod select;

pub use config::StoreConfig;
pub use engine::RowStore;
pub use fetch::{KeyFetcher, KeyScan};
pub use select::{quote_ident, quote_literal};
