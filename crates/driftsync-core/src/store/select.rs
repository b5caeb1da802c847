//! Parametrized SELECT rendering for membership scans.
//!
//! Identifiers and values are quoted by distinct rules, so record keys
//! containing quote characters cannot alter the query structure. The
//! sled-backed store consumes [`KeyScan`](super::KeyScan) structurally
//! and only renders this text for tracing; SQL-text backends use it as
//! the actual statement.

use super::fetch::KeyScan;

/// Quote an identifier in backticks, doubling embedded backticks.
pub fn quote_ident(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 2);
    out.push('`');
    for ch in ident.chars() {
        if ch == '`' {
            out.push('`');
        }
        out.push(ch);
    }
    out.push('`');
    out
}

/// Quote a value in single quotes, doubling embedded single quotes.
pub fn quote_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        if ch == '\'' {
            out.push('\'');
        }
        out.push(ch);
    }
    out.push('\'');
    out
}

impl KeyScan {
    /// Render the scan as a SELECT statement.
    ///
    /// `SELECT `k` FROM `t` WHERE `f` IN ('v1', 'v2');`
    pub fn to_sql(&self) -> String {
        let values = self
            .values
            .iter()
            .map(|v| quote_literal(v))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "SELECT {key} FROM {table} WHERE {filter} IN ({values});",
            key = quote_ident(&self.key_field),
            table = quote_ident(&self.table),
            filter = quote_ident(&self.filter_field),
        )
    }
}
