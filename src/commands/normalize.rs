//! Normalize command - canonical form of a query string

use crate::query;

/// Canonical location for a query string or page URL
///
/// Parameters are decoded leniently and re-encoded in canonical order;
/// defaults are dropped.
#[must_use]
pub fn canonical(input: &str) -> String {
    query::location(&query::normalize(input))
}

/// Execute the normalize command
pub fn execute(input: &str) {
    println!("{}", canonical(input));
}
