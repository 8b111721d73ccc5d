//! Error types for URL handling
//!
//! Decoding a query string never fails; only building an absolute link from a
//! configured base URL can.

use thiserror::Error;

/// Errors that can occur while building page links
#[derive(Debug, Error)]
pub enum QueryError {
    /// The configured base URL is not a valid absolute URL
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBase {
        /// The rejected base URL
        url: String,
        /// Parser failure
        #[source]
        source: url::ParseError,
    },
}
