//! Error types for catalog loading
//!
//! A catalog is read once at startup, so every failure here is reported to the
//! caller instead of being tolerated the way malformed URL state is.

use std::io;
use thiserror::Error;

/// Errors that can occur while loading or building a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O error while reading a catalog file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON catalog could not be parsed
    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML catalog could not be parsed
    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// The page markup could not be queried
    #[error("Invalid page markup: {0}")]
    Markup(String),

    /// An item row is missing one of its required data attributes
    #[error("Item {index} is missing attribute '{attribute}'")]
    MissingAttribute {
        /// Position of the row in document order
        index: usize,
        /// Name of the missing attribute
        attribute: &'static str,
    },

    /// The JSON-encoded tag list of an item could not be decoded
    #[error("Item '{id}' has an invalid tag list: {source}")]
    InvalidTags {
        /// Identifier of the offending item
        id: String,
        /// Underlying decode failure
        #[source]
        source: serde_json::Error,
    },

    /// Two items share the same identifier
    #[error("Duplicate item id '{0}'")]
    DuplicateId(String),

    /// The catalog file extension is not recognised
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}
