//! Catalog file loading
//!
//! The format is chosen from the file extension:
//! - `.json`: an array of items, or an object with a `papers` array
//! - `.toml`: `[[papers]]` tables
//! - `.html` / `.htm`: the generated page, read through its row attributes

use super::error::CatalogError;
use super::markup;
use super::types::{Catalog, Item};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    List(Vec<Item>),
    Wrapped { papers: Vec<Item> },
}

#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    papers: Vec<Item>,
}

impl Catalog {
    /// Load a catalog from disk
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read, its format is not
    /// supported, its content does not parse, or it contains duplicate ids.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let content = fs::read_to_string(path)?;
        let catalog = match extension.as_str() {
            "json" => Self::from_json_str(&content)?,
            "toml" => Self::from_toml_str(&content)?,
            "html" | "htm" => Self::from_html_str(&content)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        };

        tracing::debug!(path = %path.display(), items = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Parse a JSON catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on malformed JSON or duplicate ids.
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let items = match serde_json::from_str::<JsonCatalog>(content)? {
            JsonCatalog::List(items) | JsonCatalog::Wrapped { papers: items } => items,
        };
        Self::new(items)
    }

    /// Parse a TOML catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on malformed TOML or duplicate ids.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let parsed: TomlCatalog = toml::from_str(content)?;
        Self::new(parsed.papers)
    }

    /// Parse the generated page
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on missing row attributes or duplicate ids.
    pub fn from_html_str(content: &str) -> Result<Self, CatalogError> {
        Self::new(markup::parse_html(content)?)
    }
}
