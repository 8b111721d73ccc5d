//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against a loaded catalog.

pub mod browse;
pub mod config;
pub mod filter;
pub mod list;
pub mod normalize;
pub mod share;

pub use browse::execute as browse;
pub use config::execute as config;
pub use filter::execute as filter;
pub use list::execute as list;
pub use normalize::execute as normalize;
pub use share::execute as share;

use crate::catalog::Catalog;
use crate::config::ShelfConfig;
use crate::session::DEFAULT_BASE_URL;
use crate::PapershelfError;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

type Result<T> = std::result::Result<T, PapershelfError>;

/// Catalog path from the command line, else the configured default
///
/// # Errors
/// Returns `PapershelfError::InvalidInput` if neither is set.
pub fn resolve_catalog(arg: Option<&Path>, config: &ShelfConfig) -> Result<PathBuf> {
    arg.map(Path::to_path_buf)
        .or_else(|| config.catalog.clone())
        .ok_or_else(|| {
            PapershelfError::InvalidInput(
                "No catalog given. Pass a catalog file or run 'papershelf config set catalog=<path>'."
                    .into(),
            )
        })
}

/// Resolve and load the catalog
///
/// # Errors
/// Returns an error if no catalog is configured or the file cannot be loaded.
pub fn load_catalog(arg: Option<&Path>, config: &ShelfConfig) -> Result<(PathBuf, Catalog)> {
    let path = resolve_catalog(arg, config)?;
    let catalog = Catalog::load(&path)?;
    Ok((path, catalog))
}

/// Page URL that share links point at
///
/// A configured `base_url` is kept. Left at the default, a catalog that is the
/// generated page itself (`.html`/`.htm`) links to its own `file://` URL.
#[must_use]
pub fn page_base_url(catalog_path: &Path, base_url: &str) -> String {
    if base_url != DEFAULT_BASE_URL {
        return base_url.to_string();
    }
    let is_page = catalog_path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"));
    if !is_page {
        return base_url.to_string();
    }

    match fs::canonicalize(catalog_path).map(Url::from_file_path) {
        Ok(Ok(url)) => url.to_string(),
        Ok(Err(())) | Err(_) => {
            tracing::warn!(path = %catalog_path.display(), "cannot derive a file URL for the catalog page");
            base_url.to_string()
        }
    }
}
