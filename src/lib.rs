//! Papershelf - filter, select, and share entries of a paper list
//!
//! A paper list is a catalog of items with a title, authors, an optional year,
//! and tags. This library provides the page logic around it: free-text search,
//! a year selector, tri-state tag filters, a selection mode with a preview
//! panel, and a shareable URL that mirrors all of that state.
//!
//! # Example
//!
//! ```
//! use papershelf::catalog::{Catalog, Item};
//! use papershelf::session::{Command, Page, Session, SessionOptions};
//!
//! # fn main() -> Result<(), papershelf::PapershelfError> {
//! let catalog = Catalog::new(vec![
//!     Item::new("p1", "Deep Learning", "Smith", Some(2020), vec!["ml".into()]),
//!     Item::new("p2", "Compilers", "Lee", Some(2019), vec!["pl".into()]),
//! ])?;
//! let mut session = Session::new(catalog, SessionOptions::default(), Page::headless())?;
//!
//! session.dispatch(Command::CycleTag("ml".into()));
//! assert_eq!(session.view().visible_ids(), vec!["p1"]);
//! assert_eq!(session.query(), "include=ml");
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod filter;
pub mod output;
pub mod query;
pub mod render;
pub mod selection;
pub mod session;
pub mod thumbnails;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PapershelfError {
    /// Catalog could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// URL or query error
    #[error("Query error: {0}")]
    Query(#[from] query::QueryError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
