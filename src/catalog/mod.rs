//! Paper catalog
//!
//! The catalog is the static, read-only side of the page: every item with its
//! identifier, title, authors, year and tags, in document order. It can be
//! loaded from a JSON or TOML data file, or recovered from the generated HTML
//! page through the `data-*` attributes each row exposes.
//!
//! # Examples
//!
//! ```
//! use papershelf::catalog::{Catalog, Item};
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("p1", "Deep Learning", "Smith", Some(2020), vec!["ml".into()]),
//!     Item::new("p2", "Compilers", "Lee", Some(2019), vec!["pl".into()]),
//! ]).unwrap();
//!
//! assert_eq!(catalog.tag_vocabulary(), vec!["ml".to_string(), "pl".to_string()]);
//! assert_eq!(catalog.years(), vec![2020, 2019]);
//! ```

pub mod error;
mod loader;
pub mod markup;
mod types;

pub use error::CatalogError;
pub use types::{Catalog, Item, YEAR_TAG_PREFIX, parse_year};
