//! Filter state and evaluation
//!
//! This module holds the reader's filter choices and decides, for every item
//! of the catalog, whether it is visible.
//!
//! # Tag cycle
//!
//! Each tag in the tag bar moves through three states on every click:
//!
//! ```text
//! neutral → include → exclude → neutral
//! ```
//!
//! Included tags must all be present on an item; excluded tags must all be
//! absent. A tag is never in both lists at once.
//!
//! # Examples
//!
//! ```
//! use papershelf::catalog::{Catalog, Item};
//! use papershelf::filter::{FilterState, evaluate};
//! use papershelf::selection::SelectionState;
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("p1", "Deep Learning", "Smith", Some(2020), vec!["ml".into()]),
//!     Item::new("p2", "Compilers", "Lee", Some(2019), vec!["pl".into()]),
//! ]).unwrap();
//!
//! let mut filter = FilterState::new();
//! filter.cycle_tag("ml");
//!
//! let visible = evaluate(&catalog, &filter, &SelectionState::new());
//! assert_eq!(visible, vec![true, false]);
//! ```

mod evaluator;
mod types;

pub use evaluator::{evaluate, exclude_match, include_match, matches, search_match, year_match};
pub use types::{FilterState, TagState, YearFilter};
