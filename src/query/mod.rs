//! URL synchronization
//!
//! All reader state that matters for sharing lives in the page's query string:
//!
//! | Parameter       | Value                                   | Omitted when     |
//! |-----------------|-----------------------------------------|------------------|
//! | `search`        | free text                               | empty            |
//! | `year`          | a year                                  | "all"            |
//! | `include`       | comma-separated tags                    | no included tag  |
//! | `exclude`       | comma-separated tags                    | no excluded tag  |
//! | `selected`      | comma-separated item identifiers        | empty selection  |
//! | `show_selected` | literal `true`                          | flag off         |
//!
//! The string is `application/x-www-form-urlencoded`, byte for byte what a
//! browser's `URLSearchParams` produces. Decoding then re-encoding reproduces
//! the same parameters, so only `show_selected=true` restricts the listing to
//! the selection. A link carrying only `selected`, as the static page's share
//! dialog writes it, opens with selection mode on and those papers checked,
//! but with the full listing shown.
//!
//! # Examples
//!
//! ```
//! use papershelf::query;
//!
//! let state = query::decode("?search=deep&year=2020&include=ml");
//! assert_eq!(state.filter.search, "deep");
//! assert_eq!(state.encode(), "search=deep&year=2020&include=ml");
//! ```

mod codec;
pub mod error;

pub use codec::{
    EXCLUDE, INCLUDE, SEARCH, SELECTED, SHOW_SELECTED, UrlState, YEAR, decode, encode, location,
    normalize, page_link, share_link,
};
pub use error::QueryError;
