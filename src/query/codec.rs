//! Query-string encoding and decoding of page state

use super::error::QueryError;
use crate::filter::{FilterState, TagState, YearFilter};
use crate::selection::SelectionState;
use url::Url;
use url::form_urlencoded;

/// Free-text search term
pub const SEARCH: &str = "search";
/// Year selector, absent for "all"
pub const YEAR: &str = "year";
/// Comma-separated included tags
pub const INCLUDE: &str = "include";
/// Comma-separated excluded tags
pub const EXCLUDE: &str = "exclude";
/// Comma-separated selected identifiers
pub const SELECTED: &str = "selected";
/// Literal `true` when only selected items are shown
pub const SHOW_SELECTED: &str = "show_selected";

const LIST_SEPARATOR: char = ',';

/// Page state as carried by the query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlState {
    /// Filter part
    pub filter: FilterState,
    /// Selected identifiers in selection order
    pub selected: Vec<String>,
    /// Whether only selected items are shown
    pub show_selected: bool,
}

impl UrlState {
    /// Snapshot the persisted part of the live state
    #[must_use]
    pub fn capture(filter: &FilterState, selection: &SelectionState) -> Self {
        Self {
            filter: filter.clone(),
            selected: selection.selected().to_vec(),
            show_selected: selection.show_only_selected(),
        }
    }

    /// Decode a query string
    ///
    /// Accepts a bare query (`search=x`), a query with its leading `?`, or a
    /// full URL. Missing, empty, or malformed parameters fall back to their
    /// defaults; for repeated keys the first occurrence wins.
    #[must_use]
    pub fn decode(input: &str) -> Self {
        let query = extract_query(input);
        let mut state = Self::default();
        let mut seen: Vec<String> = Vec::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if seen.iter().any(|k| k == key.as_ref()) {
                continue;
            }
            seen.push(key.to_string());

            match key.as_ref() {
                SEARCH => state.filter.search = value.into_owned(),
                YEAR => {
                    state.filter.year = YearFilter::parse(&value);
                    if state.filter.year.is_all() && !value.eq_ignore_ascii_case("all") {
                        tracing::warn!(value = %value, "ignoring malformed year parameter");
                    }
                }
                INCLUDE => {
                    for tag in split_list(&value) {
                        state.filter.set_tag_state(&tag, TagState::Include);
                    }
                }
                EXCLUDE => {
                    for tag in split_list(&value) {
                        state.filter.set_tag_state(&tag, TagState::Exclude);
                    }
                }
                SELECTED => state.selected = split_list(&value),
                SHOW_SELECTED => state.show_selected = value == "true",
                other => tracing::debug!(key = other, "ignoring unknown query parameter"),
            }
        }

        state
    }

    /// Encode into a query string without the leading `?`
    ///
    /// Parameters at their default value are omitted; the rest appear in the
    /// fixed order `search, year, include, exclude, selected, show_selected`.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        if !self.filter.search.is_empty() {
            serializer.append_pair(SEARCH, &self.filter.search);
        }
        if let YearFilter::Year(year) = self.filter.year {
            serializer.append_pair(YEAR, &year.to_string());
        }
        if !self.filter.included().is_empty() {
            serializer.append_pair(INCLUDE, &join_list(self.filter.included()));
        }
        if !self.filter.excluded().is_empty() {
            serializer.append_pair(EXCLUDE, &join_list(self.filter.excluded()));
        }
        if !self.selected.is_empty() {
            serializer.append_pair(SELECTED, &join_list(&self.selected));
        }
        if self.show_selected {
            serializer.append_pair(SHOW_SELECTED, "true");
        }

        serializer.finish()
    }
}

/// Encode the persisted part of the live state
#[must_use]
pub fn encode(filter: &FilterState, selection: &SelectionState) -> String {
    UrlState::capture(filter, selection).encode()
}

/// Decode a query string, never failing
#[must_use]
pub fn decode(input: &str) -> UrlState {
    UrlState::decode(input)
}

/// Canonical form of a query string: decoded, then re-encoded
#[must_use]
pub fn normalize(input: &str) -> String {
    decode(input).encode()
}

/// Address bar location for a query: `?query`, or empty when every parameter is default
#[must_use]
pub fn location(query: &str) -> String {
    if query.is_empty() {
        String::new()
    } else {
        format!("?{query}")
    }
}

/// Absolute link to the page with the given query
///
/// # Errors
///
/// Returns `QueryError::InvalidBase` if `base_url` is not an absolute URL.
pub fn page_link(base_url: &str, query: &str) -> Result<String, QueryError> {
    let mut url = Url::parse(base_url).map_err(|source| QueryError::InvalidBase {
        url: base_url.to_string(),
        source,
    })?;
    url.set_query(if query.is_empty() { None } else { Some(query) });
    url.set_fragment(None);
    Ok(url.to_string())
}

/// Link that opens the page showing exactly the current selection
///
/// The current filters are kept; `selected` carries the selection and
/// `show_selected=true` restricts the recipient's listing to it.
///
/// # Errors
///
/// Returns `QueryError::InvalidBase` if `base_url` is not an absolute URL.
pub fn share_link(
    base_url: &str,
    filter: &FilterState,
    selected: &[String],
) -> Result<String, QueryError> {
    let state = UrlState {
        filter: filter.clone(),
        selected: selected.to_vec(),
        show_selected: true,
    };
    page_link(base_url, &state.encode())
}

fn extract_query(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.contains("://")
        && let Ok(url) = Url::parse(trimmed)
    {
        return url.query().unwrap_or_default().to_string();
    }
    trimmed.strip_prefix('?').unwrap_or(trimmed).to_string()
}

fn split_list(value: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for part in value.split(LIST_SEPARATOR).filter(|part| !part.is_empty()) {
        if !items.iter().any(|existing| existing == part) {
            items.push(part.to_string());
        }
    }
    items
}

fn join_list(values: &[String]) -> String {
    values.join(&LIST_SEPARATOR.to_string())
}
