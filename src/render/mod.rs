//! Render refresh
//!
//! Derives everything the listing displays from the visibility flags and the
//! current state: sequential numbers for visible rows, the visible/total
//! badge, the selection counter, and one removable chip per active filter.
//!
//! Numbers are recomputed from scratch on every refresh and are only stable
//! for a given visibility.

use crate::catalog::Catalog;
use crate::filter::{FilterState, TagState, YearFilter};
use crate::selection::SelectionState;
use serde::{Deserialize, Serialize};

/// What removing a tag chip does to the tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChipRemoval {
    /// Return the tag to neutral, whatever its state
    #[default]
    Clear,
    /// Advance the tag one step, exactly like a click in the tag bar
    Cycle,
}

/// Identity of a filter chip, used to remove it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChipKey {
    /// The search term
    Search,
    /// The year selector
    Year,
    /// An included or excluded tag
    Tag(String),
}

impl ChipKey {
    /// Apply chip removal to the filter state
    pub fn remove_from(&self, filter: &mut FilterState, policy: ChipRemoval) {
        match self {
            Self::Search => filter.search.clear(),
            Self::Year => filter.year = YearFilter::All,
            Self::Tag(tag) => match policy {
                ChipRemoval::Clear => filter.clear_tag(tag),
                ChipRemoval::Cycle => {
                    filter.cycle_tag(tag);
                }
            },
        }
    }
}

/// One entry of the active-filter summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    /// Identity used for removal
    pub key: ChipKey,
    /// Heading, e.g. "Search Filter" or "Including Tag"
    pub title: String,
    /// The filter value
    pub info: String,
}

/// Display state of one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Item identifier
    pub id: String,
    /// Whether the row is shown
    pub visible: bool,
    /// Display number, present only on visible rows
    pub number: Option<usize>,
    /// Whether the row's checkbox is ticked
    pub selected: bool,
}

/// Everything the listing shows after a refresh
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderView {
    /// Rows in document order
    pub rows: Vec<RowView>,
    /// Number of visible rows
    pub visible_count: usize,
    /// Number of rows overall
    pub total_count: usize,
    /// Active filter chips
    pub chips: Vec<FilterChip>,
    /// Selection panel counter text
    pub selection_counter: String,
}

impl RenderView {
    /// Identifiers of visible rows, in display order
    #[must_use]
    pub fn visible_ids(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|row| row.visible)
            .map(|row| row.id.as_str())
            .collect()
    }

    /// Display number of a row, if it is visible
    #[must_use]
    pub fn number_of(&self, id: &str) -> Option<usize> {
        self.rows.iter().find(|row| row.id == id).and_then(|row| row.number)
    }

    /// Visible/total badge text
    #[must_use]
    pub fn badge(&self) -> String {
        format!("Showing {} of {} papers", self.visible_count, self.total_count)
    }
}

/// Recompute the view from visibility flags
///
/// `visibility` is indexed like `catalog.items()`; missing flags count as hidden.
#[must_use]
pub fn render(
    catalog: &Catalog,
    visibility: &[bool],
    filter: &FilterState,
    selection: &SelectionState,
) -> RenderView {
    let mut next_number = 0;
    let rows: Vec<RowView> = catalog
        .items()
        .iter()
        .enumerate()
        .map(|(pos, item)| {
            let visible = visibility.get(pos).copied().unwrap_or(false);
            let number = visible.then(|| {
                next_number += 1;
                next_number
            });
            RowView {
                id: item.id.clone(),
                visible,
                number,
                selected: selection.is_selected(&item.id),
            }
        })
        .collect();

    RenderView {
        visible_count: next_number,
        total_count: rows.len(),
        rows,
        chips: chips(catalog, filter),
        selection_counter: selection.counter_label(),
    }
}

/// Active-filter chips: search, year, then tags in tag-bar order
///
/// Tags that are active but absent from the tag bar (e.g. from an old link)
/// follow, so they can still be removed.
#[must_use]
pub fn chips(catalog: &Catalog, filter: &FilterState) -> Vec<FilterChip> {
    let mut chips = Vec::new();

    if !filter.search.is_empty() {
        chips.push(FilterChip {
            key: ChipKey::Search,
            title: "Search Filter".to_string(),
            info: filter.search.clone(),
        });
    }

    if let YearFilter::Year(year) = filter.year {
        chips.push(FilterChip {
            key: ChipKey::Year,
            title: "Year Filter".to_string(),
            info: year.to_string(),
        });
    }

    let vocabulary = catalog.tag_vocabulary();
    let unlisted = filter
        .included()
        .iter()
        .chain(filter.excluded())
        .filter(|tag| !vocabulary.contains(*tag))
        .cloned();

    for tag in vocabulary.iter().cloned().chain(unlisted) {
        let title = match filter.tag_state(&tag) {
            TagState::Include => "Including Tag",
            TagState::Exclude => "Excluding Tag",
            TagState::Neutral => continue,
        };
        chips.push(FilterChip {
            key: ChipKey::Tag(tag.clone()),
            title: title.to_string(),
            info: tag,
        });
    }

    chips
}
