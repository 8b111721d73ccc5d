//! User actions
//!
//! Every interaction on the page maps to exactly one `Command`. Hosts never
//! mutate session state directly.

use crate::filter::YearFilter;
use crate::render::ChipKey;

/// A single user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Commit a search term
    SetSearch(String),
    /// Empty the search box
    ClearSearch,
    /// Pick a year, or "all"
    SetYear(YearFilter),
    /// Advance a tag through neutral, include, exclude
    CycleTag(String),
    /// Remove one active-filter chip
    RemoveChip(ChipKey),
    /// Reset search, year, and every tag
    ClearAllFilters,

    /// Enter or leave selection mode
    ToggleSelectionMode,
    /// Set an item's checkbox (selection mode only)
    SetItemSelected {
        /// Item identifier
        id: String,
        /// Desired checkbox state
        selected: bool,
    },
    /// Card activation: flip an item's checkbox (selection mode only)
    ToggleItem(String),
    /// Remove an item from the selection preview panel
    RemoveFromSelection(String),
    /// Empty the selection
    ClearSelection,
    /// Restrict the listing to selected items, or stop doing so
    ToggleShowSelected,

    /// Produce the share link for the current selection
    RequestShare,
    /// Produce the share link and write it to the clipboard
    CopyShareLink,
    /// Jump to an item from the preview panel
    FocusItem(String),
}

impl Command {
    /// Whether this command sets the search term itself
    ///
    /// A pending debounced term is discarded before such commands instead of
    /// being committed first.
    #[must_use]
    pub const fn overrides_search(&self) -> bool {
        matches!(self, Self::SetSearch(_) | Self::ClearSearch)
    }

    /// Short name for logging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetSearch(_) => "set_search",
            Self::ClearSearch => "clear_search",
            Self::SetYear(_) => "set_year",
            Self::CycleTag(_) => "cycle_tag",
            Self::RemoveChip(_) => "remove_chip",
            Self::ClearAllFilters => "clear_all_filters",
            Self::ToggleSelectionMode => "toggle_selection_mode",
            Self::SetItemSelected { .. } => "set_item_selected",
            Self::ToggleItem(_) => "toggle_item",
            Self::RemoveFromSelection(_) => "remove_from_selection",
            Self::ClearSelection => "clear_selection",
            Self::ToggleShowSelected => "toggle_show_selected",
            Self::RequestShare => "request_share",
            Self::CopyShareLink => "copy_share_link",
            Self::FocusItem(_) => "focus_item",
        }
    }
}
