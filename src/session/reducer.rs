//! State transitions
//!
//! `reduce` is the only place page state changes. Each command is one flat
//! transition: no transition calls another, and none of them refreshes the
//! view. The session runs the refresh sequence afterwards.

use super::command::Command;
use super::SessionOptions;
use crate::catalog::Catalog;
use crate::filter::FilterState;
use crate::query::UrlState;
use crate::selection::SelectionState;

/// Mutable page state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    /// Current filters
    pub filter: FilterState,
    /// Current selection
    pub selection: SelectionState,
}

/// Result of one transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// State changed; the view must be refreshed
    Changed,
    /// Nothing changed
    Unchanged,
    /// A share link was requested
    Share,
    /// A share link should be copied to the clipboard
    CopyShare,
    /// An item should be brought into view
    Focus(String),
}

/// Apply one command to the page state
///
/// Commands naming an identifier absent from the catalog are no-ops.
pub fn reduce(
    state: &mut PageState,
    catalog: &Catalog,
    command: &Command,
    options: &SessionOptions,
) -> Transition {
    let before = state.clone();
    let selection = &mut state.selection;
    let filter = &mut state.filter;

    match command {
        Command::SetSearch(term) => filter.search.clone_from(term),
        Command::ClearSearch => filter.search.clear(),
        Command::SetYear(year) => filter.year = *year,
        Command::CycleTag(tag) => {
            filter.cycle_tag(tag);
        }
        Command::RemoveChip(key) => key.remove_from(filter, options.chip_removal),
        Command::ClearAllFilters => filter.clear(),

        Command::ToggleSelectionMode => {
            selection.toggle_mode(options.exit_selection);
        }
        Command::SetItemSelected { id, selected } => {
            if selection.is_active() && catalog.contains(id) {
                selection.set_selected(id, *selected);
            }
        }
        Command::ToggleItem(id) => {
            if selection.is_active() && catalog.contains(id) {
                selection.toggle(id);
            }
        }
        Command::RemoveFromSelection(id) => {
            selection.remove(id);
        }
        Command::ClearSelection => selection.clear(),
        Command::ToggleShowSelected => {
            selection.toggle_show_only_selected();
        }

        Command::RequestShare => return Transition::Share,
        Command::CopyShareLink => return Transition::CopyShare,
        Command::FocusItem(id) => {
            return if catalog.contains(id) {
                Transition::Focus(id.clone())
            } else {
                Transition::Unchanged
            };
        }
    }

    if *state == before {
        Transition::Unchanged
    } else {
        Transition::Changed
    }
}

/// Replace the page state with the state carried by a URL
///
/// The selection is restored before the filters, so a "show only selected"
/// listing is computed against the complete selection. Unknown identifiers
/// are skipped. A non-empty selection or `show_selected` re-enters selection
/// mode.
pub fn apply_url(state: &mut PageState, catalog: &Catalog, url: UrlState) {
    let mut selection = SelectionState::new();
    if !url.selected.is_empty() || url.show_selected {
        selection.enter();
    }
    for id in &url.selected {
        if catalog.contains(id) {
            selection.set_selected(id, true);
        } else {
            tracing::warn!(id = %id, "skipping unknown selected identifier");
        }
    }
    selection.set_show_only_selected(url.show_selected);

    state.selection = selection;
    state.filter = url.filter;
}
