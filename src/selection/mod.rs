//! Selection tracking
//!
//! Selection mode lets the reader tick individual papers, review them in the
//! preview panel, and share exactly that set. The tracked state is:
//!
//! - the selected identifiers, in the order they were selected
//! - whether selection mode is active
//! - whether the listing is restricted to the selected items
//!
//! Leaving selection mode always turns "show only selected" off. Whether it
//! also empties the selection is a policy choice, see [`ExitSelection`].

use serde::{Deserialize, Serialize};

/// What happens to the selection when selection mode is left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExitSelection {
    /// Keep the selected items; only "show only selected" is turned off
    #[default]
    Keep,
    /// Empty the selection as well
    Clear,
}

/// Selection mode state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Vec<String>,
    mode: bool,
    show_only_selected: bool,
}

impl SelectionState {
    /// Create an empty, inactive selection
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: Vec::new(),
            mode: false,
            show_only_selected: false,
        }
    }

    /// Selected identifiers in selection order
    #[must_use]
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Whether an identifier is selected
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Number of selected items
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether selection mode is active
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.mode
    }

    /// Whether visibility is restricted to the selected items
    #[must_use]
    pub const fn show_only_selected(&self) -> bool {
        self.show_only_selected
    }

    /// Set membership of one identifier to match a checkbox state
    ///
    /// Repeating the same call is a no-op. Returns `true` if membership changed.
    pub fn set_selected(&mut self, id: &str, checked: bool) -> bool {
        match (checked, self.is_selected(id)) {
            (true, false) => {
                self.selected.push(id.to_string());
                true
            }
            (false, true) => {
                self.selected.retain(|s| s != id);
                true
            }
            _ => false,
        }
    }

    /// Flip membership of one identifier, returning the new membership
    pub fn toggle(&mut self, id: &str) -> bool {
        let checked = !self.is_selected(id);
        self.set_selected(id, checked);
        checked
    }

    /// Remove one identifier, returning `true` if it was selected
    pub fn remove(&mut self, id: &str) -> bool {
        self.set_selected(id, false)
    }

    /// Empty the selection and turn off "show only selected"
    pub fn clear(&mut self) {
        self.selected.clear();
        self.show_only_selected = false;
    }

    /// Enter selection mode without touching existing selections
    pub const fn enter(&mut self) {
        self.mode = true;
    }

    /// Leave selection mode according to the exit policy
    pub fn exit(&mut self, policy: ExitSelection) {
        self.mode = false;
        self.show_only_selected = false;
        if policy == ExitSelection::Clear {
            self.selected.clear();
        }
    }

    /// Enter or leave selection mode, returning whether it is now active
    pub fn toggle_mode(&mut self, policy: ExitSelection) -> bool {
        if self.mode {
            self.exit(policy);
        } else {
            self.enter();
        }
        self.mode
    }

    /// Restrict (or stop restricting) the listing to selected items
    ///
    /// Only meaningful in selection mode; outside it the flag stays off.
    /// Returns the resulting flag.
    pub const fn set_show_only_selected(&mut self, on: bool) -> bool {
        self.show_only_selected = on && self.mode;
        self.show_only_selected
    }

    /// Flip "show only selected", returning the resulting flag
    pub const fn toggle_show_only_selected(&mut self) -> bool {
        self.set_show_only_selected(!self.show_only_selected)
    }

    /// Counter text shown in the selection panel
    #[must_use]
    pub fn counter_label(&self) -> String {
        let count = self.selected.len();
        format!("{count} paper{} selected", if count == 1 { "" } else { "s" })
    }
}
