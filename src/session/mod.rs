//! Page session
//!
//! A `Session` owns the catalog, the page state, and the page collaborators,
//! and is the single entry point for changing state. Every state change made
//! through [`Session::dispatch`] or [`Session::hydrate`] finishes with the same
//! refresh sequence:
//!
//! 1. evaluate visibility of every item
//! 2. render numbering, badge, chips, and the selection counter
//! 3. notify the image loader with the visible items
//! 4. replace the address bar location with the canonical query
//!
//! Search typing is debounced: [`Session::type_search`] only schedules the
//! term, and [`Session::tick`] commits it once the input has been idle for the
//! configured delay. Any dispatched command commits a pending term first.
//!
//! # Examples
//!
//! ```
//! use papershelf::catalog::{Catalog, Item};
//! use papershelf::session::{Command, Page, Session, SessionOptions};
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("p1", "Deep Learning", "Smith", Some(2020), vec!["ml".into()]),
//!     Item::new("p2", "Compilers", "Lee", Some(2019), vec!["pl".into()]),
//! ])?;
//! let mut session = Session::new(catalog, SessionOptions::default(), Page::headless())?;
//!
//! session.dispatch(Command::SetSearch("deep".into()));
//! assert_eq!(session.view().visible_ids(), vec!["p1"]);
//! assert_eq!(session.query(), "search=deep");
//! # Ok::<(), papershelf::PapershelfError>(())
//! ```

mod command;
pub mod hooks;
mod reducer;

pub use command::Command;
pub use hooks::{AddressBar, MemoryAddressBar, Page};
pub use reducer::{PageState, Transition, apply_url, reduce};

use crate::catalog::{Catalog, Item};
use crate::debounce::{DEFAULT_SEARCH_DELAY, Debouncer};
use crate::filter::{FilterState, evaluate};
use crate::query::{self, QueryError};
use crate::render::{ChipRemoval, RenderView, render};
use crate::selection::{ExitSelection, SelectionState};
use std::time::{Duration, Instant};

/// Alert raised when sharing an empty selection
pub const EMPTY_SELECTION_ALERT: &str = "Please select at least one paper to share.";
/// Alert raised when the clipboard rejects the share link
pub const COPY_FAILED_ALERT: &str = "Failed to copy link. Please copy manually.";
/// Confirmation after the share link was copied
pub const COPIED_MESSAGE: &str = "Copied!";

/// Default page location used for share links
pub const DEFAULT_BASE_URL: &str = "https://localhost/";

/// Warning shown the first time a share link uses [`DEFAULT_BASE_URL`]
pub const DEFAULT_BASE_WARNING: &str =
    "Share links point at https://localhost/. Run 'papershelf config set base_url=<page URL>'.";

/// Behaviour switches of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// What leaving selection mode does to the selection
    pub exit_selection: ExitSelection,
    /// What removing a tag chip does to the tag
    pub chip_removal: ChipRemoval,
    /// Quiet period of the search box
    pub search_debounce: Duration,
    /// Absolute page URL that share links point at
    pub base_url: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            exit_selection: ExitSelection::default(),
            chip_removal: ChipRemoval::default(),
            search_debounce: DEFAULT_SEARCH_DELAY,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Outcome of a share request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Nothing is selected; the user was alerted
    EmptySelection,
    /// The link to show
    Link(String),
    /// The link was written to the clipboard
    Copied(String),
    /// The clipboard rejected the link; the user was alerted
    CopyFailed(String),
}

impl ShareOutcome {
    /// The share link, if one was produced
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::EmptySelection => None,
            Self::Link(link) | Self::Copied(link) | Self::CopyFailed(link) => Some(link),
        }
    }
}

/// What a dispatched command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    /// State changed and the view was refreshed
    Refreshed,
    /// Nothing changed
    Unchanged,
    /// A share link was requested or copied
    Share(ShareOutcome),
    /// An item should be scrolled into view
    Focus {
        /// Item identifier
        id: String,
        /// Display number, when the item is visible
        number: Option<usize>,
    },
}

/// Interactive page state with its collaborators
pub struct Session {
    catalog: Catalog,
    state: PageState,
    options: SessionOptions,
    page: Page,
    search: Debouncer<String>,
    search_input: String,
    view: RenderView,
    query: String,
    evaluations: usize,
    warned_default_base: bool,
}

impl Session {
    /// Create a session showing the whole catalog
    ///
    /// The initial view is computed and the image loader notified; the address
    /// bar is left untouched until the first state change or [`Session::hydrate`].
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidBase` if `options.base_url` is not an absolute URL.
    pub fn new(catalog: Catalog, options: SessionOptions, page: Page) -> Result<Self, QueryError> {
        query::page_link(&options.base_url, "")?;

        let mut session = Self {
            catalog,
            state: PageState::default(),
            search: Debouncer::new(options.search_debounce),
            options,
            page,
            search_input: String::new(),
            view: RenderView::default(),
            query: String::new(),
            evaluations: 0,
            warned_default_base: false,
        };
        session.evaluate_and_render();
        Ok(session)
    }

    /// Restore state from a URL query and refresh
    ///
    /// Malformed parameters fall back to their defaults.
    pub fn hydrate(&mut self, location: &str) -> &RenderView {
        self.search.cancel();
        let url = query::decode(location);
        reducer::apply_url(&mut self.state, &self.catalog, url);
        self.search_input.clone_from(&self.state.filter.search);
        tracing::debug!(
            selected = self.state.selection.len(),
            show_selected = self.state.selection.show_only_selected(),
            "hydrated page state"
        );
        self.refresh();
        &self.view
    }

    /// Apply one command, refreshing if state changed
    pub fn dispatch(&mut self, command: Command) -> Reaction {
        if let Some(term) = self.search.flush()
            && !command.overrides_search()
        {
            self.apply(&Command::SetSearch(term));
        }
        self.apply(&command)
    }

    /// Record a keystroke in the search box
    ///
    /// The term is committed by [`Session::tick`] once the box has been idle
    /// for the debounce delay; a newer keystroke replaces it.
    pub fn type_search(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        self.search_input.clone_from(&text);
        self.search.schedule(text, now);
    }

    /// Commit a pending search term whose quiet period has elapsed
    ///
    /// Returns `true` if the view was refreshed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.search
            .poll(now)
            .is_some_and(|term| self.apply(&Command::SetSearch(term)) == Reaction::Refreshed)
    }

    /// When the pending search term becomes due
    #[must_use]
    pub fn search_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    /// Share link for the current selection
    ///
    /// Alerts the user and returns `None` when nothing is selected.
    pub fn share_link(&mut self) -> Option<String> {
        if self.state.selection.is_empty() {
            self.page.notifier.alert(EMPTY_SELECTION_ALERT);
            return None;
        }

        match query::share_link(
            &self.options.base_url,
            &self.state.filter,
            self.state.selection.selected(),
        ) {
            Ok(link) => {
                self.warn_default_base();
                Some(link)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to build share link");
                self.page.notifier.alert(&e.to_string());
                None
            }
        }
    }

    /// Write the share link to the clipboard
    ///
    /// Clipboard failure alerts the user and leaves state untouched.
    pub fn copy_share_link(&mut self) -> ShareOutcome {
        let Some(link) = self.share_link() else {
            return ShareOutcome::EmptySelection;
        };

        match self.page.clipboard.write_text(&link) {
            Ok(()) => {
                self.page.notifier.success(COPIED_MESSAGE);
                ShareOutcome::Copied(link)
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed");
                self.page.notifier.alert(COPY_FAILED_ALERT);
                ShareOutcome::CopyFailed(link)
            }
        }
    }

    /// The loaded catalog
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current filters
    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.state.filter
    }

    /// Current selection
    #[must_use]
    pub const fn selection(&self) -> &SelectionState {
        &self.state.selection
    }

    /// Text currently in the search box, committed or not
    #[must_use]
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Latest rendered view
    #[must_use]
    pub const fn view(&self) -> &RenderView {
        &self.view
    }

    /// Canonical query of the current state, without `?`
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Session options
    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Number of visibility evaluations run so far
    #[must_use]
    pub const fn evaluation_count(&self) -> usize {
        self.evaluations
    }

    /// Selected items in selection order, for the preview panel
    #[must_use]
    pub fn selected_items(&self) -> Vec<&Item> {
        self.state
            .selection
            .selected()
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .collect()
    }

    fn apply(&mut self, command: &Command) -> Reaction {
        let transition = reducer::reduce(&mut self.state, &self.catalog, command, &self.options);
        tracing::debug!(command = command.name(), ?transition, "dispatched");

        match transition {
            Transition::Changed => {
                self.sync_search_input(command);
                self.refresh();
                Reaction::Refreshed
            }
            Transition::Unchanged => {
                self.sync_search_input(command);
                Reaction::Unchanged
            }
            Transition::Share => Reaction::Share(
                self.share_link()
                    .map_or(ShareOutcome::EmptySelection, ShareOutcome::Link),
            ),
            Transition::CopyShare => Reaction::Share(self.copy_share_link()),
            Transition::Focus(id) => {
                let number = self.view.number_of(&id);
                Reaction::Focus { id, number }
            }
        }
    }

    fn sync_search_input(&mut self, command: &Command) {
        if matches!(
            command,
            Command::SetSearch(_)
                | Command::ClearSearch
                | Command::ClearAllFilters
                | Command::RemoveChip(_)
        ) {
            self.search_input.clone_from(&self.state.filter.search);
        }
    }

    /// Warn, once per session, that share links point at the placeholder page
    fn warn_default_base(&mut self) {
        if self.warned_default_base || self.options.base_url != DEFAULT_BASE_URL {
            return;
        }
        self.warned_default_base = true;
        tracing::warn!(base_url = DEFAULT_BASE_URL, "share link built on the default base URL");
        self.page.notifier.warning(DEFAULT_BASE_WARNING);
    }

        fn evaluate_and_render(&mut self) {
        let visibility = evaluate(&self.catalog, &self.state.filter, &self.state.selection);
        self.evaluations += 1;
        self.view = render(
            &self.catalog,
            &visibility,
            &self.state.filter,
            &self.state.selection,
        );

        let visible: Vec<&Item> = self
            .catalog
            .items()
            .iter()
            .zip(&visibility)
            .filter_map(|(item, shown)| shown.then_some(item))
            .collect();
        self.page.images.update(&visible);
    }

    fn refresh(&mut self) {
        self.evaluate_and_render();
        self.query = query::encode(&self.state.filter, &self.state.selection);
        self.page.address_bar.replace(&query::location(&self.query));
        tracing::debug!(query = %self.query, visible = self.view.visible_count, "refreshed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{TagState, YearFilter};
    use crate::testing::{RecordingImages, sample_catalog};
    use crate::ui::clipboard::MemoryClipboard;
    use crate::ui::output::{MessageLevel, StatusBarWriter};

    struct Harness {
        session: Session,
        address: MemoryAddressBar,
        clipboard: MemoryClipboard,
        notifier: StatusBarWriter,
        images: RecordingImages,
    }

    fn harness_with(options: SessionOptions, clipboard: MemoryClipboard) -> Harness {
        let address = MemoryAddressBar::new();
        let notifier = StatusBarWriter::new();
        let images = RecordingImages::new();
        let page = Page::headless()
            .with_address_bar(address.clone())
            .with_clipboard(clipboard.clone())
            .with_notifier(notifier.clone())
            .with_images(images.clone());
        let session = Session::new(sample_catalog(), options, page).unwrap();
        Harness {
            session,
            address,
            clipboard,
            notifier,
            images,
        }
    }

    fn harness() -> Harness {
        harness_with(SessionOptions::default(), MemoryClipboard::new())
    }

    #[test]
    fn test_initial_view_shows_everything() {
        let h = harness();
        assert_eq!(h.session.view().visible_ids(), vec!["p1", "p2"]);
        assert_eq!(h.address.writes(), 0);
        assert_eq!(h.images.last(), vec!["p1".to_string(), "p2".to_string()]);
    }

    #[test]
    fn test_scenario_a_search() {
        let mut h = harness();
        assert_eq!(h.session.dispatch(Command::SetSearch("deep".into())), Reaction::Refreshed);
        assert_eq!(h.session.view().visible_ids(), vec!["p1"]);
        assert_eq!(h.address.location(), "?search=deep");
        assert_eq!(h.images.last(), vec!["p1".to_string()]);
    }

    #[test]
    fn test_scenario_b_tags() {
        let mut h = harness();
        h.session.dispatch(Command::CycleTag("ml".into()));
        assert_eq!(h.session.view().visible_ids(), vec!["p1"]);

        h.session.dispatch(Command::CycleTag("ml".into()));
        assert_eq!(h.session.filter().tag_state("ml"), TagState::Exclude);
        assert_eq!(h.session.view().visible_ids(), vec!["p2"]);
        assert_eq!(h.address.query(), "exclude=ml");
    }

    #[test]
    fn test_scenario_c_show_selected_overrides_filters() {
        let mut h = harness();
        h.session.dispatch(Command::ToggleSelectionMode);
        h.session.dispatch(Command::ToggleItem("p2".into()));
        h.session.dispatch(Command::SetSearch("deep".into()));
        h.session.dispatch(Command::SetYear(YearFilter::Year(2020)));
        h.session.dispatch(Command::CycleTag("ml".into()));
        assert!(h.session.view().visible_ids().is_empty());

        h.session.dispatch(Command::ToggleShowSelected);
        assert_eq!(h.session.view().visible_ids(), vec!["p2"]);
        assert_eq!(h.session.view().number_of("p2"), Some(1));
        assert_eq!(
            h.address.query(),
            "search=deep&year=2020&include=ml&selected=p2&show_selected=true"
        );
    }

    #[test]
    fn test_selecting_while_showing_selected_updates_visibility() {
        let mut h = harness();
        h.session.dispatch(Command::ToggleSelectionMode);
        h.session.dispatch(Command::ToggleItem("p2".into()));
        h.session.dispatch(Command::ToggleShowSelected);
        h.session.dispatch(Command::SetItemSelected {
            id: "p1".into(),
            selected: true,
        });
        assert_eq!(h.session.view().visible_ids(), vec!["p1", "p2"]);

        h.session.dispatch(Command::RemoveFromSelection("p1".into()));
        h.session.dispatch(Command::RemoveFromSelection("p2".into()));
        assert_eq!(h.session.view().visible_count, 0);
        assert_eq!(h.session.view().badge(), "Showing 0 of 2 papers");
    }

    #[test]
    fn test_scenario_d_hydrate() {
        let mut h = harness();
        h.session.hydrate("?search=deep&year=2020&include=ml");

        assert_eq!(h.session.filter().search, "deep");
        assert_eq!(h.session.search_input(), "deep");
        assert_eq!(h.session.view().visible_ids(), vec!["p1"]);
        assert_eq!(h.address.location(), "?search=deep&year=2020&include=ml");
        assert_eq!(h.session.view().chips.len(), 3);
    }

    #[test]
    fn test_scenario_e_debounced_search() {
        let mut h = harness();
        let start = Instant::now();
        let before = h.session.evaluation_count();

        for (offset, text) in [(0, "d"), (40, "de"), (80, "dee"), (120, "deep")] {
            let now = start + Duration::from_millis(offset);
            h.session.type_search(text, now);
            assert!(!h.session.tick(now));
        }
        assert_eq!(h.session.evaluation_count(), before);
        assert_eq!(h.session.search_input(), "deep");

        assert!(!h.session.tick(start + Duration::from_millis(200)));
        assert!(h.session.tick(start + Duration::from_millis(270)));
        assert!(!h.session.tick(start + Duration::from_millis(500)));

        assert_eq!(h.session.evaluation_count(), before + 1);
        assert_eq!(h.session.filter().search, "deep");
        assert_eq!(h.session.view().visible_ids(), vec!["p1"]);
    }

    #[test]
    fn test_dispatch_commits_pending_search_first() {
        let mut h = harness();
        h.session.type_search("compilers", Instant::now());
        h.session.dispatch(Command::SetYear(YearFilter::Year(2019)));

        assert_eq!(h.session.search_deadline(), None);
        assert_eq!(h.address.query(), "search=compilers&year=2019");
        assert_eq!(h.session.view().visible_ids(), vec!["p2"]);
    }

    #[test]
    fn test_clear_search_discards_pending_term() {
        let mut h = harness();
        h.session.dispatch(Command::SetSearch("deep".into()));
        h.session.type_search("deeper", Instant::now());
        h.session.dispatch(Command::ClearSearch);

        assert_eq!(h.session.search_input(), "");
        assert_eq!(h.address.location(), "");
    }

    #[test]
    fn test_unchanged_command_does_not_touch_address_bar() {
        let mut h = harness();
        h.session.dispatch(Command::SetSearch("deep".into()));
        let writes = h.address.writes();
        assert_eq!(h.session.dispatch(Command::SetSearch("deep".into())), Reaction::Unchanged);
        assert_eq!(h.address.writes(), writes);
    }

    #[test]
    fn test_share_requires_selection() {
        let mut h = harness();
        let reaction = h.session.dispatch(Command::RequestShare);
        assert_eq!(reaction, Reaction::Share(ShareOutcome::EmptySelection));
        assert_eq!(h.notifier.pending_alert().as_deref(), Some(EMPTY_SELECTION_ALERT));
    }

    #[test]
    fn test_copy_share_link() {
        let mut h = harness();
        h.session.dispatch(Command::ToggleSelectionMode);
        h.session.dispatch(Command::ToggleItem("p2".into()));
        h.session.dispatch(Command::ToggleItem("p1".into()));

        let reaction = h.session.dispatch(Command::CopyShareLink);
        let expected = "https://localhost/?selected=p2%2Cp1&show_selected=true";
        assert_eq!(reaction, Reaction::Share(ShareOutcome::Copied(expected.into())));
        assert_eq!(h.clipboard.contents().as_deref(), Some(expected));
        assert_eq!(
            h.notifier.latest_message().map(|(_, m)| m).as_deref(),
            Some(COPIED_MESSAGE)
        );
    }

    #[test]
    fn test_copy_failure_alerts_without_state_change() {
        let mut h = harness_with(SessionOptions::default(), MemoryClipboard::rejecting());
        h.session.dispatch(Command::ToggleSelectionMode);
        h.session.dispatch(Command::ToggleItem("p1".into()));
        let query = h.session.query().to_string();

        let reaction = h.session.dispatch(Command::CopyShareLink);
        assert!(matches!(reaction, Reaction::Share(ShareOutcome::CopyFailed(_))));
        assert_eq!(h.notifier.pending_alert().as_deref(), Some(COPY_FAILED_ALERT));
        assert_eq!(h.session.query(), query);
        assert!(h.session.selection().is_selected("p1"));
    }

    #[test]
    fn test_focus_reports_number() {
        let mut h = harness();
        h.session.dispatch(Command::SetSearch("compilers".into()));
        assert_eq!(
            h.session.dispatch(Command::FocusItem("p2".into())),
            Reaction::Focus {
                id: "p2".into(),
                number: Some(1)
            }
        );
        assert_eq!(
            h.session.dispatch(Command::FocusItem("p1".into())),
            Reaction::Focus {
                id: "p1".into(),
                number: None
            }
        );
    }

    #[test]
    fn test_exit_selection_keep_vs_clear() {
        let mut keep = harness();
        keep.session.dispatch(Command::ToggleSelectionMode);
        keep.session.dispatch(Command::ToggleItem("p1".into()));
        keep.session.dispatch(Command::ToggleShowSelected);
        keep.session.dispatch(Command::ToggleSelectionMode);
        assert!(!keep.session.selection().show_only_selected());
        assert!(keep.session.selection().is_selected("p1"));
        assert_eq!(keep.address.query(), "selected=p1");

        let mut clear = harness_with(
            SessionOptions {
                exit_selection: ExitSelection::Clear,
                ..SessionOptions::default()
            },
            MemoryClipboard::new(),
        );
        clear.session.dispatch(Command::ToggleSelectionMode);
        clear.session.dispatch(Command::ToggleItem("p1".into()));
        clear.session.dispatch(Command::ToggleSelectionMode);
        assert!(clear.session.selection().is_empty());
        assert_eq!(clear.address.location(), "");
    }

    #[test]
    fn test_remove_search_chip_clears_input() {
        let mut h = harness();
        h.session.dispatch(Command::SetSearch("deep".into()));
        h.session
            .dispatch(Command::RemoveChip(crate::render::ChipKey::Search));
        assert_eq!(h.session.search_input(), "");
        assert!(h.session.view().chips.is_empty());
    }

    #[test]
    fn test_selected_items_in_selection_order() {
        let mut h = harness();
        h.session.dispatch(Command::ToggleSelectionMode);
        h.session.dispatch(Command::ToggleItem("p2".into()));
        h.session.dispatch(Command::ToggleItem("p1".into()));
        let ids: Vec<_> = h.session.selected_items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p1"]);
        assert_eq!(h.session.view().selection_counter, "2 papers selected");
    }

    #[test]
    fn test_default_base_url_warns_once() {
        let mut h = harness();
        h.session.dispatch(Command::ToggleSelectionMode);
        h.session.dispatch(Command::ToggleItem("p1".into()));
        h.session.dispatch(Command::RequestShare);
        h.session.dispatch(Command::CopyShareLink);

        let warnings: Vec<String> = h
            .notifier
            .recent_messages()
            .into_iter()
            .filter(|(level, _)| *level == MessageLevel::Warning)
            .map(|(_, message)| message)
            .collect();
        assert_eq!(warnings, [DEFAULT_BASE_WARNING]);
    }

    #[test]
    fn test_configured_base_url_does_not_warn() {
        let options = SessionOptions {
            base_url: "https://example.org/papers/".into(),
            ..SessionOptions::default()
        };
        let mut h = harness_with(options, MemoryClipboard::new());
        h.session.dispatch(Command::ToggleSelectionMode);
        h.session.dispatch(Command::ToggleItem("p1".into()));
        h.session.dispatch(Command::RequestShare);

        assert!(
            h.notifier
                .recent_messages()
                .iter()
                .all(|(level, _)| *level != MessageLevel::Warning)
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let options = SessionOptions {
            base_url: "papers/index.html".into(),
            ..SessionOptions::default()
        };
        assert!(Session::new(sample_catalog(), options, Page::headless()).is_err());
    }
}
