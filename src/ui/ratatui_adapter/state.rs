//! Application state for the ratatui TUI
//!
//! Holds what the page shows but the session does not own: which pane has
//! focus, cursor and scroll positions, the search box text being edited, and
//! the current modal.

use crate::catalog::Catalog;
use crate::session::Session;
use crate::ui::output::StatusBarWriter;

/// Current mode of the TUI application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Typing in the search box
    Search,
    /// Help overlay is visible
    Help,
    /// Share dialog showing a link
    Share(String),
    /// Blocking alert, closed by any key
    Alert(String),
}

/// Pane that receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The paper list
    #[default]
    List,
    /// Tag bar
    Tags,
    /// Year selector
    Years,
    /// Active-filter chips
    Chips,
    /// Selection preview panel
    Selection,
}

impl Focus {
    /// Next pane in tab order
    ///
    /// The selection panel is only part of the order while selection mode is on.
    #[must_use]
    pub const fn next(self, selecting: bool) -> Self {
        match self {
            Self::List => Self::Tags,
            Self::Tags => Self::Years,
            Self::Years => Self::Chips,
            Self::Chips if selecting => Self::Selection,
            Self::Chips | Self::Selection => Self::List,
        }
    }

    /// Previous pane in tab order
    #[must_use]
    pub const fn prev(self, selecting: bool) -> Self {
        match self {
            Self::List if selecting => Self::Selection,
            Self::List => Self::Chips,
            Self::Tags => Self::List,
            Self::Years => Self::Tags,
            Self::Chips => Self::Years,
            Self::Selection => Self::Chips,
        }
    }
}

/// Cursor and scroll position within one list pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListCursor {
    /// Highlighted row
    pub cursor: usize,
    /// First row drawn
    pub scroll_offset: usize,
}

impl ListCursor {
    /// Move cursor up
    pub const fn up(&mut self, height: usize) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll(height);
        }
    }

    /// Move cursor down
    pub const fn down(&mut self, len: usize, height: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
            self.adjust_scroll(height);
        }
    }

    /// Move cursor up by one page
    pub const fn page_up(&mut self, height: usize) {
        self.cursor = self.cursor.saturating_sub(height);
        self.adjust_scroll(height);
    }

    /// Move cursor down by one page
    pub fn page_down(&mut self, len: usize, height: usize) {
        let max_cursor = len.saturating_sub(1);
        self.cursor = (self.cursor + height).min(max_cursor);
        self.adjust_scroll(height);
    }

    /// Jump to first row
    pub const fn start(&mut self, height: usize) {
        self.cursor = 0;
        self.adjust_scroll(height);
    }

    /// Jump to last row
    pub const fn end(&mut self, len: usize, height: usize) {
        self.cursor = len.saturating_sub(1);
        self.adjust_scroll(height);
    }

    /// Put the cursor on `index`
    pub const fn jump(&mut self, index: usize, height: usize) {
        self.cursor = index;
        self.adjust_scroll(height);
    }

    /// Keep the cursor inside a list that may have shrunk
    pub const fn clamp(&mut self, len: usize, height: usize) {
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
        if self.scroll_offset > self.cursor {
            self.scroll_offset = self.cursor;
        }
        self.adjust_scroll(height);
    }

    const fn adjust_scroll(&mut self, height: usize) {
        let height = if height == 0 { 1 } else { height };
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }
}

/// Interactive page state around a [`Session`]
#[derive(Debug, Default)]
pub struct PageUiState {
    /// Current UI mode
    pub mode: Mode,
    /// Pane receiving navigation keys
    pub focus: Focus,
    /// Paper list position, indexed over visible rows
    pub list: ListCursor,
    /// Tag bar position
    pub tags: ListCursor,
    /// Year selector position; row 0 is "All Years"
    pub years: ListCursor,
    /// Chip row position
    pub chips: ListCursor,
    /// Selection panel position
    pub selection: ListCursor,
    /// Search box text being edited
    pub query: String,
    /// Cursor position within the search box, in bytes
    pub query_cursor: usize,
    /// Height of the visible list area (set during render)
    pub visible_height: usize,
    /// Sorted tag bar vocabulary
    pub vocabulary: Vec<String>,
    /// Year options, newest first
    pub year_options: Vec<u16>,
    /// Whether the page should close
    pub should_exit: bool,
}

impl PageUiState {
    /// Create UI state for a catalog
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            vocabulary: catalog.tag_vocabulary(),
            year_options: catalog.years(),
            visible_height: 20,
            ..Self::default()
        }
    }

    /// Number of rows in a pane
    #[must_use]
    pub fn pane_len(&self, session: &Session, pane: Focus) -> usize {
        match pane {
            Focus::List => session.view().visible_count,
            Focus::Tags => self.vocabulary.len(),
            Focus::Years => self.year_options.len() + 1,
            Focus::Chips => session.view().chips.len(),
            Focus::Selection => session.selection().len(),
        }
    }

    /// Cursor of a pane
    pub const fn cursor_mut(&mut self, pane: Focus) -> &mut ListCursor {
        match pane {
            Focus::List => &mut self.list,
            Focus::Tags => &mut self.tags,
            Focus::Years => &mut self.years,
            Focus::Chips => &mut self.chips,
            Focus::Selection => &mut self.selection,
        }
    }

    /// Identifier of the paper under the list cursor
    #[must_use]
    pub fn current_item<'s>(&self, session: &'s Session) -> Option<&'s str> {
        session
            .view()
            .rows
            .iter()
            .filter(|row| row.visible)
            .nth(self.list.cursor)
            .map(|row| row.id.as_str())
    }

    /// Identifier under the selection panel cursor
    #[must_use]
    pub fn current_selected<'s>(&self, session: &'s Session) -> Option<&'s str> {
        session
            .selection()
            .selected()
            .get(self.selection.cursor)
            .map(String::as_str)
    }

    /// Tag under the tag bar cursor
    #[must_use]
    pub fn current_tag(&self) -> Option<&str> {
        self.vocabulary.get(self.tags.cursor).map(String::as_str)
    }

    /// Put the list cursor on a paper if it is visible
    pub fn focus_item(&mut self, session: &Session, id: &str) -> bool {
        let Some(index) = session
            .view()
            .rows
            .iter()
            .filter(|row| row.visible)
            .position(|row| row.id == id)
        else {
            return false;
        };
        self.focus = Focus::List;
        self.list.jump(index, self.visible_height);
        true
    }

    /// Bring cursors and the search box back in line with the session
    ///
    /// The search box is overwritten only when the session's term was changed
    /// by something other than typing, such as removing the search chip.
    pub fn sync(&mut self, session: &Session) {
        let height = self.visible_height;
        for pane in [Focus::List, Focus::Chips, Focus::Selection] {
            let len = self.pane_len(session, pane);
            self.cursor_mut(pane).clamp(len, height);
        }
        if self.focus == Focus::Selection && !session.selection().is_active() {
            self.focus = Focus::List;
        }
        if session.search_input() != self.query {
            self.query = session.search_input().to_string();
            self.query_cursor = self.query.len();
        }
    }

    /// Add a character to the query
    pub fn query_push(&mut self, c: char) {
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
    }

    /// Remove a character from the query (backspace)
    pub fn query_backspace(&mut self) -> bool {
        if self.query_cursor == 0 {
            return false;
        }
        let prev_char_boundary = self.query[..self.query_cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        self.query.remove(prev_char_boundary);
        self.query_cursor = prev_char_boundary;
        true
    }

    /// Delete character under cursor
    pub fn query_delete(&mut self) -> bool {
        if self.query_cursor >= self.query.len() {
            return false;
        }
        self.query.remove(self.query_cursor);
        true
    }

    /// Move query cursor left
    pub fn query_cursor_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move query cursor right
    pub fn query_cursor_right(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query_cursor = self.query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    /// Delete the word before the cursor
    pub fn query_delete_word(&mut self) -> bool {
        if self.query_cursor == 0 {
            return false;
        }
        let trimmed = self.query[..self.query_cursor].trim_end();
        let start = trimmed.rfind(' ').map_or(0, |i| i + 1);
        self.query.drain(start..self.query_cursor);
        self.query_cursor = start;
        true
    }

    /// Clear the query
    pub fn query_clear(&mut self) {
        self.query.clear();
        self.query_cursor = 0;
    }

    /// Show the oldest unacknowledged alert, if no modal is open
    ///
    /// The alert stays queued in `status` while another modal is visible.
    pub fn show_alert(&mut self, status: &StatusBarWriter) {
        if matches!(self.mode, Mode::Normal | Mode::Search)
            && let Some(text) = status.take_alert()
        {
            self.mode = Mode::Alert(text);
        }
    }
}
