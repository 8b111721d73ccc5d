//! Ratatui-based paper listing
//!
//! Draws a [`Session`] and feeds it key presses until the user quits.

use super::events::{EventResult, poll_and_handle};
use super::state::{Focus, Mode, PageUiState};
use super::theme::Theme;
use super::widgets::{
    AlertDialog, ChipRow, HelpBar, HelpOverlay, ItemList, SearchBar, SelectionPanel, ShareDialog,
    StatusBar, TagBar, YearList,
};
use crate::session::{MemoryAddressBar, Session};
use crate::thumbnails::ThumbnailLoader;
use crate::ui::error::Result;
use crate::ui::output::StatusBarWriter;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Longest wait between redraws
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// How long to wait for input before the next redraw
///
/// Wakes up early when a debounced search term falls due.
#[must_use]
pub fn poll_timeout(deadline: Option<Instant>, now: Instant) -> Duration {
    deadline.map_or(FRAME_INTERVAL, |due| {
        due.saturating_duration_since(now).min(FRAME_INTERVAL)
    })
}

/// Interactive page around a session
///
/// Holds the drawing side of the session's collaborators: the status writer
/// the session reports to, the address bar it writes, and optionally the
/// thumbnail loader it updates.
pub struct RatatuiPage {
    theme: Theme,
    status: StatusBarWriter,
    address: MemoryAddressBar,
    thumbnails: Option<ThumbnailLoader>,
}

impl RatatuiPage {
    /// Create a page drawing from the given collaborator handles
    #[must_use]
    pub fn new(status: StatusBarWriter, address: MemoryAddressBar) -> Self {
        Self {
            theme: Theme::default(),
            status,
            address,
            thumbnails: None,
        }
    }

    /// Show thumbnails resolved by a clone of `loader`
    #[must_use]
    pub fn with_thumbnails(mut self, loader: ThumbnailLoader) -> Self {
        self.thumbnails = Some(loader);
        self
    }

    /// Set custom theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run the page until the user quits
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up or drawn to.
    pub fn run(&self, session: &mut Session) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let result = self.run_loop(&mut terminal, session);

        if let Err(e) = Self::cleanup_terminal() {
            tracing::warn!(error = %e, "terminal cleanup failed");
        }

        result
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        session: &mut Session,
    ) -> Result<()> {
        let mut state = PageUiState::new(session.catalog());
        state.sync(session);

        while !state.should_exit {
            terminal.draw(|frame| self.render(frame, &mut state, session))?;

            let timeout = poll_timeout(session.search_deadline(), Instant::now());
            if poll_and_handle(&mut state, session, timeout)? == EventResult::Quit {
                break;
            }

            if session.tick(Instant::now()) {
                state.sync(session);
            }
            state.show_alert(&self.status);
        }

        tracing::info!(query = %session.query(), "page closed");
        Ok(())
    }

    /// Draw the whole page
    pub fn render(&self, frame: &mut Frame, state: &mut PageUiState, session: &Session) {
        let theme = &self.theme;
        let area = frame.area();

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Length(3), // Active filters
                Constraint::Min(5),    // Content
                Constraint::Length(3), // Status bar
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let searching = state.mode == Mode::Search;
        let search_bar = SearchBar::new(&state.query, state.query_cursor, ">", theme)
            .focused(searching)
            .pending(session.search_deadline().is_some());
        frame.render_widget(search_bar, main_layout[0]);

        let chips = ChipRow::new(&session.view().chips, state.chips.cursor, theme)
            .focused(state.focus == Focus::Chips);
        frame.render_widget(chips, main_layout[1]);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
            .split(main_layout[2]);

        state.visible_height = content[0].height.saturating_sub(2) as usize;
        let mut list =
            ItemList::new(session, state.list, theme).focused(state.focus == Focus::List);
        if let Some(thumbnails) = &self.thumbnails {
            list = list.with_thumbnails(thumbnails);
        }
        frame.render_widget(list, content[0]);

        let selecting = session.selection().is_active();
        #[allow(clippy::cast_possible_truncation)]
        let year_rows = (state.year_options.len() as u16 + 3).min(8);
        let side_constraints: &[Constraint] = if selecting {
            &[
                Constraint::Min(4),
                Constraint::Length(year_rows),
                Constraint::Percentage(40),
            ]
        } else {
            &[Constraint::Min(4), Constraint::Length(year_rows)]
        };
        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints(side_constraints)
            .split(content[1]);

        let tags = TagBar::new(&state.vocabulary, session.filter(), state.tags, theme)
            .focused(state.focus == Focus::Tags);
        frame.render_widget(tags, side[0]);

        let years = YearList::new(&state.year_options, session.filter().year, state.years, theme)
            .focused(state.focus == Focus::Years);
        frame.render_widget(years, side[1]);

        if selecting {
            let panel = SelectionPanel::new(session, state.selection, theme)
                .focused(state.focus == Focus::Selection);
            frame.render_widget(panel, side[2]);
        }

        let messages = self.status.recent_messages();
        let location = self.address.location();
        let status_bar = StatusBar::new(&messages, theme).with_location(&location);
        frame.render_widget(status_bar, main_layout[3]);

        let hints = if searching {
            HelpBar::search_hints()
        } else if selecting {
            HelpBar::selection_hints()
        } else {
            HelpBar::default_hints()
        };
        frame.render_widget(HelpBar::new(&hints, theme), main_layout[4]);

        Self::render_overlays(frame, state, theme);
    }

    /// Render overlays (help, share link, alerts)
    fn render_overlays(frame: &mut Frame, state: &PageUiState, theme: &Theme) {
        match &state.mode {
            Mode::Help => frame.render_widget(HelpOverlay::new(theme), frame.area()),
            Mode::Share(link) => frame.render_widget(ShareDialog::new(link, theme), frame.area()),
            Mode::Alert(message) => {
                frame.render_widget(AlertDialog::new(message, theme), frame.area());
            }
            Mode::Normal | Mode::Search => {}
        }
    }
}
