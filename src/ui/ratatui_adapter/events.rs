//! Event handling for the ratatui TUI
//!
//! Maps keyboard and mouse events to session commands. Every state change
//! goes through [`Session::dispatch`] or [`Session::type_search`]; this module
//! only moves cursors and switches modes itself.

use super::state::{Focus, Mode, PageUiState};
use crate::filter::YearFilter;
use crate::session::{Command, Reaction, Session, ShareOutcome};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::{Duration, Instant};

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Close the page
    Quit,
    /// No action taken
    Ignored,
}

fn dispatch(state: &mut PageUiState, session: &mut Session, command: Command) -> EventResult {
    match session.dispatch(command) {
        Reaction::Share(ShareOutcome::Link(link) | ShareOutcome::CopyFailed(link)) => {
            state.mode = Mode::Share(link);
        }
        Reaction::Share(ShareOutcome::Copied(_)) => {
            if matches!(state.mode, Mode::Share(_)) {
                state.mode = Mode::Normal;
            }
        }
        Reaction::Focus { id, number } => {
            if number.is_some() {
                state.focus_item(session, &id);
            }
        }
        Reaction::Refreshed | Reaction::Unchanged | Reaction::Share(ShareOutcome::EmptySelection) => {}
    }
    state.sync(session);
    EventResult::Continue
}

/// Navigation keys shared by every pane
fn navigate(state: &mut PageUiState, session: &Session, code: KeyCode) -> bool {
    let pane = state.focus;
    let len = state.pane_len(session, pane);
    let height = state.visible_height;
    let cursor = state.cursor_mut(pane);

    match code {
        KeyCode::Up | KeyCode::Char('k') => cursor.up(height),
        KeyCode::Down | KeyCode::Char('j') => cursor.down(len, height),
        KeyCode::PageUp => cursor.page_up(height),
        KeyCode::PageDown => cursor.page_down(len, height),
        KeyCode::Home | KeyCode::Char('g') => cursor.start(height),
        KeyCode::End | KeyCode::Char('G') => cursor.end(len, height),
        _ => return false,
    }
    true
}

/// Space or Enter on the focused pane
fn activate(state: &mut PageUiState, session: &mut Session, code: KeyCode) -> EventResult {
    let command = match state.focus {
        Focus::List => {
            if !session.selection().is_active() {
                return EventResult::Ignored;
            }
            state
                .current_item(session)
                .map(|id| Command::ToggleItem(id.to_string()))
        }
        Focus::Tags => state
            .current_tag()
            .map(|tag| Command::CycleTag(tag.to_string())),
        Focus::Years => {
            let year = match state.years.cursor {
                0 => Some(YearFilter::All),
                n => state.year_options.get(n - 1).copied().map(YearFilter::Year),
            };
            year.map(Command::SetYear)
        }
        Focus::Chips => session
            .view()
            .chips
            .get(state.chips.cursor)
            .map(|chip| Command::RemoveChip(chip.key.clone())),
        Focus::Selection => state.current_selected(session).map(|id| {
            if code == KeyCode::Enter {
                Command::FocusItem(id.to_string())
            } else {
                Command::RemoveFromSelection(id.to_string())
            }
        }),
    };

    command.map_or(EventResult::Ignored, |command| {
        dispatch(state, session, command)
    })
}

/// Handle events in normal mode
fn handle_normal_mode(
    state: &mut PageUiState,
    session: &mut Session,
    key: KeyEvent,
) -> EventResult {
    if navigate(state, session, key.code) {
        return EventResult::Continue;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Esc | KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_exit = true;
            EventResult::Quit
        }

        (KeyCode::Char('/'), _) => {
            state.mode = Mode::Search;
            EventResult::Continue
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => dispatch(state, session, Command::ClearSearch),

        (KeyCode::Tab, _) => {
            state.focus = state.focus.next(session.selection().is_active());
            EventResult::Continue
        }
        (KeyCode::BackTab, _) => {
            state.focus = state.focus.prev(session.selection().is_active());
            EventResult::Continue
        }

        (KeyCode::Char(' ') | KeyCode::Enter, _) => activate(state, session, key.code),
        (KeyCode::Delete | KeyCode::Char('d'), _) if state.focus == Focus::Selection => {
            activate(state, session, KeyCode::Delete)
        }

        (KeyCode::Char('s'), _) => dispatch(state, session, Command::ToggleSelectionMode),
        (KeyCode::Char('v'), _) => dispatch(state, session, Command::ToggleShowSelected),
        (KeyCode::Char('x'), _) => dispatch(state, session, Command::ClearSelection),
        (KeyCode::Char('c'), _) => dispatch(state, session, Command::ClearAllFilters),
        (KeyCode::Char('p'), _) => dispatch(state, session, Command::RequestShare),
        (KeyCode::Char('y'), _) => dispatch(state, session, Command::CopyShareLink),

        (KeyCode::F(1) | KeyCode::Char('?'), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Handle events while typing in the search box
fn handle_search_mode(
    state: &mut PageUiState,
    session: &mut Session,
    key: KeyEvent,
    now: Instant,
) -> EventResult {
    let edited = match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            state.mode = Mode::Normal;
            return EventResult::Continue;
        }
        (KeyCode::Enter, _) => {
            state.mode = Mode::Normal;
            let term = state.query.clone();
            return dispatch(state, session, Command::SetSearch(term));
        }
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_exit = true;
            return EventResult::Quit;
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.query_clear();
            true
        }
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => state.query_delete_word(),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            true
        }
        (KeyCode::Backspace, _) => state.query_backspace(),
        (KeyCode::Delete, _) => state.query_delete(),
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            false
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            false
        }
        _ => return EventResult::Ignored,
    };

    if edited {
        session.type_search(state.query.clone(), now);
    }
    EventResult::Continue
}

/// Handle events in the share dialog
fn handle_share_mode(state: &mut PageUiState, session: &mut Session, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('y' | 'c') => dispatch(state, session, Command::CopyShareLink),
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            state.mode = Mode::Normal;
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Handle events in help or alert mode: any key closes
fn handle_dismiss(state: &mut PageUiState) -> EventResult {
    state.mode = Mode::Normal;
    EventResult::Continue
}

/// Handle a key press
pub fn handle_key(
    state: &mut PageUiState,
    session: &mut Session,
    key: KeyEvent,
    now: Instant,
) -> EventResult {
    match state.mode {
        Mode::Normal => handle_normal_mode(state, session, key),
        Mode::Search => handle_search_mode(state, session, key, now),
        Mode::Share(_) => handle_share_mode(state, session, key),
        Mode::Help | Mode::Alert(_) => handle_dismiss(state),
    }
}

/// Handle mouse events
fn handle_mouse(state: &mut PageUiState, session: &Session, mouse: MouseEvent) -> EventResult {
    let code = match mouse.kind {
        MouseEventKind::ScrollUp => KeyCode::Up,
        MouseEventKind::ScrollDown => KeyCode::Down,
        _ => return EventResult::Ignored,
    };
    if state.mode == Mode::Normal && navigate(state, session, code) {
        EventResult::Continue
    } else {
        EventResult::Ignored
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(
    state: &mut PageUiState,
    session: &mut Session,
    timeout: Duration,
) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, session, key, Instant::now()),
        Event::Mouse(mouse) => handle_mouse(state, session, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TagState;
    use crate::session::{Page, SessionOptions};
    use crate::testing::shelf_catalog;
    use crate::ui::clipboard::MemoryClipboard;
    use crate::ui::output::StatusBarWriter;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn setup() -> (PageUiState, Session, StatusBarWriter) {
        let status = StatusBarWriter::new();
        let page = Page::headless()
            .with_notifier(status.clone())
            .with_clipboard(MemoryClipboard::new());
        let session = Session::new(shelf_catalog(), SessionOptions::default(), page).unwrap();
        (PageUiState::new(session.catalog()), session, status)
    }

    fn press(state: &mut PageUiState, session: &mut Session, code: KeyCode) -> EventResult {
        handle_key(state, session, key(code), Instant::now())
    }

    #[test]
    fn test_navigation_handling() {
        let (mut state, mut session, _) = setup();

        assert_eq!(press(&mut state, &mut session, KeyCode::Down), EventResult::Continue);
        assert_eq!(state.list.cursor, 1);
        assert_eq!(press(&mut state, &mut session, KeyCode::Up), EventResult::Continue);
        assert_eq!(state.list.cursor, 0);

        press(&mut state, &mut session, KeyCode::End);
        assert_eq!(state.list.cursor, 3);
    }

    #[test]
    fn test_tag_bar_cycles_tag() {
        let (mut state, mut session, _) = setup();
        press(&mut state, &mut session, KeyCode::Tab);
        assert_eq!(state.focus, Focus::Tags);

        // vocabulary: Hashing, Neural Rendering, Real-Time
        press(&mut state, &mut session, KeyCode::Char(' '));
        assert_eq!(session.filter().tag_state("Hashing"), TagState::Include);
        assert_eq!(session.view().visible_ids(), vec!["instant"]);

        press(&mut state, &mut session, KeyCode::Enter);
        assert_eq!(session.filter().tag_state("Hashing"), TagState::Exclude);
    }

    #[test]
    fn test_year_selector() {
        let (mut state, mut session, _) = setup();
        state.focus = Focus::Years;

        press(&mut state, &mut session, KeyCode::Down);
        press(&mut state, &mut session, KeyCode::Enter);
        assert_eq!(session.filter().year, YearFilter::Year(2023));
        assert_eq!(session.view().visible_ids(), vec!["3dgs"]);

        press(&mut state, &mut session, KeyCode::Home);
        press(&mut state, &mut session, KeyCode::Enter);
        assert_eq!(session.filter().year, YearFilter::All);
    }

    #[test]
    fn test_search_typing_is_debounced() {
        let (mut state, mut session, _) = setup();
        press(&mut state, &mut session, KeyCode::Char('/'));
        assert_eq!(state.mode, Mode::Search);

        let start = Instant::now();
        for c in "gauss".chars() {
            handle_key(&mut state, &mut session, key(KeyCode::Char(c)), start);
        }
        assert_eq!(session.search_input(), "gauss");
        assert_eq!(session.filter().search, "");

        assert!(session.tick(start + Duration::from_secs(1)));
        assert_eq!(session.view().visible_ids(), vec!["3dgs"]);
    }

    #[test]
    fn test_search_enter_commits_immediately() {
        let (mut state, mut session, _) = setup();
        state.mode = Mode::Search;
        for c in "neural".chars() {
            press(&mut state, &mut session, KeyCode::Char(c));
        }
        press(&mut state, &mut session, KeyCode::Enter);
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(session.filter().search, "neural");
        assert!(session.search_deadline().is_none());
    }

    #[test]
    fn test_selection_keys() {
        let (mut state, mut session, _) = setup();

        assert_eq!(press(&mut state, &mut session, KeyCode::Char(' ')), EventResult::Ignored);

        press(&mut state, &mut session, KeyCode::Char('s'));
        assert!(session.selection().is_active());
        press(&mut state, &mut session, KeyCode::Char(' '));
        press(&mut state, &mut session, KeyCode::Down);
        press(&mut state, &mut session, KeyCode::Char(' '));
        assert_eq!(session.selection().selected(), ["nerf", "3dgs"]);

        state.focus = Focus::Selection;
        press(&mut state, &mut session, KeyCode::Char('d'));
        assert_eq!(session.selection().selected(), ["3dgs"]);

        press(&mut state, &mut session, KeyCode::Enter);
        assert_eq!(state.focus, Focus::List);
        assert_eq!(state.current_item(&session), Some("3dgs"));
    }

    #[test]
    fn test_share_dialog_and_copy() {
        let (mut state, mut session, status) = setup();
        press(&mut state, &mut session, KeyCode::Char('s'));
        press(&mut state, &mut session, KeyCode::Char(' '));

        press(&mut state, &mut session, KeyCode::Char('p'));
        let Mode::Share(link) = &state.mode else {
            panic!("expected share dialog");
        };
        assert!(link.ends_with("?selected=nerf&show_selected=true"));

        press(&mut state, &mut session, KeyCode::Char('y'));
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(status.latest_message().map(|(_, m)| m).as_deref(), Some("Copied!"));
    }

    #[test]
    fn test_empty_share_raises_alert() {
        let (mut state, mut session, status) = setup();
        press(&mut state, &mut session, KeyCode::Char('p'));
        assert_eq!(state.mode, Mode::Normal);

        state.show_alert(&status);
        assert!(matches!(state.mode, Mode::Alert(_)));
        press(&mut state, &mut session, KeyCode::Char('z'));
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_chip_removal() {
        let (mut state, mut session, _) = setup();
        session.dispatch(Command::SetSearch("neural".into()));
        state.sync(&session);
        state.focus = Focus::Chips;

        press(&mut state, &mut session, KeyCode::Enter);
        assert_eq!(session.filter().search, "");
        assert_eq!(state.query, "");
    }

    #[test]
    fn test_abort() {
        let (mut state, mut session, _) = setup();
        assert_eq!(press(&mut state, &mut session, KeyCode::Esc), EventResult::Quit);
        assert!(state.should_exit);
    }
}
