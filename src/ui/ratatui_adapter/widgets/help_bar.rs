//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// Key combination (e.g., "TAB", "ctrl+t")
    pub key: String,
    /// Action description (e.g., "select", "add tag")
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    /// Hints to display
    hints: &'a [KeyHint],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints for browsing
    #[must_use]
    pub fn default_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("/", "search"),
            KeyHint::new("TAB", "pane"),
            KeyHint::new("Space", "toggle"),
            KeyHint::new("s", "select mode"),
            KeyHint::new("c", "clear filters"),
            KeyHint::new("?", "help"),
            KeyHint::new("q", "quit"),
        ]
    }

    /// Hints while selection mode is on
    #[must_use]
    pub fn selection_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("Space", "check"),
            KeyHint::new("v", "show selected"),
            KeyHint::new("x", "clear"),
            KeyHint::new("p", "share"),
            KeyHint::new("y", "copy link"),
            KeyHint::new("s", "done"),
        ]
    }

    /// Hints while typing in the search box
    #[must_use]
    pub fn search_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("Enter", "apply"),
            KeyHint::new("ESC", "back"),
            KeyHint::new("ctrl+u", "clear"),
            KeyHint::new("ctrl+w", "delete word"),
        ]
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        let line = Line::from(spans);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_render_inline() {
        let theme = Theme::default();
        let hints = vec![KeyHint::new("/", "search"), KeyHint::new("q", "quit")];
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        HelpBar::new(&hints, &theme).render(area, &mut buf);

        let line: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert_eq!(line.trim_end(), "/:search  q:quit");
    }
}
