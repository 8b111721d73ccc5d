//! Status bar widget for displaying messages and the page address

use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget that displays the most recent message and the address bar
pub struct StatusBar<'a> {
    /// Messages to display
    messages: &'a [(MessageLevel, String)],
    /// Theme for styling
    theme: &'a Theme,
    /// Current address bar location
    location: &'a str,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(messages: &'a [(MessageLevel, String)], theme: &'a Theme) -> Self {
        Self {
            messages,
            theme,
            location: "",
        }
    }

    /// Show the address bar location on the right
    #[must_use]
    pub const fn with_location(mut self, location: &'a str) -> Self {
        self.location = location;
        self
    }

    /// Get style for a message level
    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Alert => self.theme.error_style().add_modifier(Modifier::BOLD),
            MessageLevel::Warning => self.theme.warning_style(),
            MessageLevel::Info => self.theme.info_style(),
            MessageLevel::Normal => self.theme.normal_style(),
        }
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error | MessageLevel::Alert => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(inner);

        if let Some((level, text)) = self.messages.last() {
            let style = self.style_for_level(*level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(*level), style),
                Span::styled(text.as_str(), style),
            ]);
            Paragraph::new(line).render(chunks[0], buf);
        }

        let location = if self.location.is_empty() {
            "/"
        } else {
            self.location
        };
        let indicator_style = self.theme.info_style().add_modifier(Modifier::DIM);
        Paragraph::new(Line::styled(location, indicator_style))
            .alignment(ratatui::layout::Alignment::Right)
            .render(chunks[1], buf);
    }
}
