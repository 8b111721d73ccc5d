//! Modal dialogs for the share link and blocking alerts

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[allow(clippy::cast_possible_truncation)]
fn modal_width(text: &str, area: Rect) -> u16 {
    let wanted = text.chars().count().min(u16::MAX as usize) as u16 + 4;
    wanted.clamp(40, 90).min(area.width.saturating_sub(4))
}

/// Dialog showing the share link with copy instructions
pub struct ShareDialog<'a> {
    link: &'a str,
    theme: &'a Theme,
}

impl<'a> ShareDialog<'a> {
    /// Create a new share dialog
    #[must_use]
    pub const fn new(link: &'a str, theme: &'a Theme) -> Self {
        Self { link, theme }
    }
}

impl Widget for ShareDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = modal_width(self.link, area);
        let link_rows = u16::try_from(self.link.chars().count())
            .unwrap_or(u16::MAX)
            .div_ceil(width.saturating_sub(4).max(1));
        let modal_area = centered_rect(width, link_rows + 6, area);

        Clear.render(modal_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Share Selection ")
            .title_alignment(Alignment::Center);

        let lines = vec![
            Line::styled("Link to this selection:", self.theme.dimmed_style()),
            Line::default(),
            Line::styled(self.link, self.theme.info_style()),
            Line::default(),
            Line::from(vec![
                Span::styled("y", self.theme.cursor_style()),
                Span::raw(": copy  "),
                Span::styled("Enter/ESC", self.theme.cursor_style()),
                Span::raw(": close"),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(modal_area, buf);
    }
}

/// Blocking alert, dismissed with any key
pub struct AlertDialog<'a> {
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> AlertDialog<'a> {
    /// Create a new alert dialog
    #[must_use]
    pub const fn new(message: &'a str, theme: &'a Theme) -> Self {
        Self { message, theme }
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = modal_width(self.message, area);
        let modal_area = centered_rect(width, 6, area);

        Clear.render(modal_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.error_style())
            .title(" Alert ")
            .title_alignment(Alignment::Center);

        let lines = vec![
            Line::styled(self.message, self.theme.warning_style()),
            Line::default(),
            Line::styled("Press any key to continue", self.theme.dimmed_style()),
        ];

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(modal_area, buf);
    }
}
