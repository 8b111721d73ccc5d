//! Active-filter chip row

use crate::render::FilterChip;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// One line of removable chips, `Title: info ×`
pub struct ChipRow<'a> {
    chips: &'a [FilterChip],
    cursor: usize,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> ChipRow<'a> {
    /// Create a new chip row
    #[must_use]
    pub const fn new(chips: &'a [FilterChip], cursor: usize, theme: &'a Theme) -> Self {
        Self {
            chips,
            cursor,
            theme,
            focused: false,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ChipRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focus_style()
        } else {
            self.theme.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Active Filters ");

        if self.chips.is_empty() {
            Paragraph::new(Line::styled("None", self.theme.dimmed_style()))
                .block(block)
                .render(area, buf);
            return;
        }

        let mut spans = Vec::with_capacity(self.chips.len() * 4);
        for (index, chip) in self.chips.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if self.focused && index == self.cursor {
                self.theme.selected_style()
            } else {
                self.theme.chip_style()
            };
            spans.push(Span::styled(format!("{}: ", chip.title), style));
            spans.push(Span::styled(chip.info.as_str(), style));
            spans.push(Span::styled(" ×", style));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
