//! Tag bar widget with tri-state tag buttons

use crate::filter::{FilterState, TagState};
use crate::ui::ratatui_adapter::state::ListCursor;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Tag bar listing the vocabulary with each tag's include/exclude state
pub struct TagBar<'a> {
    vocabulary: &'a [String],
    filter: &'a FilterState,
    cursor: ListCursor,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> TagBar<'a> {
    /// Create a new tag bar widget
    #[must_use]
    pub const fn new(
        vocabulary: &'a [String],
        filter: &'a FilterState,
        cursor: ListCursor,
        theme: &'a Theme,
    ) -> Self {
        Self {
            vocabulary,
            filter,
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

    const fn marker(state: TagState) -> &'static str {
        match state {
            TagState::Neutral => "   ",
            TagState::Include => "[+]",
            TagState::Exclude => "[-]",
        }
    }

    fn render_tag(&self, tag: &'a str, is_cursor: bool) -> ListItem<'a> {
        let state = self.filter.tag_state(tag);
        let style = match state {
            TagState::Neutral => self.theme.tag_style(),
            TagState::Include => self.theme.include_style(),
            TagState::Exclude => self.theme.exclude_style(),
        };
        let cursor_char = if is_cursor && self.focused { ">" } else { " " };

        let line = Line::from(vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::styled(Self::marker(state), style),
            Span::raw(" "),
            Span::styled(tag, style),
        ]);

        if is_cursor && self.focused {
            ListItem::new(line).style(self.theme.selected_style())
        } else {
            ListItem::new(line)
        }
    }
}

impl Widget for TagBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focus_style()
        } else {
            self.theme.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Tags ");

        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        let mut cursor = self.cursor;
        cursor.clamp(self.vocabulary.len(), height);

        let items: Vec<ListItem> = self
            .vocabulary
            .iter()
            .enumerate()
            .skip(cursor.scroll_offset)
            .take(height)
            .map(|(index, tag)| self.render_tag(tag, index == cursor.cursor))
            .collect();

        List::new(items).render(inner, buf);
    }
}
