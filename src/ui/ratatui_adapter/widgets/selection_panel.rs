//! Selection preview panel

use crate::session::Session;
use crate::ui::ratatui_adapter::state::ListCursor;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Panel listing selected papers in selection order, titled with the counter
pub struct SelectionPanel<'a> {
    session: &'a Session,
    cursor: ListCursor,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> SelectionPanel<'a> {
    /// Create a new selection panel
    #[must_use]
    pub const fn new(session: &'a Session, cursor: ListCursor, theme: &'a Theme) -> Self {
        Self {
            session,
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

impl Widget for SelectionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focus_style()
        } else {
            self.theme.border_style()
        };
        let title = format!(" {} ", self.session.view().selection_counter);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        let selected = self.session.selected_items();
        if selected.is_empty() {
            Line::styled("Space on a paper to select it", self.theme.dimmed_style())
                .render(inner, buf);
            return;
        }

        let height = inner.height as usize;
        let items: Vec<ListItem> = selected
            .into_iter()
            .enumerate()
            .skip(self.cursor.scroll_offset)
            .take(height)
            .map(|(index, item)| {
                let is_cursor = self.focused && index == self.cursor.cursor;
                let number = self
                    .session
                    .view()
                    .number_of(&item.id)
                    .map_or_else(|| "  -".to_string(), |n| format!("{n:>3}"));
                let line = Line::from(vec![
                    Span::styled(if is_cursor { ">" } else { " " }, self.theme.cursor_style()),
                    Span::styled(number, self.theme.dimmed_style()),
                    Span::raw(" "),
                    Span::raw(item.title.as_str()),
                    Span::styled(format!(" ({})", item.year_label()), self.theme.dimmed_style()),
                ]);
                if is_cursor {
                    ListItem::new(line).style(self.theme.selected_style())
                } else {
                    ListItem::new(line)
                }
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}
