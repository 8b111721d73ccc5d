//! Year selector widget

use crate::filter::YearFilter;
use crate::ui::ratatui_adapter::state::ListCursor;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Year selector: "All Years" followed by every catalog year, newest first
pub struct YearList<'a> {
    years: &'a [u16],
    current: YearFilter,
    cursor: ListCursor,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> YearList<'a> {
    /// Create a new year selector
    #[must_use]
    pub const fn new(years: &'a [u16], current: YearFilter, cursor: ListCursor, theme: &'a Theme) -> Self {
        Self {
            years,
            current,
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

impl Widget for YearList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focus_style()
        } else {
            self.theme.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Year ");

        let inner = block.inner(area);
        block.render(area, buf);

        let options: Vec<(YearFilter, String)> = std::iter::once((YearFilter::All, "All Years".to_string()))
            .chain(self.years.iter().map(|&y| (YearFilter::Year(y), y.to_string())))
            .collect();

        let height = inner.height as usize;
        let mut cursor = self.cursor;
        cursor.clamp(options.len(), height);

        let items: Vec<ListItem> = options
            .into_iter()
            .enumerate()
            .skip(cursor.scroll_offset)
            .take(height)
            .map(|(index, (option, label))| {
                let is_cursor = index == cursor.cursor && self.focused;
                let chosen = option == self.current;
                let line = Line::from(vec![
                    Span::styled(if is_cursor { ">" } else { " " }, self.theme.cursor_style()),
                    Span::styled(if chosen { "(•) " } else { "( ) " }, self.theme.info_style()),
                    Span::raw(label),
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
