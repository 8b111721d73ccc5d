//! Item list widget for displaying the visible papers

use crate::catalog::Item;
use crate::render::RowView;
use crate::session::Session;
use crate::thumbnails::ThumbnailLoader;
use crate::ui::ratatui_adapter::state::ListCursor;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Paper list widget with display numbers and selection checkboxes
pub struct ItemList<'a> {
    /// Session providing rows and items
    session: &'a Session,
    /// Cursor and scroll position
    cursor: ListCursor,
    /// Theme for styling
    theme: &'a Theme,
    /// Title for the list block
    title: String,
    /// Whether the list has focus
    focused: bool,
    /// Resolved thumbnails, shared with the session's image loader
    thumbnails: Option<&'a ThumbnailLoader>,
}

impl<'a> ItemList<'a> {
    /// Create a new item list widget
    #[must_use]
    pub fn new(session: &'a Session, cursor: ListCursor, theme: &'a Theme) -> Self {
        let title = format!(" {} ", session.view().badge());

        Self {
            session,
            cursor,
            theme,
            title,
            focused: true,
            thumbnails: None,
        }
    }

    /// Show each row's resolved thumbnail source
    #[must_use]
    pub const fn with_thumbnails(mut self, thumbnails: &'a ThumbnailLoader) -> Self {
        self.thumbnails = Some(thumbnails);
        self
    }

    /// Marker for an item's resolved thumbnail, once the loader has seen it
    fn thumbnail_marker(&self, item: &Item) -> Option<Span<'a>> {
        if item.thumbnail.is_none() && item.thumbnail_fallback.is_none() {
            return None;
        }
        let thumb = self.thumbnails?.get(&item.id)?;
        let text = match (thumb.label(), thumb.used_fallback) {
            (Some(label), true) => format!(" [img {label} (fallback)]"),
            (Some(label), false) => format!(" [img {label}]"),
            (None, _) => " [no image]".to_string(),
        };
        let style = if thumb.used_fallback {
            self.theme.warning_style()
        } else {
            self.theme.dimmed_style()
        };
        Some(Span::styled(text, style))
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Split `text` around the first ASCII case-insensitive occurrence of `term`
    fn highlight(text: &'a str, term: &str, base: Style, matched: Style) -> Vec<Span<'a>> {
        let found = (!term.is_empty())
            .then(|| text.to_ascii_lowercase().find(&term.to_ascii_lowercase()))
            .flatten();

        match found {
            Some(start) => {
                let end = start + term.len();
                vec![
                    Span::styled(&text[..start], base),
                    Span::styled(&text[start..end], matched),
                    Span::styled(&text[end..], base),
                ]
            }
            None => vec![Span::styled(text, base)],
        }
    }

    /// Render a single row
    fn render_item(&self, row: &RowView, item: &'a Item, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor && self.focused { ">" } else { " " };
        let number = row.number.map_or_else(String::new, |n| format!("{n:>3}."));

        let mut spans = vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(number, self.theme.dimmed_style()),
            Span::raw(" "),
        ];

        if self.session.selection().is_active() {
            if row.selected {
                spans.push(Span::styled("[✓] ", self.theme.multi_select_style()));
            } else {
                spans.push(Span::raw("[ ] "));
            }
        }

        let term = self.session.filter().search.as_str();
        let base = self.theme.normal_style();
        let matched = self.theme.match_style();
        spans.extend(Self::highlight(&item.title, term, base, matched));
        spans.push(Span::styled(
            format!(" ({}) ", item.year_label()),
            self.theme.dimmed_style(),
        ));
        spans.extend(Self::highlight(
            &item.authors,
            term,
            self.theme.dimmed_style(),
            matched,
        ));

        for tag in &item.tags {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!("#{tag}"), self.theme.tag_style()));
        }

        if let Some(marker) = self.thumbnail_marker(item) {
            spans.push(marker);
        }

        let line = Line::from(spans);

        if is_cursor && self.focused {
            ListItem::new(line).style(self.theme.selected_style())
        } else {
            ListItem::new(line)
        }
    }
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focus_style()
        } else {
            self.theme.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let visible_height = inner.height as usize;
        let catalog = self.session.catalog();

        let items: Vec<ListItem> = self
            .session
            .view()
            .rows
            .iter()
            .filter(|row| row.visible)
            .enumerate()
            .skip(self.cursor.scroll_offset)
            .take(visible_height)
            .filter_map(|(index, row)| {
                let item = catalog.get(&row.id)?;
                Some(self.render_item(row, item, index == self.cursor.cursor))
            })
            .collect();

        if items.is_empty() {
            Line::styled("No papers match the current filters.", self.theme.dimmed_style())
                .render(inner, buf);
            return;
        }

        List::new(items).render(inner, buf);
    }
}
