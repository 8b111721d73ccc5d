//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the application.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for selected/highlighted items
    pub selection_bg: Color,
    /// Foreground color for selected items
    pub selection_fg: Color,
    /// Color for matched characters in fuzzy search
    pub match_highlight: Color,
    /// Color for the cursor indicator
    pub cursor: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for warning messages
    pub warning: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Color for tags
    pub tag: Color,
    /// Color for included tags
    pub include: Color,
    /// Color for excluded tags
    pub exclude: Color,
    /// Color for active-filter chips
    pub chip: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            match_highlight: Color::Yellow,
            cursor: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            tag: Color::Magenta,
            include: Color::Green,
            exclude: Color::Red,
            chip: Color::Yellow,
        }
    }

    /// Style for the currently selected item
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unselected items
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the cursor indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the search term where it appears in a title or author list
    #[must_use]
    pub fn match_style(&self) -> Style {
        Style::default()
            .fg(self.match_highlight)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for a checked selection box
    #[must_use]
    pub fn multi_select_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for success messages
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for warning messages
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for info messages
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for tags
    #[must_use]
    pub fn tag_style(&self) -> Style {
        Style::default().fg(self.tag)
    }

    /// Style for a tag in the include state
    #[must_use]
    pub fn include_style(&self) -> Style {
        Style::default()
            .fg(self.include)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a tag in the exclude state
    #[must_use]
    pub fn exclude_style(&self) -> Style {
        Style::default()
            .fg(self.exclude)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    /// Style for active-filter chips
    #[must_use]
    pub fn chip_style(&self) -> Style {
        Style::default().fg(self.chip)
    }

    /// Style for the border of the focused pane
    #[must_use]
    pub fn focus_style(&self) -> Style {
        Style::default().fg(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_state_styles_differ() {
        let theme = Theme::default();
        assert_eq!(theme.include_style().fg, Some(Color::Green));
        assert_eq!(theme.exclude_style().fg, Some(Color::Red));
        assert!(theme.exclude_style().add_modifier.contains(Modifier::CROSSED_OUT));
        assert_ne!(theme.include_style(), theme.tag_style());
    }
}
