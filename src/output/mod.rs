//! Output formatting for CLI display
//!
//! Plain-text renderings of the listing: numbered rows, chips, tag and year
//! counts. Colors are applied here so commands only decide what to print.

use crate::catalog::Item;
use crate::render::FilterChip;
use colored::Colorize;

/// Format a visible row: number, checkbox in selection mode, title, year, authors, tags
#[must_use]
pub fn numbered_item(
    number: usize,
    item: &Item,
    selection: Option<bool>,
    quiet: bool,
) -> String {
    if quiet {
        return item.id.clone();
    }

    let checkbox = match selection {
        Some(true) => format!("{} ", "[x]".green()),
        Some(false) => "[ ] ".to_string(),
        None => String::new(),
    };
    let tags = if item.tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", item.tags.join(", ")).cyan().to_string()
    };

    format!(
        "{:>4}. {checkbox}{} ({}) {}{tags}",
        number,
        item.title.bold(),
        item.year_label(),
        item.authors.dimmed(),
    )
}

/// Format a selected item for the selection summary
#[must_use]
pub fn selected_item(item: &Item) -> String {
    format!("  - {} ({}) {}", item.title, item.year_label(), item.authors.dimmed())
}

/// Format an active-filter chip
#[must_use]
pub fn chip(chip: &FilterChip) -> String {
    format!("{}: {}", chip.title, chip.info.yellow())
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag} ({count} paper{})", plural(count))
    }
}

/// Format a year with usage count
#[must_use]
pub fn year_with_count(year: u16, count: usize, quiet: bool) -> String {
    if quiet {
        year.to_string()
    } else {
        format!("  {year} ({count} paper{})", plural(count))
    }
}

const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
