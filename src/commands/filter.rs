//! Filter command - print the listing for a set of filters

use crate::{
    PapershelfError,
    catalog::Catalog,
    output,
    query::{self, UrlState},
    render::RenderView,
    session::{Page, Session, SessionOptions},
    ui::output::StdoutWriter,
};
use colored::Colorize;
use serde::Serialize;

type Result<T> = std::result::Result<T, PapershelfError>;

#[derive(Debug, Serialize)]
struct ListingReport<'a> {
    query: &'a str,
    visible: usize,
    total: usize,
    papers: Vec<ReportRow<'a>>,
    chips: Vec<ReportChip<'a>>,
    selected: &'a [String],
}

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    number: usize,
    id: &'a str,
    title: &'a str,
    authors: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<u16>,
    tags: &'a [String],
    selected: bool,
}

#[derive(Debug, Serialize)]
struct ReportChip<'a> {
    title: &'a str,
    value: &'a str,
}

/// Evaluate page state against a catalog
///
/// The state goes through the same hydrate-and-refresh path as the
/// interactive page, so the result is exactly what the page would show.
///
/// # Errors
/// Returns an error if the configured base URL is invalid.
pub fn evaluate(catalog: Catalog, state: &UrlState, options: SessionOptions, quiet: bool) -> Result<Session> {
    let page = Page::headless().with_notifier(StdoutWriter::quiet(quiet));
    let mut session = Session::new(catalog, options, page)?;
    session.hydrate(&state.encode());
    Ok(session)
}

/// Execute the filter command
///
/// # Errors
/// Returns an error if the session cannot be created or JSON output fails.
pub fn execute(
    catalog: Catalog,
    state: &UrlState,
    options: SessionOptions,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let session = evaluate(catalog, state, options, quiet)?;

    if json {
        println!("{}", report_json(&session)?);
    } else {
        print_listing(&session, quiet);
    }
    Ok(())
}

fn report_json(session: &Session) -> Result<String> {
    let view = session.view();
    let papers = view
        .rows
        .iter()
        .filter_map(|row| {
            let number = row.number?;
            let item = session.catalog().get(&row.id)?;
            Some(ReportRow {
                number,
                id: &item.id,
                title: &item.title,
                authors: &item.authors,
                year: item.year,
                tags: &item.tags,
                selected: row.selected,
            })
        })
        .collect();

    let report = ListingReport {
        query: session.query(),
        visible: view.visible_count,
        total: view.total_count,
        papers,
        chips: view
            .chips
            .iter()
            .map(|chip| ReportChip {
                title: &chip.title,
                value: &chip.info,
            })
            .collect(),
        selected: session.selection().selected(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

fn print_listing(session: &Session, quiet: bool) {
    let view: &RenderView = session.view();
    let selection = session.selection();

    if !quiet {
        println!("{}", view.badge().bold());
    }

    for row in &view.rows {
        let (Some(number), Some(item)) = (row.number, session.catalog().get(&row.id)) else {
            continue;
        };
        let checkbox = selection.is_active().then_some(row.selected);
        println!("{}", output::numbered_item(number, item, checkbox, quiet));
    }

    if quiet {
        return;
    }

    if view.visible_count == 0 {
        println!("{}", "No papers match the current filters.".dimmed());
    }

    if !view.chips.is_empty() {
        println!("\nActive filters:");
        for chip in &view.chips {
            println!("  {}", output::chip(chip));
        }
    }

    if selection.is_active() {
        println!("\n{}", view.selection_counter);
        for item in session.selected_items() {
            println!("{}", output::selected_item(item));
        }
    }

    let location = query::location(session.query());
    if !location.is_empty() {
        println!("\n{}", location.dimmed());
    }
}
