//! List command - tag bar vocabulary or year options of a catalog

use crate::{catalog::Catalog, cli::ListVariant, output};

/// Execute the list command
pub fn execute(catalog: &Catalog, variant: ListVariant, quiet: bool) {
    match variant {
        ListVariant::Tags => list_tags(catalog, quiet),
        ListVariant::Years => list_years(catalog, quiet),
    }
}

/// Tags with the number of papers carrying each, in tag bar order
#[must_use]
pub fn tag_counts(catalog: &Catalog) -> Vec<(String, usize)> {
    catalog
        .tag_vocabulary()
        .into_iter()
        .map(|tag| {
            let count = catalog.items().iter().filter(|item| item.has_tag(&tag)).count();
            (tag, count)
        })
        .collect()
}

/// Years with the number of papers from each, newest first
#[must_use]
pub fn year_counts(catalog: &Catalog) -> Vec<(u16, usize)> {
    catalog
        .years()
        .into_iter()
        .map(|year| {
            let count = catalog.items().iter().filter(|item| item.year == Some(year)).count();
            (year, count)
        })
        .collect()
}

fn list_tags(catalog: &Catalog, quiet: bool) {
    let tags = tag_counts(catalog);

    if tags.is_empty() {
        if !quiet {
            println!("No tags found in catalog.");
        }
        return;
    }

    if !quiet {
        println!("Tags in catalog:");
    }
    for (tag, count) in tags {
        println!("{}", output::tag_with_count(&tag, count, quiet));
    }
}

fn list_years(catalog: &Catalog, quiet: bool) {
    let years = year_counts(catalog);

    if !quiet {
        println!("Years in catalog:");
    }
    for (year, count) in years {
        println!("{}", output::year_with_count(year, count, quiet));
    }

    let unknown = catalog.items().iter().filter(|item| item.year.is_none()).count();
    if unknown > 0 && !quiet {
        println!("  N/A ({unknown} paper{})", if unknown == 1 { "" } else { "s" });
    }
}
