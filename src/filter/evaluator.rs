//! Visibility evaluation
//!
//! Plain filtering is the conjunction of four predicates:
//!
//! ```text
//! visible = search ∧ year ∧ include ∧ exclude
//! ```
//!
//! When "show only selected" is on, visibility is plain membership in the
//! selection instead and the four predicates are not consulted at all.

use super::types::{FilterState, YearFilter};
use crate::catalog::{Catalog, Item};
use crate::selection::SelectionState;

/// Case-insensitive substring match against the title and author text
///
/// An empty term matches every item.
#[must_use]
pub fn search_match(item: &Item, term: &str) -> bool {
    search_match_lowered(item, &term.to_lowercase())
}

fn search_match_lowered(item: &Item, needle: &str) -> bool {
    needle.is_empty()
        || item.title.to_lowercase().contains(needle)
        || item.authors.to_lowercase().contains(needle)
}

/// Exact year equality, or unconditional when the selector is "all"
#[must_use]
pub fn year_match(item: &Item, year: YearFilter) -> bool {
    match year {
        YearFilter::All => true,
        YearFilter::Year(wanted) => item.year == Some(wanted),
    }
}

/// True when every included tag is on the item (vacuously true when empty)
#[must_use]
pub fn include_match(item: &Item, include: &[String]) -> bool {
    include.iter().all(|tag| item.has_tag(tag))
}

/// True when none of the excluded tags is on the item (vacuously true when empty)
#[must_use]
pub fn exclude_match(item: &Item, exclude: &[String]) -> bool {
    !exclude.iter().any(|tag| item.has_tag(tag))
}

/// Plain filter verdict for one item
#[must_use]
pub fn matches(item: &Item, filter: &FilterState) -> bool {
    search_match(item, &filter.search)
        && year_match(item, filter.year)
        && include_match(item, filter.included())
        && exclude_match(item, filter.excluded())
}

/// Visibility of every catalog item, in document order
#[must_use]
pub fn evaluate(catalog: &Catalog, filter: &FilterState, selection: &SelectionState) -> Vec<bool> {
    if selection.show_only_selected() {
        return catalog
            .items()
            .iter()
            .map(|item| selection.is_selected(&item.id))
            .collect();
    }

    let needle = filter.search.to_lowercase();
    catalog
        .items()
        .iter()
        .map(|item| {
            search_match_lowered(item, &needle)
                && year_match(item, filter.year)
                && include_match(item, filter.included())
                && exclude_match(item, filter.excluded())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TagState;
    use crate::testing::sample_catalog;

    fn visible_ids(catalog: &Catalog, flags: &[bool]) -> Vec<String> {
        catalog
            .items()
            .iter()
            .zip(flags)
            .filter(|(_, visible)| **visible)
            .map(|(item, _)| item.id.clone())
            .collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = sample_catalog();
        let mut filter = FilterState::new();
        filter.search = "DEEP".into();

        let flags = evaluate(&catalog, &filter, &SelectionState::new());
        assert_eq!(visible_ids(&catalog, &flags), vec!["p1"]);
    }

    #[test]
    fn test_search_matches_authors() {
        let catalog = sample_catalog();
        let item = catalog.get("p2").unwrap();
        assert!(search_match(item, "lee"));
        assert!(!search_match(item, "smith"));
        assert!(search_match(item, ""));
    }

    #[test]
    fn test_year_match() {
        let catalog = sample_catalog();
        let item = catalog.get("p1").unwrap();
        assert!(year_match(item, YearFilter::All));
        assert!(year_match(item, YearFilter::Year(2020)));
        assert!(!year_match(item, YearFilter::Year(2019)));
    }

    #[test]
    fn test_empty_tag_lists_match_everything() {
        let catalog = sample_catalog();
        for item in catalog.items() {
            assert!(include_match(item, &[]));
            assert!(exclude_match(item, &[]));
        }
    }

    #[test]
    fn test_include_is_conjunction() {
        let item = Item::new("x", "T", "A", Some(2020), vec!["ml".into(), "vision".into()]);
        assert!(include_match(&item, &["ml".into(), "vision".into()]));
        assert!(!include_match(&item, &["ml".into(), "pl".into()]));
    }

    #[test]
    fn test_exclude_rejects_any() {
        let item = Item::new("x", "T", "A", Some(2020), vec!["ml".into(), "vision".into()]);
        assert!(!exclude_match(&item, &["pl".into(), "vision".into()]));
        assert!(exclude_match(&item, &["pl".into()]));
    }

    #[test]
    fn test_include_and_exclude_scenario() {
        let catalog = sample_catalog();
        let selection = SelectionState::new();

        let mut filter = FilterState::new();
        filter.set_tag_state("ml", TagState::Include);
        assert_eq!(visible_ids(&catalog, &evaluate(&catalog, &filter, &selection)), vec!["p1"]);

        filter.set_tag_state("ml", TagState::Exclude);
        assert_eq!(visible_ids(&catalog, &evaluate(&catalog, &filter, &selection)), vec!["p2"]);
    }

    #[test]
    fn test_conjunction_of_all_predicates() {
        let catalog = sample_catalog();
        let mut filter = FilterState::new();
        filter.search = "deep".into();
        filter.year = YearFilter::Year(2019);

        let flags = evaluate(&catalog, &filter, &SelectionState::new());
        assert!(flags.iter().all(|visible| !visible));

        for (item, visible) in catalog.items().iter().zip(&flags) {
            assert_eq!(*visible, matches(item, &filter));
        }
    }

    #[test]
    fn test_show_only_selected_bypasses_filters() {
        let catalog = sample_catalog();
        let mut filter = FilterState::new();
        filter.search = "deep".into();
        filter.year = YearFilter::Year(2020);
        filter.set_tag_state("ml", TagState::Include);

        let mut selection = SelectionState::new();
        selection.enter();
        selection.set_selected("p2", true);
        selection.set_show_only_selected(true);

        let flags = evaluate(&catalog, &filter, &selection);
        assert_eq!(visible_ids(&catalog, &flags), vec!["p2"]);
    }

    #[test]
    fn test_show_only_with_empty_selection() {
        let catalog = sample_catalog();
        let mut selection = SelectionState::new();
        selection.enter();
        selection.set_show_only_selected(true);

        let flags = evaluate(&catalog, &FilterState::new(), &selection);
        assert!(flags.iter().all(|visible| !visible));
    }
}
