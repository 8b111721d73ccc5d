//! Filter state data structures
//!
//! - `YearFilter`: a single year or "all"
//! - `TagState`: the tri-state of one tag in the tag bar
//! - `FilterState`: search term, year, and the include/exclude tag lists

use crate::catalog::parse_year;
use std::fmt;

/// Year selector value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearFilter {
    /// Every year matches
    #[default]
    All,
    /// Only items published in this year match
    Year(u16),
}

impl YearFilter {
    /// Parse a selector value, falling back to `All` for anything unrecognised
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Self::All;
        }
        parse_year(raw).map_or(Self::All, Self::Year)
    }

    /// Whether this is the default selector value
    #[must_use]
    pub const fn is_all(self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Year(year) => write!(f, "{year}"),
        }
    }
}

/// State of a single tag in the tag bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagState {
    /// Tag does not participate in filtering
    #[default]
    Neutral,
    /// Items must carry this tag
    Include,
    /// Items must not carry this tag
    Exclude,
}

impl TagState {
    /// Next state in the click cycle: neutral → include → exclude → neutral
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Neutral => Self::Include,
            Self::Include => Self::Exclude,
            Self::Exclude => Self::Neutral,
        }
    }
}

/// Complete filter state
///
/// The include and exclude lists are kept disjoint and in insertion order,
/// which is also the order they are written to the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text search term as typed
    pub search: String,
    /// Year selector
    pub year: YearFilter,
    include: Vec<String>,
    exclude: Vec<String>,
}

impl FilterState {
    /// Create an empty filter state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            search: String::new(),
            year: YearFilter::All,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }

    /// Tags every visible item must carry
    #[must_use]
    pub fn included(&self) -> &[String] {
        &self.include
    }

    /// Tags no visible item may carry
    #[must_use]
    pub fn excluded(&self) -> &[String] {
        &self.exclude
    }

    /// Current state of a tag
    #[must_use]
    pub fn tag_state(&self, tag: &str) -> TagState {
        if self.include.iter().any(|t| t == tag) {
            TagState::Include
        } else if self.exclude.iter().any(|t| t == tag) {
            TagState::Exclude
        } else {
            TagState::Neutral
        }
    }

    /// Put a tag into a given state
    ///
    /// The tag is removed from the opposite list, so a tag is never both
    /// included and excluded. An unchanged state keeps its list position.
    pub fn set_tag_state(&mut self, tag: &str, state: TagState) {
        if self.tag_state(tag) == state {
            return;
        }
        self.include.retain(|t| t != tag);
        self.exclude.retain(|t| t != tag);
        match state {
            TagState::Include => self.include.push(tag.to_string()),
            TagState::Exclude => self.exclude.push(tag.to_string()),
            TagState::Neutral => {}
        }
    }

    /// Advance a tag one step through its click cycle
    ///
    /// Returns the new state.
    pub fn cycle_tag(&mut self, tag: &str) -> TagState {
        let next = self.tag_state(tag).next();
        self.set_tag_state(tag, next);
        next
    }

    /// Return a tag to neutral
    pub fn clear_tag(&mut self, tag: &str) {
        self.set_tag_state(tag, TagState::Neutral);
    }

    /// Reset search, year, and every tag
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Whether every field is at its default
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.search.is_empty() && self.year.is_all() && self.include.is_empty() && self.exclude.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_filter_parse() {
        assert_eq!(YearFilter::parse("all"), YearFilter::All);
        assert_eq!(YearFilter::parse("2020"), YearFilter::Year(2020));
        assert_eq!(YearFilter::parse("twenty"), YearFilter::All);
        assert_eq!(YearFilter::parse(""), YearFilter::All);
    }

    #[test]
    fn test_year_filter_display() {
        assert_eq!(YearFilter::All.to_string(), "all");
        assert_eq!(YearFilter::Year(2019).to_string(), "2019");
    }

    #[test]
    fn test_cycle_tag_sequence() {
        let mut filter = FilterState::new();
        assert_eq!(filter.cycle_tag("ml"), TagState::Include);
        assert_eq!(filter.included(), ["ml".to_string()]);

        assert_eq!(filter.cycle_tag("ml"), TagState::Exclude);
        assert!(filter.included().is_empty());
        assert_eq!(filter.excluded(), ["ml".to_string()]);

        assert_eq!(filter.cycle_tag("ml"), TagState::Neutral);
        assert!(filter.excluded().is_empty());
    }

    #[test]
    fn test_three_cycles_restore_state() {
        let mut filter = FilterState::new();
        filter.search = "deep".into();
        filter.cycle_tag("pl");
        let start = filter.clone();

        for _ in 0..3 {
            filter.cycle_tag("ml");
        }
        assert_eq!(filter, start);
    }

    #[test]
    fn test_tag_never_in_both_lists() {
        let mut filter = FilterState::new();
        filter.set_tag_state("ml", TagState::Include);
        filter.set_tag_state("ml", TagState::Exclude);
        assert!(filter.included().is_empty());
        assert_eq!(filter.excluded(), ["ml".to_string()]);
    }

    #[test]
    fn test_insertion_order_kept() {
        let mut filter = FilterState::new();
        filter.set_tag_state("b", TagState::Include);
        filter.set_tag_state("a", TagState::Include);
        filter.set_tag_state("b", TagState::Include);
        assert_eq!(filter.included(), ["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_clear() {
        let mut filter = FilterState::new();
        filter.search = "x".into();
        filter.year = YearFilter::Year(2020);
        filter.cycle_tag("ml");
        assert!(!filter.is_default());

        filter.clear();
        assert!(filter.is_default());
    }
}
