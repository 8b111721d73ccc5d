//! Item and catalog data structures
//!
//! - `Item`: one displayable paper with its read-only attributes
//! - `Catalog`: the ordered, immutable collection of items in document order

use super::error::CatalogError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Prefix of tags that only encode the year and never appear in the tag bar
pub const YEAR_TAG_PREFIX: &str = "Year ";

/// A single paper entry
///
/// Items are immutable once loaded. Filtering only ever reads these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: String,

    /// Paper title
    pub title: String,

    /// Author string as displayed
    pub authors: String,

    /// Publication year, `None` when unknown (rendered as "N/A")
    #[serde(default, deserialize_with = "deserialize_year", skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,

    /// Tags attached to the paper
    #[serde(default)]
    pub tags: Vec<String>,

    /// Primary thumbnail source (URL or local path)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// Source substituted when the primary thumbnail cannot be loaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_fallback: Option<String>,
}

impl Item {
    /// Create a new item without thumbnails
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        authors: impl Into<String>,
        year: Option<u16>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: authors.into(),
            year,
            tags,
            thumbnail: None,
            thumbnail_fallback: None,
        }
    }

    /// Build an item from the raw data attributes of a rendered row
    ///
    /// `tags_json` is the JSON-encoded tag list exactly as it appears in the markup.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidTags` if the tag list is not a JSON array of strings.
    pub fn from_attributes(
        id: &str,
        title: &str,
        authors: &str,
        year: &str,
        tags_json: &str,
    ) -> Result<Self, CatalogError> {
        let tags: Vec<String> =
            serde_json::from_str(tags_json).map_err(|source| CatalogError::InvalidTags {
                id: id.to_string(),
                source,
            })?;

        Ok(Self::new(id, title, authors, parse_year(year), tags))
    }

    /// Attach thumbnail sources
    #[must_use]
    pub fn with_thumbnail(mut self, primary: Option<String>, fallback: Option<String>) -> Self {
        self.thumbnail = primary;
        self.thumbnail_fallback = fallback;
        self
    }

    /// Year as displayed on the card
    #[must_use]
    pub fn year_label(&self) -> String {
        self.year.map_or_else(|| "N/A".to_string(), |y| y.to_string())
    }

    /// Check whether the item carries a tag
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Parse a year attribute, returning `None` for anything that is not all digits
#[must_use]
pub fn parse_year(raw: &str) -> Option<u16> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawYear {
    Number(u64),
    Text(String),
}

fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawYear>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawYear::Number(n)) => u16::try_from(n).ok(),
        Some(RawYear::Text(s)) => parse_year(&s),
        None => None,
    })
}

/// Ordered collection of items
///
/// Document order is significant: display numbers are assigned in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from items in document order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two items share an identifier.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items, index })
    }

    /// All items in document order
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by identifier
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.position(id).map(|pos| &self.items[pos])
    }

    /// Document position of an item
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Whether an identifier exists in the catalog
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Tags offered in the tag bar: sorted, unique, without year tags
    #[must_use]
    pub fn tag_vocabulary(&self) -> Vec<String> {
        self.items
            .iter()
            .flat_map(|item| item.tags.iter())
            .filter(|tag| !tag.starts_with(YEAR_TAG_PREFIX))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Year options, newest first
    #[must_use]
    pub fn years(&self) -> Vec<u16> {
        let years: BTreeSet<u16> = self.items.iter().filter_map(|item| item.year).collect();
        years.into_iter().rev().collect()
    }
}
