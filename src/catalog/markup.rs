//! Item extraction from the generated paper-list page
//!
//! Every `.paper-row` element exposes its item through data attributes:
//! `data-id`, `data-title`, `data-authors`, `data-year` and a JSON-encoded
//! `data-tags`. The lazily loaded thumbnail sits in an `img` carrying
//! `data-src` and an optional `data-fallback`.

use super::error::CatalogError;
use super::types::Item;
use scraper::{ElementRef, Html, Selector};

const ROW_SELECTOR: &str = ".paper-row";
const THUMBNAIL_SELECTOR: &str = "img[data-src]";

fn selector(css: &str) -> Result<Selector, CatalogError> {
    Selector::parse(css).map_err(|e| CatalogError::Markup(format!("{css}: {e}")))
}

fn required<'a>(
    row: &ElementRef<'a>,
    index: usize,
    attribute: &'static str,
) -> Result<&'a str, CatalogError> {
    row.value()
        .attr(attribute)
        .ok_or(CatalogError::MissingAttribute { index, attribute })
}

/// Parse all item rows from a page, in document order
///
/// # Errors
///
/// Returns `CatalogError::MissingAttribute` when a row lacks a required data
/// attribute and `CatalogError::InvalidTags` when its tag list is not valid JSON.
pub fn parse_html(html: &str) -> Result<Vec<Item>, CatalogError> {
    let document = Html::parse_document(html);
    let rows = selector(ROW_SELECTOR)?;
    let thumbnails = selector(THUMBNAIL_SELECTOR)?;

    document
        .select(&rows)
        .enumerate()
        .map(|(index, row)| {
            let item = Item::from_attributes(
                required(&row, index, "data-id")?,
                required(&row, index, "data-title")?,
                required(&row, index, "data-authors")?,
                row.value().attr("data-year").unwrap_or_default(),
                required(&row, index, "data-tags")?,
            )?;

            let (primary, fallback) = row
                .select(&thumbnails)
                .next()
                .map(|img| {
                    (
                        img.value().attr("data-src").map(str::to_string),
                        img.value().attr("data-fallback").map(str::to_string),
                    )
                })
                .unwrap_or_default();

            Ok(item.with_thumbnail(primary, fallback))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE HTML>
<html><body>
<div class="papers-grid">
  <div class="donate-box">not a paper</div>
  <div class="paper-row" data-id="p1" data-title="Deep Learning" data-authors="Smith" data-year="2020" data-tags='["ml", "Year 2020"]'>
    <div class="paper-card">
      <div class="paper-thumbnail">
        <img data-src="assets/thumbnails/p1.jpg" data-fallback="https://example.org/teaser.jpg" class="lazy"/>
      </div>
    </div>
  </div>
  <div class="paper-row" data-id="p2" data-title="Compilers" data-authors="Lee" data-year="N/A" data-tags='["pl"]'>
    <div class="paper-card"></div>
  </div>
</div>
</body></html>"#;

    #[test]
    fn test_parse_rows_in_document_order() {
        let items = parse_html(PAGE).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "p1");
        assert_eq!(items[1].id, "p2");
        assert_eq!(items[0].tags, vec!["ml".to_string(), "Year 2020".to_string()]);
        assert_eq!(items[1].year, None);
    }

    #[test]
    fn test_parse_thumbnail_sources() {
        let items = parse_html(PAGE).unwrap();
        assert_eq!(items[0].thumbnail.as_deref(), Some("assets/thumbnails/p1.jpg"));
        assert_eq!(
            items[0].thumbnail_fallback.as_deref(),
            Some("https://example.org/teaser.jpg")
        );
        assert!(items[1].thumbnail.is_none());
    }

    #[test]
    fn test_missing_attribute() {
        let page = r#"<div class="paper-row" data-id="p1" data-authors="A" data-tags="[]"></div>"#;
        let err = parse_html(page).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingAttribute { index: 0, attribute: "data-title" }
        ));
    }

    #[test]
    fn test_page_without_rows() {
        assert!(parse_html("<html><body></body></html>").unwrap().is_empty());
    }
}
