//! Integration tests for papershelf
//!
//! These tests load catalogs from temporary files and drive complete page
//! workflows through the public session API.

use papershelf::catalog::Catalog;
use papershelf::commands::{filter, normalize, share};
use papershelf::filter::{TagState, YearFilter};
use papershelf::query::{self, UrlState};
use papershelf::render::{ChipKey, ChipRemoval};
use papershelf::selection::ExitSelection;
use papershelf::session::{
    Command, MemoryAddressBar, Page, Reaction, Session, SessionOptions, ShareOutcome,
};
use papershelf::ui::clipboard::MemoryClipboard;
use papershelf::ui::output::StatusBarWriter;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tempfile::TempDir;

const PAGE: &str = r#"<!DOCTYPE HTML>
<html><body>
<div class="papers-grid">
  <div class="paper-row" data-id="p1" data-title="Deep Learning" data-authors="Smith" data-year="2020" data-tags='["ml"]'>
    <img data-src="thumbs/p1.jpg" class="lazy"/>
  </div>
  <div class="paper-row" data-id="p2" data-title="Compilers" data-authors="Lee" data-year="2019" data-tags='["pl"]'>
  </div>
</div>
</body></html>"#;

const JSON: &str = r#"[
  {"id": "p1", "title": "Deep Learning", "authors": "Smith", "year": 2020, "tags": ["ml"]},
  {"id": "p2", "title": "Compilers", "authors": "Lee", "year": 2019, "tags": ["pl"]}
]"#;

const TOML: &str = r#"
[[papers]]
id = "p1"
title = "Deep Learning"
authors = "Smith"
year = 2020
tags = ["ml"]

[[papers]]
id = "p2"
title = "Compilers"
authors = "Lee"
year = 2019
tags = ["pl"]
"#;

/// Helper function to write a catalog file into a temporary directory
fn write_catalog(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn sample() -> Catalog {
    let dir = TempDir::new().unwrap();
    Catalog::load(write_catalog(&dir, "papers.json", JSON)).unwrap()
}

struct Harness {
    session: Session,
    address: MemoryAddressBar,
    clipboard: MemoryClipboard,
    status: StatusBarWriter,
}

fn harness_with(options: SessionOptions) -> Harness {
    let address = MemoryAddressBar::new();
    let clipboard = MemoryClipboard::new();
    let status = StatusBarWriter::new();
    let page = Page::headless()
        .with_address_bar(address.clone())
        .with_clipboard(clipboard.clone())
        .with_notifier(status.clone());
    Harness {
        session: Session::new(sample(), options, page).unwrap(),
        address,
        clipboard,
        status,
    }
}

fn harness() -> Harness {
    harness_with(SessionOptions::default())
}

#[test]
fn test_catalog_formats_agree() {
    let dir = TempDir::new().unwrap();
    let from_json = Catalog::load(write_catalog(&dir, "papers.json", JSON)).unwrap();
    let from_toml = Catalog::load(write_catalog(&dir, "papers.toml", TOML)).unwrap();
    let from_html = Catalog::load(write_catalog(&dir, "index.html", PAGE)).unwrap();

    for catalog in [&from_json, &from_toml, &from_html] {
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.tag_vocabulary(), ["ml", "pl"]);
        assert_eq!(catalog.years(), [2020, 2019]);
    }
    assert_eq!(
        from_html.get("p1").and_then(|item| item.thumbnail.as_deref()),
        Some("thumbs/p1.jpg")
    );
}

#[test]
fn test_unsupported_catalog_format() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "papers.csv", "id,title\n");
    assert!(Catalog::load(path).is_err());
}

#[test]
fn test_search_filters_and_writes_address_bar() {
    let mut h = harness();
    let reaction = h.session.dispatch(Command::SetSearch("deep".into()));

    assert_eq!(reaction, Reaction::Refreshed);
    assert_eq!(h.session.view().visible_ids(), vec!["p1"]);
    assert_eq!(h.session.view().badge(), "Showing 1 of 2 papers");
    assert_eq!(h.address.location(), "?search=deep");
}

#[test]
fn test_tag_cycle_and_chip_removal() {
    let mut h = harness();
    h.session.dispatch(Command::CycleTag("ml".into()));
    assert_eq!(h.session.filter().tag_state("ml"), TagState::Include);
    assert_eq!(h.session.view().visible_ids(), vec!["p1"]);

    h.session.dispatch(Command::CycleTag("ml".into()));
    assert_eq!(h.session.filter().tag_state("ml"), TagState::Exclude);
    assert_eq!(h.session.view().visible_ids(), vec!["p2"]);
    assert_eq!(h.address.query(), "exclude=ml");

    h.session
        .dispatch(Command::RemoveChip(ChipKey::Tag("ml".into())));
    assert_eq!(h.session.filter().tag_state("ml"), TagState::Neutral);
    assert_eq!(h.session.view().visible_count, 2);
    assert_eq!(h.address.location(), "");
}

#[test]
fn test_chip_removal_cycle_policy() {
    let mut h = harness_with(SessionOptions {
        chip_removal: ChipRemoval::Cycle,
        ..SessionOptions::default()
    });
    h.session.dispatch(Command::CycleTag("ml".into()));
    h.session
        .dispatch(Command::RemoveChip(ChipKey::Tag("ml".into())));
    assert_eq!(h.session.filter().tag_state("ml"), TagState::Exclude);
}

#[test]
fn test_selection_and_show_selected() {
    let mut h = harness();
    h.session.dispatch(Command::ToggleSelectionMode);
    h.session.dispatch(Command::ToggleItem("p2".into()));
    h.session.dispatch(Command::SetSearch("deep".into()));

    assert_eq!(h.session.view().visible_ids(), vec!["p1"]);
    assert_eq!(h.session.view().selection_counter, "1 paper selected");

    h.session.dispatch(Command::ToggleShowSelected);
    assert_eq!(h.session.view().visible_ids(), vec!["p2"]);
    assert_eq!(
        h.address.query(),
        "search=deep&selected=p2&show_selected=true"
    );
}

#[test]
fn test_exit_selection_policies() {
    let mut keep = harness();
    keep.session.dispatch(Command::ToggleSelectionMode);
    keep.session.dispatch(Command::ToggleItem("p1".into()));
    keep.session.dispatch(Command::ToggleSelectionMode);
    assert_eq!(keep.session.selection().selected(), ["p1"]);

    let mut clear = harness_with(SessionOptions {
        exit_selection: ExitSelection::Clear,
        ..SessionOptions::default()
    });
    clear.session.dispatch(Command::ToggleSelectionMode);
    clear.session.dispatch(Command::ToggleItem("p1".into()));
    clear.session.dispatch(Command::ToggleSelectionMode);
    assert!(clear.session.selection().is_empty());
}

#[test]
fn test_share_and_copy() {
    let mut h = harness();
    let reaction = h.session.dispatch(Command::RequestShare);
    assert_eq!(reaction, Reaction::Share(ShareOutcome::EmptySelection));
    assert_eq!(
        h.status.take_alert().as_deref(),
        Some("Please select at least one paper to share.")
    );

    h.session.dispatch(Command::ToggleSelectionMode);
    h.session.dispatch(Command::ToggleItem("p2".into()));
    h.session.dispatch(Command::ToggleItem("p1".into()));
    let reaction = h.session.dispatch(Command::CopyShareLink);

    let expected = "https://localhost/?selected=p2%2Cp1&show_selected=true";
    assert_eq!(reaction, Reaction::Share(ShareOutcome::Copied(expected.into())));
    assert_eq!(h.clipboard.contents().as_deref(), Some(expected));
}

#[test]
fn test_copy_failure_alerts() {
    let status = StatusBarWriter::new();
    let page = Page::headless()
        .with_clipboard(MemoryClipboard::rejecting())
        .with_notifier(status.clone());
    let mut session = Session::new(sample(), SessionOptions::default(), page).unwrap();
    session.dispatch(Command::ToggleSelectionMode);
    session.dispatch(Command::ToggleItem("p1".into()));

    let reaction = session.dispatch(Command::CopyShareLink);
    assert!(matches!(reaction, Reaction::Share(ShareOutcome::CopyFailed(_))));
    assert_eq!(
        status.take_alert().as_deref(),
        Some("Failed to copy link. Please copy manually.")
    );
}

#[test]
fn test_shared_link_reopens_same_view() {
    let mut h = harness();
    h.session.dispatch(Command::SetYear(YearFilter::Year(2019)));
    h.session.dispatch(Command::ToggleSelectionMode);
    h.session.dispatch(Command::ToggleItem("p2".into()));
    let link = h.session.share_link().unwrap();

    let mut reopened = harness();
    reopened.session.hydrate(&link);
    assert_eq!(reopened.session.filter().year, YearFilter::Year(2019));
    assert!(reopened.session.selection().is_active());
    assert!(reopened.session.selection().show_only_selected());
    assert_eq!(reopened.session.view().visible_ids(), vec!["p2"]);
    assert_eq!(reopened.address.query(), query::normalize(&link));
}

#[test]
fn test_selected_only_link_keeps_full_listing() {
    let mut h = harness();
    h.session.hydrate("?selected=p2");

    assert!(h.session.selection().is_active());
    assert_eq!(h.session.selection().selected(), ["p2"]);
    assert!(!h.session.selection().show_only_selected());
    assert_eq!(h.session.view().visible_ids(), vec!["p1", "p2"]);
    assert_eq!(h.session.query(), "selected=p2");
}

#[test]
fn test_hydrate_ignores_malformed_parameters() {
    let mut h = harness();
    h.session
        .hydrate("?year=soon&include=&selected=ghost,p1&show_selected=maybe");
    assert_eq!(h.session.filter().year, YearFilter::All);
    assert_eq!(h.session.selection().selected(), ["p1"]);
    assert!(!h.session.selection().show_only_selected());
}

#[test]
fn test_debounced_search_commits_last_term() {
    let mut h = harness();
    let start = Instant::now();
    h.session.type_search("c", start);
    h.session.type_search("co", start + Duration::from_millis(50));
    h.session.type_search("comp", start + Duration::from_millis(100));

    assert!(!h.session.tick(start + Duration::from_millis(200)));
    assert_eq!(h.session.evaluation_count(), 1);

    assert!(h.session.tick(start + Duration::from_millis(260)));
    assert_eq!(h.session.evaluation_count(), 2);
    assert_eq!(h.session.view().visible_ids(), vec!["p2"]);
    assert_eq!(h.address.writes(), 1);
}

#[test]
fn test_pending_search_is_flushed_before_other_commands() {
    let mut h = harness();
    h.session.type_search("deep", Instant::now());
    h.session.dispatch(Command::CycleTag("ml".into()));

    assert_eq!(h.session.filter().search, "deep");
    assert_eq!(h.session.query(), "search=deep&include=ml");
}

#[test]
fn test_filter_command_evaluates_url_state() {
    let state = UrlState::decode("?search=compilers&selected=p1&show_selected=true");
    let session = filter::evaluate(sample(), &state, SessionOptions::default(), true).unwrap();
    assert_eq!(session.view().visible_ids(), vec!["p1"]);
}

#[test]
fn test_share_command_builds_link() {
    let outcome = share::share_link(
        sample(),
        &["p1".to_string()],
        &UrlState::decode("include=ml"),
        SessionOptions {
            base_url: "https://example.org/papers/".into(),
            ..SessionOptions::default()
        },
        false,
        MemoryClipboard::new(),
        true,
    )
    .unwrap();
    assert_eq!(
        outcome.link(),
        Some("https://example.org/papers/?include=ml&selected=p1&show_selected=true")
    );
}

#[test]
fn test_normalize_command() {
    assert_eq!(
        normalize::canonical("https://example.org/?year=2020&search=deep&year=all"),
        "?search=deep&year=2020"
    );
    assert_eq!(normalize::canonical("?year=all&show_selected=false"), "");
}
