//! Browse command - interactive paper listing

use crate::{
    PapershelfError,
    catalog::Catalog,
    query,
    session::{MemoryAddressBar, Page, Session, SessionOptions},
    thumbnails::ThumbnailLoader,
    ui::{clipboard::SystemClipboard, output::StatusBarWriter, ratatui_adapter::RatatuiPage},
};
use colored::Colorize;
use std::path::Path;

type Result<T> = std::result::Result<T, PapershelfError>;

/// Session wired to the interactive page's collaborators
///
/// Thumbnails resolve relative to the catalog's directory. The returned page
/// shares the session's status writer, address bar and thumbnail cache.
///
/// # Errors
/// Returns an error if the configured base URL is invalid.
pub fn build_session(
    catalog_path: &Path,
    catalog: Catalog,
    url: Option<&str>,
    options: SessionOptions,
) -> Result<(Session, RatatuiPage)> {
    let status = StatusBarWriter::new();
    let address = MemoryAddressBar::new();
    let base_dir = catalog_path.parent().unwrap_or_else(|| Path::new("."));

    let thumbnails = ThumbnailLoader::new().with_base_dir(base_dir);

    let page = Page::new(
        Box::new(thumbnails.clone()),
        Box::new(address.clone()),
        Box::new(SystemClipboard::new()),
        Box::new(status.clone()),
    );
    let mut session = Session::new(catalog, options, page)?;
    if let Some(url) = url {
        session.hydrate(url);
    }

    let page = RatatuiPage::new(status, address).with_thumbnails(thumbnails);
    Ok((session, page))
}

/// Execute the browse command
///
/// Prints the page link for the final state when the page closes.
///
/// # Errors
/// Returns an error if the session cannot be created or the terminal fails.
pub fn execute(
    catalog_path: &Path,
    catalog: Catalog,
    url: Option<&str>,
    options: SessionOptions,
    quiet: bool,
) -> Result<()> {
    tracing::info!(catalog = %catalog_path.display(), papers = catalog.len(), "opening page");
    let (mut session, page) = build_session(catalog_path, catalog, url, options)?;

    page.run(&mut session)?;

    let link = query::page_link(&session.options().base_url, session.query())?;
    if quiet {
        println!("{link}");
    } else {
        println!("{}", session.view().badge().bold());
        println!("{link}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_catalog;
    use crate::ui::ratatui_adapter::PageUiState;
    use ratatui::{Terminal, backend::TestBackend};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_session_hydrates_url() {
        let (session, _page) = build_session(
            Path::new("/srv/papers/index.html"),
            sample_catalog(),
            Some("?year=2019"),
            SessionOptions::default(),
        )
        .unwrap();
        assert_eq!(session.view().visible_ids(), vec!["p2"]);
        assert_eq!(session.query(), "year=2019");
    }

    #[test]
    fn test_page_shows_fallback_thumbnail() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("thumbs")).unwrap();
        fs::write(dir.path().join("thumbs/teaser.jpg"), b"jpg").unwrap();
        let path = dir.path().join("index.html");
        fs::write(
            &path,
            r#"<div class="paper-row" data-id="p1" data-title="Deep Learning" data-authors="Smith" data-year="2020" data-tags='["ml"]'>
  <img data-src="thumbs/p1.jpg" data-fallback="thumbs/teaser.jpg" class="lazy"/>
</div>"#,
        )
        .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        let (session, page) =
            build_session(&path, catalog, None, SessionOptions::default()).unwrap();

        let mut state = PageUiState::new(session.catalog());
        state.sync(&session);
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|frame| page.render(frame, &mut state, &session))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let screen: String = (0..buffer.area.height)
            .flat_map(|y| (0..buffer.area.width).map(move |x| (x, y)))
            .map(|(x, y)| buffer[(x, y)].symbol())
            .collect();
        assert!(screen.contains("[img teaser.jpg (fallback)]"));
    }

    #[test]
    fn test_build_session_rejects_bad_base_url() {
        let options = SessionOptions {
            base_url: "not a url".into(),
            ..SessionOptions::default()
        };
        let result = build_session(Path::new("papers.json"), sample_catalog(), None, options);
        assert!(matches!(result, Err(PapershelfError::Query(_))));
    }
}
