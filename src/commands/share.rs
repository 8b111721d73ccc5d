//! Share command - build a link that opens the listing on a set of papers

use crate::{
    PapershelfError,
    catalog::Catalog,
    query::UrlState,
    session::{Command, EMPTY_SELECTION_ALERT, Page, Reaction, Session, SessionOptions, ShareOutcome},
    ui::{clipboard::Clipboard, output::StdoutWriter},
};

type Result<T> = std::result::Result<T, PapershelfError>;

/// Select `ids` on top of `state` and request the share link
///
/// Unknown identifiers are skipped. With `copy`, the link is also written to
/// `clipboard`; a clipboard failure is reported but still yields the link.
///
/// # Errors
/// Returns an error if the base URL is invalid or none of the identifiers exist.
pub fn share_link(
    catalog: Catalog,
    ids: &[String],
    state: &UrlState,
    options: SessionOptions,
    copy: bool,
    clipboard: impl Clipboard + 'static,
    quiet: bool,
) -> Result<ShareOutcome> {
    let page = Page::headless()
        .with_clipboard(clipboard)
        .with_notifier(StdoutWriter::quiet(quiet));
    let mut session = Session::new(catalog, options, page)?;

    let url = UrlState {
        filter: state.filter.clone(),
        selected: ids.to_vec(),
        show_selected: true,
    };
    session.hydrate(&url.encode());

    let command = if copy {
        Command::CopyShareLink
    } else {
        Command::RequestShare
    };
    match session.dispatch(command) {
        Reaction::Share(ShareOutcome::EmptySelection) => {
            Err(PapershelfError::InvalidInput(EMPTY_SELECTION_ALERT.into()))
        }
        Reaction::Share(outcome) => Ok(outcome),
        other => Err(PapershelfError::InvalidInput(format!(
            "Unexpected response to share request: {other:?}"
        ))),
    }
}

/// Execute the share command
///
/// # Errors
/// Returns an error if the link cannot be built.
pub fn execute(
    catalog: Catalog,
    ids: &[String],
    state: &UrlState,
    options: SessionOptions,
    copy: bool,
    clipboard: impl Clipboard + 'static,
    quiet: bool,
) -> Result<()> {
    let outcome = share_link(catalog, ids, state, options, copy, clipboard, quiet)?;
    if let Some(link) = outcome.link() {
        println!("{link}");
    }
    Ok(())
}
