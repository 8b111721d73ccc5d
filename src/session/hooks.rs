//! Page collaborators
//!
//! The session never talks to a terminal, a browser, or the system clipboard
//! directly. Everything it notifies goes through the handles bundled in
//! [`Page`].

use crate::thumbnails::{ImageLoader, NoopImages};
use crate::ui::clipboard::{Clipboard, MemoryClipboard};
use crate::ui::output::{OutputWriter, StatusBarWriter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Location of the page, rewritten in place after every state change
pub trait AddressBar: Send {
    /// Replace the current location's query part (`""` or `"?..."`)
    ///
    /// Replacing never adds a history entry.
    fn replace(&mut self, location: &str);
}

#[derive(Debug, Default)]
struct AddressHistory {
    location: String,
    writes: usize,
}

/// In-memory address bar, shareable between a host and its observer
#[derive(Debug, Clone, Default)]
pub struct MemoryAddressBar {
    inner: Arc<Mutex<AddressHistory>>,
}

impl MemoryAddressBar {
    /// Create an address bar with an empty query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current location, `""` or `"?query"`
    #[must_use]
    pub fn location(&self) -> String {
        self.lock().location.clone()
    }

    /// Current query without the leading `?`
    #[must_use]
    pub fn query(&self) -> String {
        let location = self.location();
        location.strip_prefix('?').unwrap_or(&location).to_string()
    }

    /// Number of times the location was replaced
    #[must_use]
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> MutexGuard<'_, AddressHistory> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AddressBar for MemoryAddressBar {
    fn replace(&mut self, location: &str) {
        let mut history = self.lock();
        history.location = location.to_string();
        history.writes += 1;
    }
}

/// Collaborators of a session
pub struct Page {
    /// Notified with the visible items after every refresh
    pub images: Box<dyn ImageLoader>,
    /// Receives the canonical location after every refresh
    pub address_bar: Box<dyn AddressBar>,
    /// Target of "copy share link"
    pub clipboard: Box<dyn Clipboard>,
    /// Receives alerts and status messages
    pub notifier: Box<dyn OutputWriter>,
}

impl Page {
    /// Page with explicit collaborators
    #[must_use]
    pub fn new(
        images: Box<dyn ImageLoader>,
        address_bar: Box<dyn AddressBar>,
        clipboard: Box<dyn Clipboard>,
        notifier: Box<dyn OutputWriter>,
    ) -> Self {
        Self {
            images,
            address_bar,
            clipboard,
            notifier,
        }
    }

    /// Page backed entirely by in-memory collaborators
    #[must_use]
    pub fn headless() -> Self {
        Self::new(
            Box::new(NoopImages),
            Box::new(MemoryAddressBar::new()),
            Box::new(MemoryClipboard::new()),
            Box::new(StatusBarWriter::new()),
        )
    }

    /// Replace the image loader
    #[must_use]
    pub fn with_images(mut self, images: impl ImageLoader + 'static) -> Self {
        self.images = Box::new(images);
        self
    }

    /// Replace the address bar
    #[must_use]
    pub fn with_address_bar(mut self, address_bar: impl AddressBar + 'static) -> Self {
        self.address_bar = Box::new(address_bar);
        self
    }

    /// Replace the clipboard
    #[must_use]
    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    /// Replace the notifier
    #[must_use]
    pub fn with_notifier(mut self, notifier: impl OutputWriter + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::headless()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_address_bar_shared() {
        let observer = MemoryAddressBar::new();
        let mut bar = observer.clone();

        bar.replace("?search=deep");
        bar.replace("");
        bar.replace("?year=2020");

        assert_eq!(observer.location(), "?year=2020");
        assert_eq!(observer.query(), "year=2020");
        assert_eq!(observer.writes(), 3);
    }
}
