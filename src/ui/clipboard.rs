//! Clipboard collaborator
//!
//! Writing to the clipboard may fail (no display server, denied access). The
//! caller turns a failure into an alert; it never changes page state.

use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

/// Errors that can occur while writing to the clipboard
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The system clipboard could not be opened
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard refused the text
    #[error("Clipboard error: {0}")]
    Rejected(String),
}

/// Write-text clipboard operation
pub trait Clipboard: Send {
    /// Replace the clipboard contents with `text`
    ///
    /// # Errors
    ///
    /// Returns `ClipboardError` if the clipboard cannot be opened or written.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by `arboard`
///
/// A fresh handle is opened for every write; on X11 the contents stay
/// available only while some handle is alive, so the last one is kept.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Create a clipboard that connects on first write
    #[must_use]
    pub const fn new() -> Self {
        Self { handle: None }
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = match self.handle.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?,
        };
        let result = clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Rejected(e.to_string()));
        self.handle = Some(clipboard);
        result
    }
}

/// In-memory clipboard, shareable between a host and its observer
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
    reject: bool,
}

impl MemoryClipboard {
    /// Create an empty clipboard that accepts writes
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard that rejects every write
    #[must_use]
    pub fn rejecting() -> Self {
        Self {
            contents: Arc::default(),
            reject: true,
        }
    }

    /// Last text written, if any
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.reject {
            return Err(ClipboardError::Rejected("write denied".to_string()));
        }
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_string());
        Ok(())
    }
}
