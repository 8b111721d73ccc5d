//! UI layer
//!
//! Collaborators the page talks to, and the terminal front end that draws it.
//!
//! # Modules
//!
//! - **`output`** - Status messages with severity levels, printed or buffered
//! - **`clipboard`** - Writing the share link to the system clipboard
//! - **`ratatui_adapter`** - Interactive listing built on ratatui and crossterm
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Session                            │
//! │   (filters, selection, URL sync)        │
//! └────────────────┬────────────────────────┘
//!                  │ Reports through traits
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │  OutputWriter, Clipboard, AddressBar    │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ CLI           │  │ TUI               │
//! │ - Stdout      │  │ - StatusBarWriter │
//! │ - Memory*     │  │ - SystemClipboard │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Output Messages
//!
//! ```
//! use papershelf::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.success("Operation completed!");
//! output.error("Something went wrong");
//! output.warning("Be careful");
//! output.info("Additional info");
//! ```
//!
//! ## Buffered Messages for TUI
//!
//! ```
//! use papershelf::ui::output::{OutputWriter, StatusBarWriter};
//! use std::time::Duration;
//!
//! let writer = StatusBarWriter::with_ttl(Duration::from_secs(5));
//! writer.success("Copied!");
//! writer.alert("Please select at least one paper to share.");
//!
//! assert_eq!(writer.recent_messages().len(), 2);
//! assert_eq!(
//!     writer.take_alert().as_deref(),
//!     Some("Please select at least one paper to share.")
//! );
//! ```

mod error;

pub mod clipboard;
pub mod output;
pub mod ratatui_adapter;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, SystemClipboard};
pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StatusBarWriter, StdoutWriter};
