//! Ratatui front end for the paper listing
//!
//! Draws a [`Session`](crate::session::Session) in the terminal and turns key
//! presses into session commands.
//!
//! # Layout
//!
//! ```text
//! ┌ Search ───────────────────────────────────────────┐
//! └───────────────────────────────────────────────────┘
//! ┌ Active Filters ───────────────────────────────────┐
//! └───────────────────────────────────────────────────┘
//! ┌ Showing X of Y papers ──────────┐┌ Tags ──────────┐
//! │                                 │└────────────────┘
//! │                                 │┌ Year ──────────┐
//! │                                 │└────────────────┘
//! │                                 │┌ N selected ────┐
//! └─────────────────────────────────┘└────────────────┘
//! ┌ Status ───────────────────────────────── ?query ──┐
//! └───────────────────────────────────────────────────┘
//!  key hints
//! ```
//!
//! The selection panel is only drawn while selection mode is on.

mod events;
mod page;
mod state;
mod theme;
pub mod widgets;

pub use events::{EventResult, handle_key};
pub use page::{FRAME_INTERVAL, RatatuiPage, poll_timeout};
pub use state::{Focus, ListCursor, Mode, PageUiState};
pub use theme::Theme;
