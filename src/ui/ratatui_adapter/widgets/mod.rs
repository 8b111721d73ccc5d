//! Ratatui widgets for the paper listing
//!
//! Custom widgets for rendering the page.

mod chip_row;
mod help_bar;
mod help_overlay;
mod item_list;
mod search_bar;
mod selection_panel;
mod share_dialog;
mod status_bar;
mod tag_bar;
mod year_list;

pub use chip_row::ChipRow;
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use item_list::ItemList;
pub use search_bar::SearchBar;
pub use selection_panel::SelectionPanel;
pub use share_dialog::{AlertDialog, ShareDialog};
pub use status_bar::StatusBar;
pub use tag_bar::TagBar;
pub use year_list::YearList;
