//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`HistoryEntry`] - one record of the terminal scrollback
//! - [`Theme`] - a named terminal color palette

mod history;
mod theme;

pub use history::HistoryEntry;
pub use theme::{Theme, theme_catalog};
