//! UI components built with Leptos.
//!
//! - [`terminal`] - the terminal emulator interface

pub mod terminal;

pub use terminal::Terminal;
