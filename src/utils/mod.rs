//! Browser-facing utility modules.
//!
//! Provides:
//! - [`dom`] - safe access to window, storage, and document APIs
//! - [`fetch_text`], [`race_with_timeout`] - network fetching with timeout

pub mod dom;
mod fetch;

pub use fetch::{fetch_text, race_with_timeout, RaceResult};
