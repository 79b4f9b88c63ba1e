//! Core terminal logic, independent of the UI layer.
//!
//! Everything here except the `weather` handler is free of browser
//! dependencies and unit-tested on the host:
//!
//! - [`filesystem`] - arena-backed virtual filesystem
//! - [`registry`] - command registry and handler contract
//! - [`commands`] - the built-in command set
//! - [`dispatch`] - input line state machine (Tab/Enter/arrows)
//! - [`autocomplete`] - prefix completion over command names
//! - [`calc`] / [`hangman`] - evaluator and game machinery
//! - [`session`] - the mutable state bundle commands operate on

pub mod autocomplete;
pub mod calc;
pub mod commands;
pub mod dispatch;
pub mod error;
pub mod filesystem;
pub mod hangman;
pub mod registry;
pub mod session;

pub use dispatch::{InputLine, PendingCommand};
pub use registry::{CommandOutput, Registry};
pub use session::Session;
