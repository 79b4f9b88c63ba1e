//! Persistence for the scrollback and the entered-command log.

use crate::config::storage_keys;
use crate::models::HistoryEntry;

/// Restore the scrollback from localStorage, empty if absent.
pub fn load_output_history() -> Vec<HistoryEntry> {
    super::load_json(storage_keys::HISTORY).unwrap_or_default()
}

/// Persist the scrollback.
pub fn save_output_history(entries: &[HistoryEntry]) {
    super::save_json(storage_keys::HISTORY, &entries);
}

/// Restore the entered-command log from localStorage, empty if absent.
pub fn load_command_log() -> Vec<String> {
    super::load_json(storage_keys::ENTERED_COMMANDS).unwrap_or_default()
}

/// Persist the entered-command log.
pub fn save_command_log(commands: &[String]) {
    super::save_json(storage_keys::ENTERED_COMMANDS, &commands);
}
