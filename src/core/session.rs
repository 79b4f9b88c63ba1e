//! Session context owned by the dispatcher.
//!
//! Bundles every piece of mutable terminal state into one explicitly
//! constructed object so tests can build a fresh session instead of
//! resetting hidden module state. Persistence of the logs and theme is
//! not the session's concern; the store layer mirrors them to
//! localStorage whenever the session changes.

use crate::config::{APP_NAME, USERNAME};
use crate::core::filesystem::Filesystem;
use crate::core::hangman::HangmanGame;
use crate::models::{HistoryEntry, Theme};

/// Mutable terminal session state.
#[derive(Clone, Debug)]
pub struct Session {
    /// Virtual filesystem, including the current-directory cursor.
    pub fs: Filesystem,
    /// Scrollback: one entry per executed command (plus suggestion entries).
    pub output_history: Vec<HistoryEntry>,
    /// Raw command lines for up/down recall, oldest first, deduplicated
    /// by move-to-end.
    pub command_log: Vec<String>,
    /// Active color theme.
    pub theme: Theme,
    /// Hangman game in progress, if any.
    pub hangman: Option<HangmanGame>,
    /// Session start in milliseconds since the epoch (for uptime).
    pub started_at_ms: f64,
}

impl Session {
    /// Create a fresh session with the seeded filesystem and defaults.
    pub fn new() -> Self {
        Self {
            fs: Filesystem::seeded(),
            output_history: Vec::new(),
            command_log: Vec::new(),
            theme: Theme::default(),
            hangman: None,
            started_at_ms: 0.0,
        }
    }

    /// Append an entry to the scrollback.
    pub fn push_entry(&mut self, entry: HistoryEntry) {
        self.output_history.push(entry);
    }

    /// Record an executed command line for recall.
    ///
    /// Re-entering an identical string moves it to the end instead of
    /// storing a duplicate.
    pub fn record_command(&mut self, command: &str) {
        self.command_log.retain(|c| c != command);
        self.command_log.push(command.to_string());
    }

    /// Prompt string for display: `guest@termy:<cwd>`.
    pub fn prompt(&self) -> String {
        let cwd = self.fs.absolute_path(".", self.fs.current());
        format!("{}@{}:{}", USERNAME, APP_NAME, cwd)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_command_deduplicates_by_move_to_end() {
        let mut session = Session::new();
        session.record_command("ls");
        session.record_command("pwd");
        session.record_command("ls");
        assert_eq!(session.command_log, vec!["pwd".to_string(), "ls".to_string()]);
    }

    #[test]
    fn test_record_same_command_twice() {
        let mut session = Session::new();
        session.record_command("ls");
        session.record_command("ls");
        assert_eq!(session.command_log, vec!["ls".to_string()]);
    }

    #[test]
    fn test_prompt_tracks_cwd() {
        let mut session = Session::new();
        assert_eq!(session.prompt(), "guest@termy:~");
        assert!(session.fs.change_directory("projects"));
        assert_eq!(session.prompt(), "guest@termy:~/projects");
    }
}
