//! Input line state machine: editing, tab completion, history recall,
//! and command dispatch.
//!
//! The state machine is synchronous; the only suspension point is an
//! asynchronous handler, which is returned to the caller as a
//! [`PendingCommand`] to await. By the time a command runs, the buffer
//! and cursor have already been reset, so a pending handler never
//! touches the live input line.

use std::future::Future;
use std::pin::Pin;

use crate::core::autocomplete::{self, Completion};
use crate::core::registry::{CommandOutput, Registry};
use crate::core::session::Session;
use crate::models::HistoryEntry;

/// A command whose handler suspended. The caller awaits `future` and
/// appends `HistoryEntry::new(command, output)` to the scrollback when
/// it resolves.
pub struct PendingCommand {
    pub command: String,
    pub future: Pin<Box<dyn Future<Output = String>>>,
}

/// The live input line plus history-recall cursor.
#[derive(Clone, Debug, Default)]
pub struct InputLine {
    /// Text currently being edited.
    pub buffer: String,
    /// Position in the command log while recalling, `None` when
    /// past-the-end (not navigating).
    cursor: Option<usize>,
    /// Buffer snapshot taken when recall navigation starts, restored
    /// when the cursor returns past-the-end.
    saved: String,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the buffer from a direct edit. Any in-progress history
    /// navigation is abandoned.
    pub fn edit(&mut self, value: &str) {
        self.buffer = value.to_string();
        self.cursor = None;
    }

    /// Tab: complete the buffer against the registered names. When the
    /// candidates cannot be narrowed further, a suggestion entry is
    /// appended to the scrollback instead.
    pub fn press_tab(&mut self, registry: &Registry, session: &mut Session) {
        match autocomplete::complete(&self.buffer, &registry.names()) {
            Completion::Replace(value) => self.buffer = value,
            Completion::Suggest(matches) => {
                session.push_entry(HistoryEntry::suggestion(&self.buffer, &matches));
            }
            Completion::None => {}
        }
    }

    /// Enter: dispatch the buffer as a command line.
    ///
    /// An empty buffer is ignored. Otherwise the raw line is recorded
    /// for recall, tokenized on whitespace, and looked up in the
    /// registry. A synchronous result is appended to the scrollback
    /// immediately; an asynchronous one is handed back as a
    /// [`PendingCommand`]. The buffer and cursor are reset regardless.
    pub fn press_enter(
        &mut self,
        registry: &Registry,
        session: &mut Session,
    ) -> Option<PendingCommand> {
        let line = std::mem::take(&mut self.buffer);
        self.cursor = None;
        self.saved.clear();

        if line.trim().is_empty() {
            return None;
        }

        session.record_command(&line);

        let mut tokens = line.split_whitespace().map(str::to_string);
        let name = tokens.next()?;
        let args: Vec<String> = tokens.collect();

        match registry.invoke(&name, session, &args) {
            Some(CommandOutput::Ready(output)) => {
                session.push_entry(HistoryEntry::new(&line, output));
                None
            }
            Some(CommandOutput::Deferred(future)) => Some(PendingCommand {
                command: line,
                future,
            }),
            None => {
                session.push_entry(HistoryEntry::new(
                    &line,
                    format!("{name}: command not found"),
                ));
                None
            }
        }
    }

    /// ArrowUp: step toward the oldest logged command, clamped at the
    /// start. The first step snapshots the buffer for later restore.
    pub fn press_arrow_up(&mut self, session: &Session) {
        let log = &session.command_log;
        if log.is_empty() {
            return;
        }

        let next = match self.cursor {
            None => {
                self.saved = self.buffer.clone();
                log.len() - 1
            }
            // The log may have shrunk underneath us (history -c).
            Some(i) if i >= log.len() => log.len() - 1,
            Some(0) => 0,
            Some(i) => i - 1,
        };

        self.cursor = Some(next);
        self.buffer = log[next].clone();
    }

    /// ArrowDown: step back toward past-the-end; on leaving the log,
    /// restore the buffer the user had typed before navigating.
    pub fn press_arrow_down(&mut self, session: &Session) {
        let log = &session.command_log;
        let Some(i) = self.cursor else {
            return;
        };

        if i + 1 < log.len() {
            self.cursor = Some(i + 1);
            self.buffer = log[i + 1].clone();
        } else {
            self.cursor = None;
            self.buffer = std::mem::take(&mut self.saved);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::{ready, CommandSpec};

    fn test_registry() -> Registry {
        let mut registry = Registry::new();
        for name in ["help", "ls", "list", "listdir", "cd", "cat", "clear", "banner"] {
            registry.register(CommandSpec::new(name, "test command", move |_, _, _| {
                ready(format!("{name} output"))
            }));
        }
        registry
    }

    #[test]
    fn test_tab_single_match_completes_with_space() {
        let registry = test_registry();
        let mut session = Session::new();
        let mut input = InputLine::new();
        input.edit("he");
        input.press_tab(&registry, &mut session);
        assert_eq!(input.buffer, "help ");
        assert!(session.output_history.is_empty());
    }

    #[test]
    fn test_tab_extends_then_suggests() {
        let registry = test_registry();
        let mut session = Session::new();
        let mut input = InputLine::new();
        input.edit("lis");

        input.press_tab(&registry, &mut session);
        assert_eq!(input.buffer, "list");
        assert!(session.output_history.is_empty());

        input.press_tab(&registry, &mut session);
        assert_eq!(input.buffer, "list");
        let entry = session.output_history.last().unwrap();
        assert!(entry.is_suggestion);
        assert!(entry.outputs[0].contains("list"));
        assert!(entry.outputs[0].contains("listdir"));
    }

    #[test]
    fn test_enter_known_command_appends_entry_and_clears() {
        let registry = test_registry();
        let mut session = Session::new();
        let mut input = InputLine::new();
        input.edit("ls");

        assert!(input.press_enter(&registry, &mut session).is_none());
        assert_eq!(input.buffer, "");
        let entry = session.output_history.last().unwrap();
        assert_eq!(entry.command, "ls");
        assert_eq!(entry.outputs, vec!["ls output".to_string()]);
        assert_eq!(session.command_log, vec!["ls".to_string()]);
    }

    #[test]
    fn test_enter_unknown_command() {
        let registry = test_registry();
        let mut session = Session::new();
        let mut input = InputLine::new();
        input.edit("unknowncmd");

        input.press_enter(&registry, &mut session);
        let entry = session.output_history.last().unwrap();
        assert_eq!(entry.command, "unknowncmd");
        assert_eq!(entry.outputs, vec!["unknowncmd: command not found".to_string()]);
    }

    #[test]
    fn test_enter_empty_buffer_is_noop() {
        let registry = test_registry();
        let mut session = Session::new();
        let mut input = InputLine::new();

        input.press_enter(&registry, &mut session);
        assert!(session.output_history.is_empty());
        assert!(session.command_log.is_empty());
    }

    #[test]
    fn test_arrow_up_clamps_at_oldest() {
        let mut session = Session::new();
        for cmd in ["cmd1", "cmd2", "cmd3"] {
            session.record_command(cmd);
        }
        let mut input = InputLine::new();

        let mut seen = Vec::new();
        for _ in 0..4 {
            input.press_arrow_up(&session);
            seen.push(input.buffer.clone());
        }
        assert_eq!(seen, vec!["cmd3", "cmd2", "cmd1", "cmd1"]);
    }

    #[test]
    fn test_arrow_down_returns_to_saved_buffer() {
        let mut session = Session::new();
        for cmd in ["cmd1", "cmd2", "cmd3"] {
            session.record_command(cmd);
        }
        let mut input = InputLine::new();
        input.edit("draft");

        for _ in 0..3 {
            input.press_arrow_up(&session);
        }
        assert_eq!(input.buffer, "cmd1");

        input.press_arrow_down(&session);
        assert_eq!(input.buffer, "cmd2");
        input.press_arrow_down(&session);
        assert_eq!(input.buffer, "cmd3");
        input.press_arrow_down(&session);
        assert_eq!(input.buffer, "draft");
        input.press_arrow_down(&session);
        assert_eq!(input.buffer, "draft");
    }

    #[test]
    fn test_arrow_up_noop_on_empty_log() {
        let session = Session::new();
        let mut input = InputLine::new();
        input.edit("typed");
        input.press_arrow_up(&session);
        assert_eq!(input.buffer, "typed");
    }

    #[test]
    fn test_cursor_survives_log_shrink() {
        let mut session = Session::new();
        for cmd in ["cmd1", "cmd2", "cmd3"] {
            session.record_command(cmd);
        }
        let mut input = InputLine::new();
        input.press_arrow_up(&session);
        input.press_arrow_up(&session);

        session.command_log.truncate(1);
        input.press_arrow_up(&session);
        assert_eq!(input.buffer, "cmd1");
    }

    #[test]
    fn test_edit_abandons_navigation() {
        let mut session = Session::new();
        session.record_command("cmd1");
        let mut input = InputLine::new();
        input.press_arrow_up(&session);
        assert_eq!(input.buffer, "cmd1");

        input.edit("fresh");
        input.press_arrow_up(&session);
        assert_eq!(input.buffer, "cmd1");
        input.press_arrow_down(&session);
        assert_eq!(input.buffer, "fresh");
    }

    #[tokio::test]
    async fn test_deferred_command_resolves_after_dispatch() {
        let mut registry = Registry::new();
        registry.register(CommandSpec::new("slow", "async test", |_, _, _| {
            CommandOutput::Deferred(Box::pin(async { "slow output".to_string() }))
        }));
        let mut session = Session::new();
        let mut input = InputLine::new();
        input.edit("slow");

        let pending = input.press_enter(&registry, &mut session).unwrap();
        assert_eq!(input.buffer, "");
        assert!(session.output_history.is_empty());

        let output = pending.future.await;
        session.push_entry(HistoryEntry::new(&pending.command, output));
        assert_eq!(session.output_history[0].outputs, vec!["slow output".to_string()]);
    }
}
