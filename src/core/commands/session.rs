//! Session commands: `history`, `theme`, `clear`, `exit`.

use crate::config::REPO_URL;
use crate::core::registry::{ready, CommandSpec, Registry};
use crate::models::{theme_catalog, Theme};

const THEME_USAGE: &str = "Usage: theme [args].
[args]:
  ls: list all available themes
  set: set theme to [theme]

[Examples]:
  theme ls
  theme set gruvboxdark";

pub fn register(registry: &mut Registry) {
    registry.register(
        CommandSpec::new("history", "show entered command history", |_, session, args| {
            if args.first().map(String::as_str) == Some("-c") {
                session.command_log.clear();
                return ready("");
            }

            if session.command_log.is_empty() {
                return ready("No history yet.");
            }

            // Index column is at least 2 wide, widening to fit.
            let width = session.command_log.len().to_string().len().max(2);
            let lines: Vec<String> = session
                .command_log
                .iter()
                .enumerate()
                .map(|(i, cmd)| format!("{:>width$}  {}", i + 1, cmd))
                .collect();
            ready(lines.join("\n"))
        })
        .with_usage("history [-c]"),
    );

    registry.register(
        CommandSpec::new("theme", "list or set the color theme", |_, session, args| {
            match args.first().map(String::as_str) {
                Some("ls") => {
                    let names: Vec<String> = theme_catalog()
                        .iter()
                        .map(|t| t.name.to_lowercase())
                        .collect();
                    ready(format!(
                        "{}\nYou can preview all these themes here: {}/tree/master/docs/themes",
                        names.join(", "),
                        REPO_URL
                    ))
                }
                Some("set") => {
                    if args.len() != 2 {
                        return ready(THEME_USAGE);
                    }
                    let name = &args[1];
                    match Theme::find(name) {
                        Some(theme) => {
                            session.theme = theme.clone();
                            ready(format!("Theme set to {name}"))
                        }
                        None => ready(format!(
                            "Theme '{name}' not found. Try 'theme ls' to see all available themes."
                        )),
                    }
                }
                _ => ready(THEME_USAGE),
            }
        })
        .with_usage("theme ls|set <name>"),
    );

    registry.register(CommandSpec::new(
        "clear",
        "clear the terminal output",
        |_, session, _| {
            session.output_history.clear();
            ready("")
        },
    ));

    registry.register(CommandSpec::new("exit", "exit the terminal", |_, _, _| {
        ready("Please close the tab to exit.")
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::CommandOutput;
    use crate::core::session::Session;
    use crate::models::HistoryEntry;

    fn run(session: &mut Session, name: &str, args: &[&str]) -> String {
        let mut registry = Registry::new();
        register(&mut registry);
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        match registry.invoke(name, session, &args) {
            Some(CommandOutput::Ready(out)) => out,
            _ => panic!("expected ready output from {name}"),
        }
    }

    #[test]
    fn test_history_empty() {
        let mut session = Session::new();
        assert_eq!(run(&mut session, "history", &[]), "No history yet.");
    }

    #[test]
    fn test_history_pads_indices_to_two() {
        let mut session = Session::new();
        session.record_command("ls");
        session.record_command("pwd");
        assert_eq!(run(&mut session, "history", &[]), " 1  ls\n 2  pwd");
    }

    #[test]
    fn test_history_widens_past_nine_entries() {
        let mut session = Session::new();
        for i in 0..12 {
            session.record_command(&format!("cmd{i}"));
        }
        let out = run(&mut session, "history", &[]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], " 1  cmd0");
        assert_eq!(lines[11], "12  cmd11");
    }

    #[test]
    fn test_history_clear() {
        let mut session = Session::new();
        session.record_command("ls");
        assert_eq!(run(&mut session, "history", &["-c"]), "");
        assert!(session.command_log.is_empty());
    }

    #[test]
    fn test_theme_no_args_is_usage() {
        let mut session = Session::new();
        assert!(run(&mut session, "theme", &[]).starts_with("Usage: theme"));
    }

    #[test]
    fn test_theme_ls_lists_lowercased_names() {
        let mut session = Session::new();
        let out = run(&mut session, "theme", &["ls"]);
        assert!(out.contains("dracula"));
        assert!(out.contains("You can preview all these themes here:"));
    }

    #[test]
    fn test_theme_set_is_case_insensitive() {
        let mut session = Session::new();
        let out = run(&mut session, "theme", &["set", "GruvboxDark"]);
        assert_eq!(out, "Theme set to GruvboxDark");
        assert!(session.theme.name.eq_ignore_ascii_case("gruvboxdark"));
    }

    #[test]
    fn test_theme_set_unknown() {
        let mut session = Session::new();
        let out = run(&mut session, "theme", &["set", "nope"]);
        assert!(out.starts_with("Theme 'nope' not found."));
    }

    #[test]
    fn test_theme_set_without_name_is_usage() {
        let mut session = Session::new();
        assert!(run(&mut session, "theme", &["set"]).starts_with("Usage: theme"));
    }

    #[test]
    fn test_clear_empties_scrollback() {
        let mut session = Session::new();
        session.push_entry(HistoryEntry::new("ls", "output"));
        assert_eq!(run(&mut session, "clear", &[]), "");
        assert!(session.output_history.is_empty());
    }
}
