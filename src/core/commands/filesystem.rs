//! Filesystem commands: `ls`, `cd`, `pwd`, `cat`.
//!
//! Path failures surface as command-specific formatted strings; the
//! filesystem layer itself only reports found/not-found.

use crate::core::registry::{ready, CommandSpec, Registry};

pub fn register(registry: &mut Registry) {
    registry.register(
        CommandSpec::new("ls", "list directory contents", |_, session, args| {
            let path = args.first().map(String::as_str).unwrap_or(".");
            let Some(target) = session.fs.resolve_from_current(path) else {
                return ready(format!(
                    "ls: cannot access '{path}': No such file or directory"
                ));
            };
            if session.fs.is_directory(target) {
                ready(session.fs.child_names(target).join("\n"))
            } else {
                ready(session.fs.name(target).to_string())
            }
        })
        .with_usage("ls [path]"),
    );

    registry.register(
        CommandSpec::new("cd", "change the current directory", |_, session, args| {
            let path = args.first().map(String::as_str).unwrap_or("~");
            if session.fs.change_directory(path) {
                ready("")
            } else {
                ready(format!("cd: no such file or directory: {path}"))
            }
        })
        .with_usage("cd [path]"),
    );

    registry.register(CommandSpec::new(
        "pwd",
        "print the current directory",
        |_, session, _| {
            let current = session.fs.current();
            ready(session.fs.absolute_path(".", current))
        },
    ));

    registry.register(
        CommandSpec::new("cat", "print file contents", |_, session, args| {
            if args.is_empty() {
                return ready("cat: usage: cat file [...]");
            }
            let outputs: Vec<String> = args
                .iter()
                .map(|path| match session.fs.resolve_from_current(path) {
                    None => format!("cat: {path}: No such file or directory"),
                    Some(id) if session.fs.is_directory(id) => {
                        format!("cat: {}: Is a directory", session.fs.name(id))
                    }
                    Some(id) => session.fs.content(id).unwrap_or("").to_string(),
                })
                .collect();
            ready(outputs.join("\n"))
        })
        .with_usage("cat file [...]"),
    );
}
