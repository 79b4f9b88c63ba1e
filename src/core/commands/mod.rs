//! Built-in command set.
//!
//! Each submodule registers its commands into the shared [`Registry`];
//! [`builtins`] assembles the full set. `help` is registered last, after
//! the declarative list is built, relying on last-registration-wins to
//! shadow any earlier entry of the same name.

mod advanced;
mod filesystem;
mod general;
mod session;

use crate::core::registry::{ready, CommandSpec, Registry};

/// Build the full registry of built-in commands.
pub fn builtins() -> Registry {
    let mut registry = Registry::new();

    filesystem::register(&mut registry);
    session::register(&mut registry);
    general::register(&mut registry);
    advanced::register(&mut registry);

    registry.register(
        CommandSpec::new("help", "show available commands", |registry, _, args| {
            match args.first() {
                None => {
                    let specs = registry.specs_sorted();
                    let width = specs.iter().map(|s| s.name.len()).max().unwrap_or(0);
                    let lines: Vec<String> = specs
                        .iter()
                        .map(|s| format!("{:<width$}  {}", s.name, s.description))
                        .collect();
                    ready(format!(
                        "Welcome! Here are all the available commands:\n\n{}",
                        lines.join("\n")
                    ))
                }
                Some(name) => match registry.get(name) {
                    Some(spec) => {
                        let mut out = format!("{}: {}", spec.name, spec.description);
                        if let Some(usage) = spec.usage {
                            out.push_str(&format!("\nusage: {usage}"));
                        }
                        ready(out)
                    }
                    None => ready(format!("help: no such command: {name}")),
                },
            }
        })
        .with_usage("help [command]"),
    );

    registry
}
