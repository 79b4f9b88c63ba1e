//! Command registry: name → handler plus help metadata.
//!
//! Registration is static and by name; registering a name twice silently
//! overwrites the earlier entry (last registration wins). This is used
//! deliberately to attach the generated `help` handler after the
//! declarative builtin list is assembled.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use crate::core::session::Session;

/// Result of invoking a command handler.
///
/// Every handler resolves to a string; commands that need asynchronous
/// work (the weather fetch) return a pending computation instead. No
/// handler may panic or return an error across the command boundary.
pub enum CommandOutput {
    /// The output string, available immediately.
    Ready(String),
    /// A pending computation resolving to the output string.
    Deferred(Pin<Box<dyn Future<Output = String>>>),
}

/// Convenience constructor for the common synchronous case.
pub fn ready(output: impl Into<String>) -> CommandOutput {
    CommandOutput::Ready(output.into())
}

/// Handler signature: argument tokens (the command line minus the
/// command word) plus the registry itself (for `help`) and the mutable
/// session the command may read or write.
pub type Handler = Box<dyn Fn(&Registry, &mut Session, &[String]) -> CommandOutput>;

/// A registered command with its help metadata.
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: Option<&'static str>,
    handler: Handler,
}

impl CommandSpec {
    pub fn new(
        name: &'static str,
        description: &'static str,
        handler: impl Fn(&Registry, &mut Session, &[String]) -> CommandOutput + 'static,
    ) -> Self {
        Self {
            name,
            description,
            usage: None,
            handler: Box::new(handler),
        }
    }

    pub fn with_usage(mut self, usage: &'static str) -> Self {
        self.usage = Some(usage);
        self
    }
}

/// The command registry, constructed once at startup and immutable
/// thereafter.
#[derive(Default)]
pub struct Registry {
    commands: HashMap<&'static str, CommandSpec>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command, silently overwriting any earlier registration
    /// of the same name.
    pub fn register(&mut self, spec: CommandSpec) {
        self.commands.insert(spec.name, spec);
    }

    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// All registered names, sorted, for autocomplete and help.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Registered specs in name order.
    pub fn specs_sorted(&self) -> Vec<&CommandSpec> {
        let mut specs: Vec<_> = self.commands.values().collect();
        specs.sort_unstable_by_key(|s| s.name);
        specs
    }

    /// Invoke a command by name. `None` means the name is unregistered;
    /// the dispatcher formats the command-not-found entry.
    pub fn invoke(&self, name: &str, session: &mut Session, args: &[String]) -> Option<CommandOutput> {
        let spec = self.commands.get(name)?;
        Some((spec.handler)(self, session, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(name: &'static str, output: &'static str) -> CommandSpec {
        CommandSpec::new(name, "test command", move |_, _, _| ready(output))
    }

    #[test]
    fn test_register_and_invoke() {
        let mut registry = Registry::new();
        registry.register(constant("greet", "hello"));

        let mut session = Session::new();
        match registry.invoke("greet", &mut session, &[]) {
            Some(CommandOutput::Ready(out)) => assert_eq!(out, "hello"),
            _ => panic!("expected ready output"),
        }
        assert!(registry.invoke("missing", &mut session, &[]).is_none());
    }

    #[test]
    fn test_duplicate_registration_overwrites() {
        let mut registry = Registry::new();
        registry.register(constant("greet", "first"));
        registry.register(constant("greet", "second"));

        let mut session = Session::new();
        match registry.invoke("greet", &mut session, &[]) {
            Some(CommandOutput::Ready(out)) => assert_eq!(out, "second"),
            _ => panic!("expected ready output"),
        }
        assert_eq!(registry.names().len(), 1);
    }

    #[test]
    fn test_names_sorted() {
        let mut registry = Registry::new();
        registry.register(constant("pwd", ""));
        registry.register(constant("cd", ""));
        registry.register(constant("ls", ""));
        assert_eq!(registry.names(), vec!["cd", "ls", "pwd"]);
    }
}
