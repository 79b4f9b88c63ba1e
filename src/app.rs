//! Root application module.
//!
//! Contains the main App component and the [`AppContext`] that wires the
//! core state machine to the UI event handlers.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::Terminal;
use crate::core::commands::builtins;
use crate::core::{InputLine, Registry, Session};
use crate::models::HistoryEntry;
use crate::stores;

/// Application-wide reactive context.
///
/// Provided at the root of the component tree; child components access
/// it with `use_context::<AppContext>()`. All fields are signals or
/// stored values, so the struct is `Copy`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Terminal session state (filesystem, logs, theme, game).
    pub session: RwSignal<Session>,
    /// Live input line and history-recall cursor.
    pub input: RwSignal<InputLine>,
    /// Command registry. Handlers are not `Send`, so the registry lives
    /// in local storage rather than a sync signal.
    registry: StoredValue<Rc<Registry>, LocalStorage>,
}

impl AppContext {
    /// Create the context, restoring persisted state where present.
    pub fn new() -> Self {
        let mut session = Session::new();
        session.output_history = stores::load_output_history();
        session.command_log = stores::load_command_log();
        session.theme = stores::load_theme();
        session.started_at_ms = js_sys::Date::now();

        Self {
            session: RwSignal::new(session),
            input: RwSignal::new(InputLine::new()),
            registry: StoredValue::new_local(Rc::new(builtins())),
        }
    }

    fn registry(&self) -> Rc<Registry> {
        self.registry.with_value(Rc::clone)
    }

    /// Replace the input buffer from a text-field edit.
    pub fn edit(&self, value: &str) {
        self.input.update(|input| input.edit(value));
    }

    pub fn press_tab(&self) {
        let registry = self.registry();
        let session = self.session;
        self.input
            .update(|input| session.update(|s| input.press_tab(&registry, s)));
    }

    /// Dispatch the current buffer. An asynchronous handler is awaited
    /// off the event loop; its output lands in the scrollback when it
    /// resolves.
    pub fn press_enter(&self) {
        let registry = self.registry();
        let session = self.session;
        let pending = self
            .input
            .try_update(|input| session.try_update(|s| input.press_enter(&registry, s)))
            .flatten()
            .flatten();

        if let Some(pending) = pending {
            spawn_local(async move {
                let output = pending.future.await;
                session.update(|s| s.push_entry(HistoryEntry::new(&pending.command, output)));
            });
        }
    }

    pub fn press_arrow_up(&self) {
        let session = self.session;
        self.input
            .update(|input| session.with(|s| input.press_arrow_up(s)));
    }

    pub fn press_arrow_down(&self) {
        let session = self.session;
        self.input
            .update(|input| session.with(|s| input.press_arrow_down(s)));
    }

    /// Prompt string for display.
    pub fn prompt(&self) -> String {
        self.session.with(|s| s.prompt())
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! { <Terminal /> }
}
