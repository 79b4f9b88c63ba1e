//! Terminal container component.
//!
//! Owns the scrollback view, the persistence and autoscroll effects,
//! and the one-shot boot sequence.

use leptos::prelude::*;

use super::{boot, Input, Output};
use crate::app::AppContext;
use crate::stores;
use crate::utils::dom;

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext provided at root");
    let output_ref = NodeRef::<leptos::html::Div>::new();

    // Mirror the session to localStorage on every change.
    Effect::new(move || {
        ctx.session.with(|s| {
            stores::save_output_history(&s.output_history);
            stores::save_command_log(&s.command_log);
            stores::save_theme(&s.theme);
        });
    });

    // Keep the newest output in view.
    Effect::new(move || {
        ctx.session.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    // Boot animation only on a fresh session.
    if ctx.session.with_untracked(|s| s.output_history.is_empty()) {
        boot::run(ctx);
    }

    let theme_style = move || {
        ctx.session.with(|s| {
            format!(
                "background-color: {}; color: {}",
                s.theme.background, s.theme.foreground
            )
        })
    };

    let entries = move || {
        ctx.session.with(|s| {
            s.output_history
                .iter()
                .cloned()
                .map(|entry| view! { <Output entry /> })
                .collect_view()
        })
    };

    view! {
        <div class="terminal" style=theme_style on:click=move |_| dom::focus_terminal_input()>
            <div class="terminal-scrollback" node_ref=output_ref>
                {entries}
                <Input />
            </div>
        </div>
    }
}
