//! Terminal input component.
//!
//! A single text field; every key event maps onto one transition of the
//! input state machine, so the component holds no state of its own.

use leptos::{ev, prelude::*};

use crate::app::AppContext;

#[component]
pub fn Input() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext provided at root");
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Tab" => {
            ev.prevent_default();
            ctx.press_tab();
        }
        "Enter" => {
            ctx.press_enter();
        }
        "ArrowUp" => {
            ev.prevent_default();
            ctx.press_arrow_up();
        }
        "ArrowDown" => {
            ev.prevent_default();
            ctx.press_arrow_down();
        }
        _ => {}
    };

    let handle_input = move |ev: ev::Event| {
        ctx.edit(&event_target_value(&ev));
    };

    let caret_style = move || {
        ctx.session
            .with(|s| format!("caret-color: {}", s.theme.cursor_color))
    };

    view! {
        <div class="input-line">
            <span class="prompt">{move || ctx.prompt()}</span>
            <span class="prompt-symbol">"$ "</span>
            <input
                type="text"
                class="terminal-input"
                style=caret_style
                prop:value=move || ctx.input.with(|i| i.buffer.clone())
                on:keydown=handle_keydown
                on:input=handle_input
                node_ref=input_ref
                autocomplete="off"
                autocapitalize="off"
                spellcheck="false"
            />
        </div>
    }
}
