//! Scrollback entry rendering.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::HistoryEntry;

/// One scrollback entry: the echoed prompt line (omitted for bare
/// output such as the boot sequence) followed by the output lines.
#[component]
pub fn Output(entry: HistoryEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext provided at root");

    let prompt_line = (!entry.command.is_empty()).then(|| {
        view! {
            <div class="entry-command">
                <span class="prompt">{ctx.prompt()}</span>
                <span class="prompt-symbol">"$ "</span>
                <span>{entry.command.clone()}</span>
            </div>
        }
    });

    let class = if entry.is_suggestion {
        "entry-output suggestion"
    } else {
        "entry-output"
    };

    view! {
        <div class="entry">
            {prompt_line}
            <pre class=class>{entry.outputs.join("\n")}</pre>
        </div>
    }
}
