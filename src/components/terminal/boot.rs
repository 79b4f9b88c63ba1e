//! Boot sequence logic.
//!
//! Animates a short line-by-line startup sequence ending in the banner.
//! Runs only when no persisted scrollback was restored, so returning
//! visitors land directly in their previous session.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::Update;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::config::{boot_delays, ASCII_BANNER};
use crate::models::HistoryEntry;

const BOOT_LINES: &[&str] = &[
    "Initializing terminal...",
    "Loading command registry...",
    "Mounting virtual filesystem... OK",
    "Restoring session state... OK",
    "Access granted. Welcome, guest.",
];

/// Run the boot animation, appending each line to the scrollback.
pub fn run(ctx: AppContext) {
    spawn_local(async move {
        for line in BOOT_LINES {
            ctx.session
                .update(|s| s.push_entry(HistoryEntry::output(*line)));
            TimeoutFuture::new(boot_delays::LINE_MS).await;
        }

        TimeoutFuture::new(boot_delays::BANNER_MS).await;
        ctx.session
            .update(|s| s.push_entry(HistoryEntry::output(ASCII_BANNER)));
    });
}
