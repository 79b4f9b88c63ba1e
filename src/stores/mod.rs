//! Durable storage for the logs and theme.
//!
//! Each store serializes to JSON under a fixed localStorage key. Absence
//! of the backend or a corrupt value degrades to the default; failures
//! are reported on the console, never to the command surface.

mod history;
mod theme;

pub use history::{load_command_log, load_output_history, save_command_log, save_output_history};
pub use theme::{load_theme, save_theme};

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::utils::dom;

/// Load and deserialize a value from localStorage. `None` on absence;
/// a corrupt value is reported and treated as absent.
fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let stored = dom::local_storage()?.get_item(key).ok()??;
    match serde_json::from_str(&stored) {
        Ok(value) => Some(value),
        Err(err) => {
            warn(&format!("discarding corrupt '{key}' entry: {err}"));
            None
        }
    }
}

/// Serialize and store a value under `key`. Best-effort: a missing
/// backend or a full quota is reported and otherwise ignored.
fn save_json<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = dom::local_storage() else {
        return;
    };
    match serde_json::to_string(value) {
        Ok(json) => {
            if storage.set_item(key, &json).is_err() {
                warn(&format!("failed to persist '{key}'"));
            }
        }
        Err(err) => warn(&format!("failed to serialize '{key}': {err}")),
    }
}

fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
