//! Persistence for the active color theme.

use crate::config::storage_keys;
use crate::models::Theme;

/// Restore the active theme from localStorage, falling back to the
/// default on absence or parse failure.
pub fn load_theme() -> Theme {
    super::load_json(storage_keys::COLORSCHEME).unwrap_or_default()
}

/// Persist the active theme.
pub fn save_theme(theme: &Theme) {
    super::save_json(storage_keys::COLORSCHEME, theme);
}
