//! Terminal color themes.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_THEME, THEMES_JSON};

/// A named terminal palette: foreground/background, cursor, and the
/// sixteen ANSI-style colors.
///
/// Field names serialize in camelCase to match the palette format
/// persisted under the `"colorscheme"` localStorage key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub foreground: String,
    pub background: String,
    pub cursor_color: String,
    pub black: String,
    pub red: String,
    pub green: String,
    pub yellow: String,
    pub blue: String,
    pub purple: String,
    pub cyan: String,
    pub white: String,
    pub bright_black: String,
    pub bright_red: String,
    pub bright_green: String,
    pub bright_yellow: String,
    pub bright_blue: String,
    pub bright_purple: String,
    pub bright_cyan: String,
    pub bright_white: String,
}

static CATALOG: LazyLock<Vec<Theme>> = LazyLock::new(|| {
    serde_json::from_str(THEMES_JSON).expect("bundled theme catalog is valid JSON")
});

/// The static, ordered list of selectable themes.
pub fn theme_catalog() -> &'static [Theme] {
    &CATALOG
}

impl Theme {
    /// Look up a theme by case-insensitive name match.
    pub fn find(name: &str) -> Option<&'static Theme> {
        theme_catalog()
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::find(DEFAULT_THEME)
            .or_else(|| theme_catalog().first())
            .expect("theme catalog is not empty")
            .clone()
    }
}
