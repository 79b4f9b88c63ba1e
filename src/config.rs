//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// ASCII banner displayed after boot sequence and by the `banner` command.
pub const ASCII_BANNER: &str = include_str!("../assets/text/banner.txt");

/// Theme catalog (name + palette for each selectable theme).
pub const THEMES_JSON: &str = include_str!("../assets/themes.json");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the prompt.
pub const APP_NAME: &str = "termy";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Username shown in the prompt and by `whoami`.
pub const USERNAME: &str = "guest";

// =============================================================================
// External Links
// =============================================================================

/// Repository URL opened by `repo` and referenced by `theme ls`.
pub const REPO_URL: &str = "https://github.com/termy-sh/termy";

/// Links opened by the shortcut commands.
pub const GITHUB_URL: &str = "https://github.com/termy-sh";
pub const BLOG_URL: &str = "https://termy-sh.github.io";
pub const LINKEDIN_URL: &str = "https://linkedin.com/company/termy-sh";
pub const RESUME_URL: &str = "https://termy-sh.github.io/resume";
pub const CONTACT_EMAIL: &str = "hello@termy.sh";

// =============================================================================
// Durable Storage
// =============================================================================

/// localStorage keys for the persisted stores.
pub mod storage_keys {
    /// Serialized output-history log (terminal scrollback).
    pub const HISTORY: &str = "history";
    /// Serialized entered-command log (for up/down recall).
    pub const ENTERED_COMMANDS: &str = "enteredCommandHistory";
    /// Serialized active theme.
    pub const COLORSCHEME: &str = "colorscheme";
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10_000;

/// Build the wttr.in request URL for the `weather` command.
///
/// `?ATm` requests a plain-text, ANSI-free, metric report.
pub fn weather_url(city: &str) -> String {
    format!("https://wttr.in/{}?ATm", city)
}

// =============================================================================
// Filesystem Configuration
// =============================================================================

/// Upper bound on the parent-chain walk in `absolute_path`.
///
/// The tree is always shallower than this in practice; the bound is a
/// safety net against a malformed parent chain.
pub const MAX_PATH_DEPTH: usize = 20;

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Default theme name looked up in the catalog at startup.
pub const DEFAULT_THEME: &str = "dracula";

/// Boot sequence animation delay constants (milliseconds).
pub mod boot_delays {
    /// Delay between consecutive boot lines.
    pub const LINE_MS: u32 = 120;
    /// Pause before the banner is printed.
    pub const BANNER_MS: u32 = 250;
}
