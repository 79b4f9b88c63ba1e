//! Informational, link-opening, and joke commands.
//!
//! These are constants or thin wrappers over browser APIs; none of them
//! touch the filesystem or the logs.

use wasm_bindgen::JsValue;

use crate::config::{
    APP_NAME, APP_VERSION, ASCII_BANNER, BLOG_URL, CONTACT_EMAIL, GITHUB_URL, LINKEDIN_URL,
    REPO_URL, RESUME_URL,
};
use crate::core::registry::{ready, CommandSpec, Registry};
use crate::utils::dom;

const QUOTES: &[&str] = &[
    "There's no place like 127.0.0.1.",
    "Hackers don't break in, they log in.",
    "Trust is good, 2FA is better.",
    "The cloud is just someone else's computer.",
    "There are two types of people: those who back up their data, and those who will.",
    "If at first you don't succeed, call it a zero-day.",
    "It works on my machine.",
    "A clean terminal is a happy terminal.",
    "rm -rf regrets",
    "Real shells have tab completion.",
];

const SYSINFO_ART: &[&str] = &[
    "TTTTT",
    "  T  ",
    "  T  ",
    "  T  ",
    "  T  ",
];

pub fn register(registry: &mut Registry) {
    registry.register(CommandSpec::new("about", "about this terminal", |_, _, _| {
        ready(format!(
            "Hello! This is {APP_NAME}, a terminal for the web.\n\nType 'help' to see available commands."
        ))
    }));

    registry.register(CommandSpec::new("banner", "print the welcome banner", |_, _, _| {
        ready(ASCII_BANNER)
    }));

    registry.register(CommandSpec::new("echo", "print arguments", |_, _, args| {
        ready(args.join(" "))
    }));

    registry.register(CommandSpec::new("whoami", "print the current user", |_, _, _| {
        ready(crate::config::USERNAME)
    }));

    registry.register(CommandSpec::new("hostname", "print the hostname", |_, _, _| {
        ready(dom::hostname().unwrap_or_else(|| APP_NAME.to_string()))
    }));

    registry.register(CommandSpec::new("date", "print the current date and time", |_, _, _| {
        let now = js_sys::Date::new_0();
        ready(String::from(now.to_locale_string("en-US", &JsValue::UNDEFINED)))
    }));

    registry.register(CommandSpec::new("time", "print the current time", |_, _, _| {
        let now = js_sys::Date::new_0();
        let date = String::from(now.to_locale_date_string("en-US", &JsValue::UNDEFINED));
        let time = String::from(now.to_locale_time_string("en-US"));
        ready(format!("{date}\n{time}"))
    }));

    registry.register(CommandSpec::new("vi", "an editor", |_, _, _| {
        ready("why use vi? try 'emacs'")
    }));
    registry.register(CommandSpec::new("vim", "an editor", |_, _, _| {
        ready("why use vim? try 'emacs'")
    }));
    registry.register(CommandSpec::new("emacs", "an editor", |_, _, _| {
        ready("why use emacs? try 'vim'")
    }));

    registry.register(CommandSpec::new("sudo", "run a command as root", |_, _, args| {
        dom::open_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        let target = args.first().map(String::as_str).unwrap_or("");
        ready(format!(
            "Permission denied: unable to run the command '{target}' as root."
        ))
    }));

    registry.register(CommandSpec::new("quote", "print a random quote", |_, _, _| {
        ready(QUOTES[fastrand::usize(..QUOTES.len())])
    }));

    registry.register(CommandSpec::new("repo", "open the source repository", |_, _, _| {
        dom::open_url(REPO_URL);
        ready("Opening repository...")
    }));
    registry.register(CommandSpec::new("github", "open the GitHub profile", |_, _, _| {
        dom::open_url(GITHUB_URL);
        ready("Opening GitHub...")
    }));
    registry.register(CommandSpec::new("blog", "open the blog", |_, _, _| {
        dom::open_url(BLOG_URL);
        ready("Opening blog...")
    }));
    registry.register(CommandSpec::new("linkedin", "open the LinkedIn profile", |_, _, _| {
        dom::open_url(LINKEDIN_URL);
        ready("Opening LinkedIn...")
    }));
    registry.register(CommandSpec::new("resume", "open the resume", |_, _, _| {
        dom::open_url(RESUME_URL);
        ready("Opening resume in a new tab...")
    }));
    registry.register(CommandSpec::new("email", "compose an email", |_, _, _| {
        dom::open_url(&format!("mailto:{CONTACT_EMAIL}"));
        ready(format!("Opening mailto:{CONTACT_EMAIL}..."))
    }));

    registry.register(CommandSpec::new("sysinfo", "print system information", |_, session, _| {
        let uptime_seconds = ((js_sys::Date::now() - session.started_at_ms) / 1000.0).max(0.0) as u64;

        let info = [
            format!("OS: {}", dom::platform().unwrap_or_else(|| "Web Browser".to_string())),
            format!("Host: {}", dom::hostname().unwrap_or_else(|| APP_NAME.to_string())),
            "Kernel: Rust/WASM".to_string(),
            format!("Version: {APP_VERSION}"),
            format!("Uptime: {}", format_uptime(uptime_seconds)),
            format!("Shell: {APP_NAME}"),
            format!("Theme: {}", session.theme.name),
            format!("Resolution: {}", dom::viewport().unwrap_or_else(|| "N/A".to_string())),
            format!("Terminal: {}", dom::document_title().unwrap_or_else(|| APP_NAME.to_string())),
        ];

        let art_width = SYSINFO_ART.iter().map(|l| l.len()).max().unwrap_or(0);
        let lines: Vec<String> = (0..SYSINFO_ART.len().max(info.len()))
            .map(|i| {
                let art = SYSINFO_ART.get(i).copied().unwrap_or("");
                let line = info.get(i).map(String::as_str).unwrap_or("");
                format!("{art:<art_width$}  {line}").trim_end().to_string()
            })
            .collect();
        ready(lines.join("\n"))
    }));
}

/// Render an uptime in seconds as `1h 2m 3s`, omitting leading zero
/// units.
fn format_uptime(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds / 60) % 60;
    let seconds = total_seconds % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h "));
    }
    if minutes > 0 || hours > 0 {
        out.push_str(&format!("{minutes}m "));
    }
    out.push_str(&format!("{seconds}s"));
    out
}
