//! DOM and Web API utility functions.
//!
//! Every helper degrades to `None`/no-op when the browser API is
//! unavailable, so callers never need their own existence checks.

use wasm_bindgen::JsCast;
use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Open a URL in a new tab. Failures (popup blocked, no window) are
/// ignored.
pub fn open_url(url: &str) {
    if let Some(window) = window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

/// Hostname the page is served from.
pub fn hostname() -> Option<String> {
    window()?.location().hostname().ok()
}

/// Platform string reported by the browser.
pub fn platform() -> Option<String> {
    let platform = window()?.navigator().platform().ok()?;
    (!platform.is_empty()).then_some(platform)
}

/// Viewport size as `<width>x<height>`.
pub fn viewport() -> Option<String> {
    let window = window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(format!("{}x{}", width as u32, height as u32))
}

/// Document title.
pub fn document_title() -> Option<String> {
    let title = window()?.document()?.title();
    (!title.is_empty()).then_some(title)
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Focus the terminal input element.
#[inline]
pub fn focus_terminal_input() {
    focus_element("input");
}
