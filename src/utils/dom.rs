//! DOM helpers for the terminal view.

use wasm_bindgen::JsCast;

/// Focus the first element matching a CSS selector.
///
/// Returns `true` if the element was found and focused.
pub fn focus_element(selector: &str) -> bool {
    if let Some(window) = web_sys::window()
        && let Some(document) = window.document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Focus the terminal prompt input.
#[inline]
pub fn focus_terminal_input() {
    focus_element("input");
}
