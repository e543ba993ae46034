//! Location Commands
//!
//! Reading the current address and rewriting it without a reload.

use wasm_bindgen::JsValue;

/// `location.search`, including the leading `?` (empty if none)
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// `origin + pathname`, the base for share links
pub fn base_url() -> String {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return String::new();
    };
    let origin = location.origin().unwrap_or_default();
    let path = location.pathname().unwrap_or_default();
    format!("{}{}", origin, path)
}

/// Swap the query string in the address bar via `history.replaceState`
pub fn replace_search(search: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let location = window.location();
    let path = location.pathname().map_err(|e| format!("{:?}", e))?;
    let hash = location.hash().unwrap_or_default();

    window
        .history()
        .map_err(|e| format!("{:?}", e))?
        .replace_state_with_url(&JsValue::NULL, "", Some(&format!("{}{}{}", path, search, hash)))
        .map_err(|e| format!("{:?}", e))
}
