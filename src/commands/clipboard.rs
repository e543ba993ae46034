//! Clipboard Commands
//!
//! Async clipboard write; failures come back as text, never as a throw.

use wasm_bindgen_futures::JsFuture;

/// Copy `text` to the system clipboard
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let promise = window.navigator().clipboard().write_text(text);

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("Failed to copy: {:?}", e))
}
