//! Browser Command Wrappers
//!
//! Thin bindings to the browser APIs the app talks to, organized by concern.

mod clipboard;
mod location;
mod storage;

pub use clipboard::*;
pub use location::*;
pub use storage::*;
