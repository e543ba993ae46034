//! Import Reconciler
//!
//! Drafts decoded from a link are staged for the user to review. Nothing
//! reaches the store until the user confirms a selection.

mod reconciler;

#[cfg(test)]
mod tests;

pub use reconciler::{cancel, confirm, stage, ImportReport, PendingImport};
