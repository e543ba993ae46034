//! Global UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The countdown
//! collection itself lives in countdown-core; this holds what the screen is
//! doing with it.

use countdown_core::{Countdown, PendingImport, ViewOptions};
use leptos::prelude::*;
use reactive_stores::Store;

/// What the create/edit dialog is showing
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FormMode {
    #[default]
    Closed,
    Create,
    Edit(Countdown),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice success",
            NoticeKind::Warning => "notice warning",
            NoticeKind::Error => "notice error",
        }
    }
}

/// Transient toast message
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Global UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Sort / hide-expired toggles
    pub view: ViewOptions,
    /// Create/edit dialog
    pub form: FormMode,
    /// Drafts waiting for the user to confirm an import
    pub pending_import: Option<PendingImport>,
    /// Share dialog visibility
    pub share_open: bool,
    /// Currently shown notification
    pub notice: Option<Notice>,
    /// Last notice id handed out
    pub notice_seq: u64,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_view(store: &AppStore, view: ViewOptions) {
    store.view().set(view);
}

pub fn store_set_form(store: &AppStore, mode: FormMode) {
    store.form().set(mode);
}

pub fn store_set_pending_import(store: &AppStore, pending: Option<PendingImport>) {
    store.pending_import().set(pending);
}

/// Apply `op` to the staged import, if there is one
pub fn store_update_pending_import(store: &AppStore, op: impl FnOnce(&mut PendingImport)) {
    store.pending_import().update(|pending| {
        if let Some(pending) = pending.as_mut() {
            op(pending);
        }
    });
}

/// Take the staged import out of the store
pub fn store_take_pending_import(store: &AppStore) -> Option<PendingImport> {
    let mut taken = None;
    store.pending_import().update(|pending| taken = pending.take());
    taken
}

pub fn store_set_share_open(store: &AppStore, open: bool) {
    store.share_open().set(open);
}

/// Show a notice, replacing the current one; returns its id
pub fn store_push_notice(store: &AppStore, kind: NoticeKind, text: String) -> u64 {
    let mut id = 0;
    store.notice_seq().update(|seq| {
        *seq += 1;
        id = *seq;
    });
    store.notice().set(Some(Notice { id, kind, text }));
    id
}

/// Clear the notice if it is still the one with `id`
pub fn store_dismiss_notice(store: &AppStore, id: u64) {
    let current = store.notice().with_untracked(|n| n.as_ref().map(|n| n.id));
    if current == Some(id) {
        store.notice().set(None);
    }
}
