//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use countdown_core::{
    compute_remaining, AppConfig, Countdown, CountdownStore, DomainResult, Subscription,
    TickScheduler, TimeRemaining,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::BrowserStorage;
use crate::store::{store_dismiss_notice, store_push_notice, AppStateStoreFields, AppStore, NoticeKind};

/// The persisted countdown collection, backed by localStorage
pub type Board = CountdownStore<BrowserStorage>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Canonical countdown collection
    pub board: StoredValue<Board>,
    /// Bumped after every board mutation - read
    pub revision: ReadSignal<u32>,
    /// Bumped after every board mutation - write
    set_revision: WriteSignal<u32>,
    /// Countdowns currently on screen
    pub scheduler: StoredValue<TickScheduler>,
    /// Latest tick results by countdown id - read
    pub remaining: ReadSignal<HashMap<String, TimeRemaining>>,
    /// Latest tick results by countdown id - write
    set_remaining: WriteSignal<HashMap<String, TimeRemaining>>,
    pub config: StoredValue<AppConfig>,
    pub app: AppStore,
}

impl AppContext {
    pub fn new(board: Board, config: AppConfig, app: AppStore) -> Self {
        let (revision, set_revision) = signal(0u32);
        let (remaining, set_remaining) = signal(HashMap::new());
        Self {
            board: StoredValue::new(board),
            revision,
            set_revision,
            scheduler: StoredValue::new(TickScheduler::new()),
            remaining,
            set_remaining,
            config: StoredValue::new(config),
            app,
        }
    }

    /// Trigger a re-read of the board
    pub fn reload(&self) {
        self.set_revision.update(|v| *v += 1);
    }

    /// Countdowns to render under the current view toggles (tracked)
    pub fn visible(&self) -> Vec<Countdown> {
        let _ = self.revision.get();
        let view = self.app.view().get();
        self.board.with_value(|board| board.view(view))
    }

    /// Run a board mutation; errors become an error notice
    pub fn mutate<U>(&self, op: impl FnOnce(&mut Board) -> DomainResult<U>) -> Option<U> {
        match self.board.try_update_value(op)? {
            Ok(value) => {
                self.reload();
                Some(value)
            }
            Err(e) => {
                log::warn!("[APP] {}", e);
                self.notify(NoticeKind::Error, e.to_string());
                None
            }
        }
    }

    /// Show a notice that dismisses itself
    pub fn notify(&self, kind: NoticeKind, text: impl Into<String>) {
        let app = self.app;
        let id = store_push_notice(&app, kind, text.into());
        let duration = self.config.with_value(|c| c.notice_duration_ms);
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            store_dismiss_notice(&app, id);
        });
    }

    /// One scheduler pass over every watched countdown
    pub fn tick(&self) {
        if self.scheduler.with_value(TickScheduler::is_idle) {
            return;
        }
        let now = Utc::now();
        let pass = self.scheduler.with_value(|s| s.tick(now));
        self.set_remaining.set(pass.into_iter().collect());
    }

    /// Register a displayed countdown with the scheduler
    pub fn watch(&self, countdown: &Countdown) -> Option<Subscription> {
        let id = countdown.id.clone();
        let target = countdown.target_date;
        self.scheduler.try_update_value(|s| s.subscribe(id, target))
    }

    /// Follow an edited target without re-subscribing
    pub fn retarget(&self, subscription: Subscription, target: DateTime<Utc>) {
        self.scheduler.try_update_value(|s| s.retarget(subscription, target));
    }

    pub fn unwatch(&self, subscription: Subscription) {
        self.scheduler.try_update_value(|s| s.unsubscribe(subscription));
    }

    /// Latest remaining time for `countdown` (tracked); computed on the spot
    /// before its first tick
    pub fn remaining_for(&self, countdown: &Countdown) -> TimeRemaining {
        self.remaining
            .with(|m| m.get(&countdown.id).copied())
            .unwrap_or_else(|| compute_remaining(countdown.target_date, Utc::now()))
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
