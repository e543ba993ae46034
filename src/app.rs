//! Anxious Display Frontend App
//!
//! Loads the board, picks up shared links, drives the tick and lays out the
//! page.

use countdown_core::import;
use countdown_core::share::strip_import_params;
use countdown_core::{AppConfig, CountdownStore, ImportSource, SystemClock, UuidGenerator};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::{self, BrowserStorage};
use crate::components::{
    CountdownForm, CountdownList, ImportDialog, NoticeBar, ShareDialog, ViewToggles,
};
use crate::context::{AppContext, Board};
use crate::store::{store_set_form, store_set_pending_import, AppState, FormMode, NoticeKind};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();

    let (board, load_warning): (Board, _) = CountdownStore::load_with(
        BrowserStorage,
        UuidGenerator,
        SystemClock,
        &config.storage_key,
    );

    let app = Store::new(AppState::default());
    provide_context(app);
    let ctx = AppContext::new(board, config.clone(), app);
    provide_context(ctx);

    if let Some(e) = load_warning {
        ctx.notify(NoticeKind::Warning, e.to_string());
    }

    pick_up_shared_link(ctx, &config.share_param);

    // One interval drives every card
    let ticker = StoredValue::new_local(Some(Interval::new(config.tick_interval_ms, move || {
        ctx.tick();
    })));
    on_cleanup(move || ticker.set_value(None));

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"The Anxious Display"</h1>
                <p class="tagline">"A simple web app to keep track of the deadlines you'd like to ignore"</p>
                <div class="header-actions">
                    <button
                        class="primary-btn"
                        on:click=move |_| store_set_form(&ctx.app, FormMode::Create)
                    >
                        "+ Add New Countdown"
                    </button>
                    <ShareDialog />
                </div>
            </header>

            <main class="main-content">
                <ViewToggles />
                <CountdownList />
            </main>

            <CountdownForm />
            <ImportDialog />
            <NoticeBar />
        </div>
    }
}

/// Stage whatever the address bar carries, then drop it from the URL so a
/// refresh does not offer the same import again
fn pick_up_shared_link(ctx: AppContext, share_param: &str) {
    let search = commands::current_search();
    let Some(source) = ImportSource::from_query(&search, share_param) else {
        return;
    };

    match source.decode() {
        Ok(drafts) => {
            let pending = import::stage(drafts);
            if pending.is_empty() {
                ctx.notify(NoticeKind::Warning, "The shared link had no usable countdowns");
            } else {
                log::info!("[APP] Staged {} countdowns from link", pending.len());
                store_set_pending_import(&ctx.app, Some(pending));
            }
        }
        Err(e) => {
            log::warn!("[APP] Ignoring shared link: {}", e);
            // A bad link only costs the import; anything else is a real failure
            let kind = if e.is_import_error() {
                NoticeKind::Warning
            } else {
                NoticeKind::Error
            };
            ctx.notify(kind, format!("Could not import from the link: {}", e));
        }
    }

    if let Err(e) = commands::replace_search(&strip_import_params(&search, share_param)) {
        log::warn!("[APP] Could not clean up the address bar: {}", e);
    }
}
