//! Share Dialog Component
//!
//! Shows a link carrying every countdown and copies it to the clipboard.

use countdown_core::share::{qr_svg, share_url};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{base_url, copy_text};
use crate::context::use_app_context;
use crate::store::{store_set_share_open, AppStateStoreFields, NoticeKind};

#[component]
pub fn ShareDialog() -> impl IntoView {
    let ctx = use_app_context();
    let (copied, set_copied) = signal(false);

    let link = Memo::new(move |_| {
        let _ = ctx.revision.get();
        let param = ctx.config.with_value(|c| c.share_param.clone());
        ctx.board
            .with_value(|board| share_url(&base_url(), &param, board.list()))
            .unwrap_or_else(|e| {
                log::warn!("[SHARE] {}", e);
                String::new()
            })
    });
    let qr = move || {
        link.with(|url| qr_svg(url)).unwrap_or_else(|e| {
            log::warn!("[SHARE] {}", e);
            String::new()
        })
    };
    let has_countdowns = move || {
        let _ = ctx.revision.get();
        ctx.board.with_value(|board| !board.is_empty())
    };

    let on_copy = move |_: web_sys::MouseEvent| {
        let url = link.get_untracked();
        let feedback_ms = ctx.config.with_value(|c| c.copied_feedback_ms);
        spawn_local(async move {
            match copy_text(&url).await {
                Ok(()) => {
                    set_copied.set(true);
                    TimeoutFuture::new(feedback_ms).await;
                    set_copied.set(false);
                }
                Err(e) => {
                    log::warn!("[SHARE] {}", e);
                    ctx.notify(NoticeKind::Error, "Could not copy the link");
                }
            }
        });
    };

    let close = move || store_set_share_open(&ctx.app, false);

    view! {
        <button
            class="icon-btn share-btn"
            title="Share countdowns"
            disabled=move || !has_countdowns()
            on:click=move |_| store_set_share_open(&ctx.app, true)
        >
            "⤴"
        </button>
        <Show when=move || ctx.app.share_open().get()>
            <div class="modal-overlay" on:click=move |_| close()>
                <div class="modal share-modal" on:click=|ev| ev.stop_propagation()>
                    <h2>"Share Countdowns"</h2>
                    <div class="share-qr" inner_html=qr></div>
                    <div class="share-row">
                        <input type="text" class="share-link" readonly=true prop:value=move || link.get() />
                        <button class="secondary-btn" on:click=on_copy>
                            {move || if copied.get() { "Copied!" } else { "Copy" }}
                        </button>
                    </div>
                    <div class="modal-actions">
                        <button class="secondary-btn" on:click=move |_| close()>"Close"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
