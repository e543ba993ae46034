//! Import Dialog Component
//!
//! Lets the user pick which countdowns from a shared link to keep.

use chrono::Local;
use countdown_core::import;
use countdown_core::{format_target, parse_instant, ImportDraft};
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{
    store_take_pending_import, store_update_pending_import, AppStateStoreFields, NoticeKind,
};

#[component]
pub fn ImportDialog() -> impl IntoView {
    let ctx = use_app_context();
    let selected_count = move || {
        ctx.app
            .pending_import()
            .with(|p| p.as_ref().map_or(0, |p| p.selected_count()))
    };

    // Drafts already on the board, shown as a hint only
    let existing = move || {
        let _ = ctx.revision.get();
        ctx.app.pending_import().with(|p| match p {
            Some(p) => ctx.board.with_value(|board| p.existing_matches(board.list())),
            None => Vec::new(),
        })
    };

    let on_cancel = move |_: web_sys::MouseEvent| {
        if let Some(staged) = store_take_pending_import(&ctx.app) {
            import::cancel(staged);
        }
    };

    let on_confirm = move |_: web_sys::MouseEvent| {
        let Some(staged) = store_take_pending_import(&ctx.app) else {
            return;
        };
        let Some(report) = ctx.board.try_update_value(|board| staged.confirm(board)) else {
            return;
        };
        ctx.reload();

        if report.skipped > 0 {
            ctx.notify(
                NoticeKind::Warning,
                format!(
                    "Imported {} {}, skipped {}",
                    report.committed,
                    plural(report.committed),
                    report.skipped
                ),
            );
        } else {
            ctx.notify(
                NoticeKind::Success,
                format!("Imported {} {}", report.committed, plural(report.committed)),
            );
        }
    };

    let rows = move || {
        let matches = existing();
        ctx.app.pending_import().with(|p| {
            p.as_ref()
                .map(|p| {
                    p.drafts()
                        .iter()
                        .cloned()
                        .enumerate()
                        .map(|(index, draft)| (index, draft, matches.contains(&index)))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=move || ctx.app.pending_import().with(Option::is_some)>
            <div class="modal-overlay">
                <div class="modal import-modal">
                    <h2>"Import Countdowns"</h2>
                    <p class="modal-hint">"Select which countdowns you'd like to import:"</p>
                    <div class="import-bulk-actions">
                        <button
                            class="secondary-btn small"
                            on:click=move |_| store_update_pending_import(&ctx.app, |p| p.select_all())
                        >
                            "Select All"
                        </button>
                        <button
                            class="secondary-btn small"
                            on:click=move |_| store_update_pending_import(&ctx.app, |p| p.deselect_all())
                        >
                            "Deselect All"
                        </button>
                    </div>
                    <div class="import-list">
                        <For
                            each=rows
                            key=|(index, _, _)| *index
                            children=move |(index, draft, already_there)| {
                                let checked = move || {
                                    ctx.app
                                        .pending_import()
                                        .with(|p| p.as_ref().is_some_and(|p| p.is_selected(index)))
                                };
                                view! {
                                    <label class="import-row">
                                        <input
                                            type="checkbox"
                                            prop:checked=checked
                                            on:change=move |_| {
                                                store_update_pending_import(&ctx.app, |p| p.toggle(index))
                                            }
                                        />
                                        <DraftSummary draft=draft already_there=already_there />
                                    </label>
                                }
                            }
                        />
                    </div>
                    <div class="modal-actions">
                        <button class="secondary-btn" on:click=on_cancel>"Cancel"</button>
                        <button
                            class="primary-btn"
                            disabled=move || selected_count() == 0
                            on:click=on_confirm
                        >
                            {move || {
                                let n = selected_count();
                                format!("Import {} {}", n, plural(n))
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn DraftSummary(draft: ImportDraft, already_there: bool) -> impl IntoView {
    let when = parse_instant(&draft.date)
        .map(|t| format_target(&t.with_timezone(&Local)))
        .unwrap_or_else(|_| draft.date.clone());

    view! {
        <div class="import-draft">
            <span class="import-title">{draft.title}</span>
            <span class="import-date">{when}</span>
            {draft.description.map(|d| view! { <span class="import-description">{d}</span> })}
            {already_there.then(|| view! { <span class="import-existing">"Already in your list"</span> })}
        </div>
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        "Countdown"
    } else {
        "Countdowns"
    }
}
