//! Countdown Card Component
//!
//! One countdown with its live remaining time, edit and delete actions.
//! The card follows edits to its record; a new target is handed to the
//! scheduler without re-subscribing.

use chrono::{DateTime, Local, Utc};
use countdown_core::{format_target, Countdown, Urgency};
use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::{store_set_form, FormMode, NoticeKind};

#[component]
pub fn CountdownCard(countdown: Countdown) -> impl IntoView {
    let ctx = use_app_context();

    // Tick while mounted
    let subscription = ctx.watch(&countdown);
    if let Some(subscription) = subscription {
        on_cleanup(move || ctx.unwatch(subscription));
    }

    let id = countdown.id.clone();
    let current = Memo::new(move |_| {
        let _ = ctx.revision.get();
        ctx.board
            .with_value(|board| board.get(&id).cloned())
            .unwrap_or_else(|| countdown.clone())
    });

    Effect::new(move |previous: Option<DateTime<Utc>>| {
        let target = current.with(|c| c.target_date);
        if let (Some(previous), Some(subscription)) = (previous, subscription) {
            if previous != target {
                ctx.retarget(subscription, target);
                ctx.tick();
            }
        }
        target
    });

    let thresholds = ctx.config.with_value(|c| c.urgency);
    let remaining = Memo::new(move |_| current.with(|c| ctx.remaining_for(c)));
    let urgency = move || remaining.get().urgency(&thresholds);

    let card_class = move || format!("countdown-card {}", urgency().as_str());
    let target_label =
        move || current.with(|c| format_target(&c.target_date.with_timezone(&Local)));

    let on_delete = Callback::new(move |_| {
        let id = current.with_untracked(|c| c.id.clone());
        if ctx.mutate(|board| board.delete(&id)).is_some() {
            ctx.notify(NoticeKind::Success, "Countdown deleted");
        }
    });

    let on_edit = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        store_set_form(&ctx.app, FormMode::Edit(current.get_untracked()));
    };

    view! {
        <div class=card_class>
            <div class="card-header">
                <div>
                    <h3 class="card-title">{move || current.with(|c| c.title.clone())}</h3>
                    {move || {
                        current
                            .with(|c| c.description.clone())
                            .map(|d| view! { <p class="card-description">{d}</p> })
                    }}
                </div>
                <div class="card-actions">
                    <button class="edit-btn" title="Edit countdown" on:click=on_edit>"✎"</button>
                    <DeleteConfirmButton
                        label=current.with_untracked(|c| c.title.clone())
                        on_confirm=on_delete
                    />
                </div>
            </div>
            <div class="card-target">"🕒 " {target_label}</div>
            {move || {
                let r = remaining.get();
                if urgency() == Urgency::Expired {
                    view! { <div class="card-expired">"Countdown completed!"</div> }.into_any()
                } else {
                    view! {
                        <div class="card-units">
                            <TimeUnit value=r.days label="days" />
                            <TimeUnit value=r.hours label="hours" />
                            <TimeUnit value=r.minutes label="min" />
                            <TimeUnit value=r.seconds label="sec" />
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn TimeUnit(value: u64, label: &'static str) -> impl IntoView {
    view! {
        <div class="time-unit">
            <span class="time-value">{value}</span>
            <span class="time-label">{label}</span>
        </div>
    }
}
