//! View Toggles Component
//!
//! Sort-by-time and hide-expired switches. They only change what is shown;
//! the stored order is untouched.

use countdown_core::ViewOptions;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_set_view, AppStateStoreFields};

#[component]
pub fn ViewToggles() -> impl IntoView {
    let ctx = use_app_context();

    let current = move || ctx.app.view().get();
    let apply = move |change: fn(&mut ViewOptions, bool), on: bool| {
        let mut view = ctx.app.view().get_untracked();
        change(&mut view, on);
        store_set_view(&ctx.app, view);
    };

    view! {
        <div class="view-toggles">
            <label class="toggle">
                <input
                    type="checkbox"
                    prop:checked=move || current().sort_by_time
                    on:change=move |ev| apply(|v, on| v.sort_by_time = on, event_target_checked(&ev))
                />
                "Sort by time left"
            </label>
            <label class="toggle">
                <input
                    type="checkbox"
                    prop:checked=move || current().hide_expired
                    on:change=move |ev| apply(|v, on| v.hide_expired = on, event_target_checked(&ev))
                />
                "Hide expired"
            </label>
        </div>
    }
}
