//! Notice Bar Component
//!
//! Shows the current transient notice; click to dismiss early.

use leptos::prelude::*;

use crate::store::{store_dismiss_notice, use_app_store, AppStateStoreFields};

#[component]
pub fn NoticeBar() -> impl IntoView {
    let store = use_app_store();

    move || {
        store.notice().get().map(|notice| {
            let id = notice.id;
            view! {
                <div
                    class=notice.kind.class()
                    role="status"
                    on:click=move |_| store_dismiss_notice(&store, id)
                >
                    {notice.text}
                </div>
            }
        })
    }
}
