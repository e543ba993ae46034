//! Delete Confirm Button Component
//!
//! Two-step delete for a countdown card.

use leptos::prelude::*;

/// × button that asks "Delete?" before running `on_confirm`.
///
/// The question goes away again when the pointer leaves it, so a stray
/// click later on cannot delete anything.
#[component]
pub fn DeleteConfirmButton(
    /// Title of the countdown, used in the tooltip
    #[prop(into)]
    label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);
    let tooltip = format!("Delete \"{}\"", label);

    view! {
        <Show
            when=move || asking.get()
            fallback=move || view! {
                <button
                    class="delete-btn"
                    title=tooltip.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(true);
                    }
                >
                    "×"
                </button>
            }
        >
            <span class="delete-confirm" on:mouseleave=move |_| set_asking.set(false)>
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
