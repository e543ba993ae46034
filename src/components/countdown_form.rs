//! Countdown Form Component
//!
//! Modal dialog for creating and editing countdowns. The date and time
//! fields are read in the browser's local zone.

use chrono::Local;
use countdown_core::{compose_target, format_instant, CountdownDraft, CountdownPatch};
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_set_form, AppStateStoreFields, FormMode, NoticeKind};

#[component]
pub fn CountdownForm() -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (date, set_date) = signal(String::new());
    let (time, set_time) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let is_open = move || ctx.app.form().with(|f| *f != FormMode::Closed);
    let is_edit = move || ctx.app.form().with(|f| matches!(f, FormMode::Edit(_)));

    // Reset the fields whenever the dialog opens
    Effect::new(move |_| match ctx.app.form().get() {
        FormMode::Closed => {}
        FormMode::Create => {
            set_title.set(String::new());
            set_description.set(String::new());
            set_date.set(String::new());
            set_time.set(Local::now().format("%H:%M").to_string());
            set_error.set(None);
        }
        FormMode::Edit(countdown) => {
            let local = countdown.target_date.with_timezone(&Local);
            set_title.set(countdown.title);
            set_description.set(countdown.description.unwrap_or_default());
            set_date.set(local.format("%Y-%m-%d").to_string());
            set_time.set(local.format("%H:%M").to_string());
            set_error.set(None);
        }
    });

    let close = move || store_set_form(&ctx.app, FormMode::Closed);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let target = match compose_target(&Local, &date.get_untracked(), &time.get_untracked()) {
            Ok(target) => target,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        let title = title.get_untracked();
        let description = description.get_untracked();
        let target_date = format_instant(&target);

        let saved = match ctx.app.form().get_untracked() {
            FormMode::Closed => return,
            FormMode::Create => {
                let draft = CountdownDraft::new(title, target_date).with_description(description);
                ctx.mutate(|board| board.create(&draft))
                    .map(|_| "Countdown added successfully!")
            }
            FormMode::Edit(existing) => {
                // Only what the user actually changed
                let patch = CountdownPatch {
                    title: (title.trim() != existing.title).then_some(title),
                    description: (description != existing.description.clone().unwrap_or_default())
                        .then_some(description),
                    target_date: (target != existing.target_date).then_some(target_date),
                };
                if patch.is_empty() {
                    close();
                    return;
                }
                ctx.mutate(|board| board.update(&existing.id, &patch))
                    .map(|_| "Countdown updated successfully!")
            }
        };

        if let Some(message) = saved {
            ctx.notify(NoticeKind::Success, message);
            close();
        }
    };

    view! {
        <Show when=is_open>
            <div class="modal-overlay" on:click=move |_| close()>
                <div
                    class="modal countdown-form-modal"
                    on:click=|ev| ev.stop_propagation()
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            close();
                        }
                    }
                >
                    <h2>{move || if is_edit() { "Edit Countdown" } else { "Add New Countdown" }}</h2>
                    <form class="countdown-form" on:submit=on_submit>
                        <label>
                            "Title"
                            <input
                                type="text"
                                placeholder="New Year's Eve"
                                prop:value=move || title.get()
                                on:input=move |ev| set_title.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Description (Optional)"
                            <textarea
                                placeholder="Add some details about this countdown"
                                prop:value=move || description.get()
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <div class="form-row">
                            <label>
                                "Date"
                                <input
                                    type="date"
                                    prop:value=move || date.get()
                                    on:input=move |ev| set_date.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Time"
                                <input
                                    type="time"
                                    prop:value=move || time.get()
                                    on:input=move |ev| set_time.set(event_target_value(&ev))
                                />
                            </label>
                        </div>
                        {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                        <div class="modal-actions">
                            <button type="button" class="secondary-btn" on:click=move |_| close()>
                                "Cancel"
                            </button>
                            <button type="submit" class="primary-btn">
                                {move || if is_edit() { "Update Countdown" } else { "Add Countdown" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
