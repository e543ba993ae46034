//! Countdown List Component
//!
//! Renders the visible countdowns and handles drag-to-reorder.
//! While dragging, the list renders from a DragSession working copy; the
//! board is reordered once, on drop. A focused card also moves with the
//! arrow keys.

use countdown_core::{Countdown, DragSession};
use leptos::prelude::*;

use leptos_dragdrop::*;

use crate::components::CountdownCard;
use crate::context::{use_app_context, AppContext};
use crate::store::AppStateStoreFields;

#[component]
pub fn CountdownList() -> impl IntoView {
    let ctx = use_app_context();
    let dnd = create_dnd_signals::<String>();
    let session = RwSignal::new(None::<DragSession>);

    // Reordering a filtered or sorted view would not be a full permutation
    let can_reorder = move || {
        let view = ctx.app.view().get();
        !view.sort_by_time && !view.hide_expired
    };

    // Drag started: snapshot the stored order
    Effect::new(move |_| {
        match dnd.dragging_id_read.get() {
            Some(active) if can_reorder() => {
                let order = ctx.board.with_value(|board| board.ids());
                session.set(DragSession::start(order, &active));
            }
            Some(_) => {}
            None => session.set(None),
        }
    });

    // Hovering another card moves the dragged one there
    Effect::new(move |_| {
        if let Some(over) = dnd.hover_id_read.get() {
            session.update(|s| {
                if let Some(s) = s.as_mut() {
                    s.drag_over(&over);
                }
            });
        }
    });

    bind_global_mouseup(dnd, move |dragged, _hovered| {
        let Some(finished) = session.try_update(Option::take).flatten() else {
            return;
        };
        if !finished.is_changed() {
            return;
        }
        let order = finished.finish();
        log::debug!("[DND] Dropped {}, committing {} ids", dragged, order.len());
        ctx.mutate(|board| board.reorder(&order));
    });

    let items = move || {
        let visible = ctx.visible();
        session.with(|s| match s {
            Some(s) => arrange(visible, s.order()),
            None => visible,
        })
    };

    view! {
        <Show
            when=move || { let _ = ctx.revision.get(); ctx.board.with_value(|b| !b.is_empty()) }
            fallback=|| view! {
                <div class="empty-list">
                    <p>"No countdowns yet. Add one to get started!"</p>
                </div>
            }
        >
            <div class="countdown-grid">
                <For
                    each=items
                    key=|c| c.id.clone()
                    children=move |countdown: Countdown| {
                        let id = countdown.id.clone();
                        let on_mousedown = make_on_mousedown(dnd, id.clone());
                        let on_mouseenter = make_on_item_mouseenter(dnd, id.clone());
                        let on_mouseleave = make_on_mouseleave(dnd);
                        let on_keydown = make_on_item_keydown(id.clone(), move |id: String, forward| {
                            if can_reorder() {
                                step_countdown(ctx, &id, forward);
                            }
                        });

                        let item_class = move || {
                            let mut c = String::from("countdown-slot");
                            if can_reorder() { c.push_str(" draggable"); }
                            if dnd.is_dragging(&id) { c.push_str(" dragging"); }
                            c
                        };

                        view! {
                            <div
                                class=item_class
                                on:mousedown=on_mousedown
                                on:mouseenter=on_mouseenter
                                on:mouseleave=on_mouseleave
                                on:keydown=on_keydown
                                tabindex="0"
                            >
                                <CountdownCard countdown=countdown />
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}

/// Keyboard reorder: one slot up or down, committed right away
fn step_countdown(ctx: AppContext, id: &str, forward: bool) {
    let order = ctx.board.with_value(|board| board.ids());
    let Some(mut session) = DragSession::start(order, id) else {
        return;
    };
    if session.step(forward) {
        log::debug!("[DND] Key move {} {}", id, if forward { "down" } else { "up" });
        ctx.mutate(|board| board.reorder(&session.finish()));
    }
}

/// Put `items` into the working order; ids missing from it keep their place
/// at the end
fn arrange(items: Vec<Countdown>, order: &[String]) -> Vec<Countdown> {
    let mut remaining = items;
    let mut arranged = Vec::with_capacity(remaining.len());
    for id in order {
        if let Some(pos) = remaining.iter().position(|c| &c.id == id) {
            arranged.push(remaining.remove(pos));
        }
    }
    arranged.extend(remaining);
    arranged
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn countdown(id: &str) -> Countdown {
        Countdown {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: None,
            target_date: Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_arrange_follows_working_order() {
        let items = vec![countdown("a"), countdown("b"), countdown("c")];
        let order = vec!["c".to_string(), "a".to_string(), "b".to_string()];

        let arranged: Vec<String> = arrange(items, &order).into_iter().map(|c| c.id).collect();

        assert_eq!(arranged, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_arrange_keeps_unknown_items() {
        let items = vec![countdown("a"), countdown("new")];
        let order = vec!["a".to_string()];

        let arranged: Vec<String> = arrange(items, &order).into_iter().map(|c| c.id).collect();

        assert_eq!(arranged, vec!["a", "new"]);
    }
}
