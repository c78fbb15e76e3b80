//! Leptos Board DnD
//!
//! Drag-and-drop for kanban cards using mouse events, with a movement
//! threshold to distinguish click from drag. The board widget is isolated
//! behind an explicit hook contract:
//!
//! - [`make_on_card_mousedown`] — attach to each draggable card
//! - [`make_on_column_mouseenter`] / [`make_on_column_mouseleave`] —
//!   attach to each drop-target column
//! - [`bind_global_mouseup`] — install once; invokes the `on_drop` hook
//!   with a [`DropEvent`] when a drag ends over a valid target, and ends
//!   the drag silently otherwise (cancelled drag)

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// A completed drop: which card moved, from which column, onto which
#[derive(Clone, Debug, PartialEq)]
pub struct DropEvent {
    pub card_id: String,
    pub from_column: String,
    pub to_column: String,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Card currently being dragged
    pub dragging_card: ReadSignal<Option<String>>,
    dragging_card_write: WriteSignal<Option<String>>,
    /// Column the dragged card came from
    pub source_column: ReadSignal<Option<String>>,
    source_column_write: WriteSignal<Option<String>>,
    /// Column currently hovered as a drop target
    pub hover_column: ReadSignal<Option<String>>,
    hover_column_write: WriteSignal<Option<String>>,
    /// Set for a short window after a drag ends, so click handlers can
    /// tell a real click from a drag release
    pub drag_just_ended: ReadSignal<bool>,
    drag_just_ended_write: WriteSignal<bool>,
    /// Card under a mousedown that has not crossed the drag threshold yet
    pending_card: ReadSignal<Option<(String, String)>>,
    pending_card_write: WriteSignal<Option<(String, String)>>,
    start_x: ReadSignal<i32>,
    start_x_write: WriteSignal<i32>,
    start_y: ReadSignal<i32>,
    start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_card, dragging_card_write) = signal(None::<String>);
    let (source_column, source_column_write) = signal(None::<String>);
    let (hover_column, hover_column_write) = signal(None::<String>);
    let (drag_just_ended, drag_just_ended_write) = signal(false);
    let (pending_card, pending_card_write) = signal(None::<(String, String)>);
    let (start_x, start_x_write) = signal(0i32);
    let (start_y, start_y_write) = signal(0i32);
    DndSignals {
        dragging_card,
        dragging_card_write,
        source_column,
        source_column_write,
        hover_column,
        hover_column_write,
        drag_just_ended,
        drag_just_ended_write,
        pending_card,
        pending_card_write,
        start_x,
        start_x_write,
        start_y,
        start_y_write,
    }
}

/// End drag operation and arm the just-ended flag briefly
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_card_write.set(None);
    dnd.source_column_write.set(None);
    dnd.hover_column_write.set(None);
    dnd.pending_card_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            100,
        );
        cb.forget();
    }
}

/// Mousedown hook for draggable cards: records a pending drag with the
/// card's id and home column
pub fn make_on_card_mousedown(
    dnd: DndSignals,
    card_id: String,
    column_id: String,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore mousedown on interactive children
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                return;
            }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                return;
            }
        }
        dnd.pending_card_write
            .set(Some((card_id.clone(), column_id.clone())));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Global mousemove handler: promotes a pending drag once the pointer
/// moves beyond the threshold
fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_card.get_untracked();
        let Some((card, column)) = pending else { return };
        if dnd.dragging_card.get_untracked().is_some() {
            return;
        }
        let dx = (ev.client_x() - dnd.start_x.get_untracked()).abs();
        let dy = (ev.client_y() - dnd.start_y.get_untracked()).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.dragging_card_write.set(Some(card));
            dnd.source_column_write.set(Some(column));
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback(
            "mousemove",
            on_mousemove.as_ref().unchecked_ref(),
        );
    }
    on_mousemove.forget();
}

/// Mouseenter hook for drop-target columns
pub fn make_on_column_mouseenter(
    dnd: DndSignals,
    column_id: String,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_card.get_untracked().is_some() {
            dnd.hover_column_write.set(Some(column_id.clone()));
        }
    }
}

/// Mouseleave hook for drop-target columns
pub fn make_on_column_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_card.get_untracked().is_some() {
            dnd.hover_column_write.set(None);
        }
    }
}

/// Install the global mouseup handler that completes drags.
///
/// `on_drop` fires only for a drop onto a column other than the card's
/// home column; releasing anywhere else cancels the drag. Also installs
/// the global mousemove handler.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(DropEvent) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_card.get_untracked();
        let source = dnd.source_column.get_untracked();
        let target = dnd.hover_column.get_untracked();

        dnd.pending_card_write.set(None);
        end_drag(&dnd);

        if let (Some(card_id), Some(from_column), Some(to_column)) = (dragging, source, target) {
            if from_column != to_column {
                on_drop(DropEvent {
                    card_id,
                    from_column,
                    to_column,
                });
            }
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}
