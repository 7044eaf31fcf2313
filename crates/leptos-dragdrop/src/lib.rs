//! Leptos DragDrop Utilities
//! 
//! Free-positioning drag for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Pointer offset from where the drag started, in CSS pixels
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct DragDelta {
    pub dx: i32,
    pub dy: i32,
}

/// What a drag does to its element
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum DragKind {
    /// Drag the whole element
    #[default]
    Move,
    /// Drag a resize handle
    Resize,
}

/// A finished drag: which element, what kind, and by how much
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragEnd {
    pub id: u32,
    pub kind: DragKind,
    pub delta: DragDelta,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    /// Live offset of the dragged element
    pub delta_read: ReadSignal<DragDelta>,
    pub delta_write: WriteSignal<DragDelta>,
    /// Move or resize, fixed at mousedown
    pub kind_read: ReadSignal<DragKind>,
    pub kind_write: WriteSignal<DragKind>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// How long clicks are suppressed after a drag ends
const CLICK_SUPPRESS_MS: u32 = 100;

/// Offset of the pointer from the drag start
pub fn pointer_delta(start: (i32, i32), current: (i32, i32)) -> DragDelta {
    DragDelta {
        dx: current.0 - start.0,
        dy: current.1 - start.1,
    }
}

/// `MouseEvent::buttons()` bitmask says no button is held
pub fn buttons_released(buttons: u16) -> bool {
    buttons == 0
}

/// Has the pointer moved far enough to count as a drag?
pub fn exceeds_threshold(delta: DragDelta) -> bool {
    delta.dx.abs() > DRAG_THRESHOLD_PX || delta.dy.abs() > DRAG_THRESHOLD_PX
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (delta_read, delta_write) = signal(DragDelta::default());
    let (kind_read, kind_write) = signal(DragKind::default());
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        delta_read,
        delta_write,
        kind_read,
        kind_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.delta_write.set(DragDelta::default());
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    let clear = dnd.drag_just_ended_write;
    Timeout::new(CLICK_SUPPRESS_MS, move || clear.set(false)).forget();
}

/// Live offset for `item_id` while a drag of `kind` is running on it,
/// zero otherwise
pub fn live_delta(dnd: &DndSignals, item_id: u32, kind: DragKind) -> DragDelta {
    if dnd.dragging_id_read.get() == Some(item_id) && dnd.kind_read.get() == kind {
        dnd.delta_read.get()
    } else {
        DragDelta::default()
    }
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Keep text selection from fighting the drag
            ev.prevent_default();
            start_pending(&dnd, item_id, DragKind::Move, &ev);
        }
    }
}

/// Create mousedown handler for a resize handle inside a draggable item
pub fn make_on_resize_mousedown(dnd: DndSignals, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // The item's own mousedown would turn this into a move
            ev.stop_propagation();
            ev.prevent_default();
            start_pending(&dnd, item_id, DragKind::Resize, &ev);
        }
    }
}

/// Record pending drag with start position
fn start_pending(dnd: &DndSignals, item_id: u32, kind: DragKind, ev: &web_sys::MouseEvent) {
    dnd.pending_id_write.set(Some(item_id));
    dnd.kind_write.set(kind);
    dnd.start_x_write.set(ev.client_x());
    dnd.start_y_write.set(ev.client_y());
}

/// Finish whatever drag is in progress. Reports real drags to `on_drag_end`;
/// a pending press that never passed the threshold is simply dropped.
fn finish_drag<F>(dnd: &DndSignals, on_drag_end: &F)
where
    F: Fn(DragEnd),
{
    let dragging_id = dnd.dragging_id_read.get_untracked();
    let kind = dnd.kind_read.get_untracked();
    let delta = dnd.delta_read.get_untracked();

    if let Some(id) = dragging_id {
        end_drag(dnd);
        on_drag_end(DragEnd { id, kind, delta });
    } else {
        // Plain click: drop the pending state and let the click event through
        dnd.pending_id_write.set(None);
    }
}

/// Bind document mousemove: starts a drag once the threshold is passed,
/// then tracks the pointer offset. A move with no button held means the
/// release happened outside the window, so the drag is finished here.
fn bind_global_mousemove<F>(dnd: DndSignals, on_drag_end: F)
where
    F: Fn(DragEnd) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;
    
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();
        if pending.is_none() {
            return;
        }

        if buttons_released(ev.buttons()) {
            finish_drag(&dnd, &on_drag_end);
            return;
        }

        let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
        let delta = pointer_delta(start, (ev.client_x(), ev.client_y()));

        if dnd.dragging_id_read.get_untracked().is_none() {
            // Start dragging if moved beyond threshold
            if exceeds_threshold(delta) {
                dnd.dragging_id_write.set(pending);
                dnd.delta_write.set(delta);
            }
        } else {
            dnd.delta_write.set(delta);
        }
    });
    
    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind global mouseup handler; `on_drag_end` fires only for real drags
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drag_end: F)
where
    F: Fn(DragEnd) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;
    
    let on_up = on_drag_end.clone();
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        finish_drag(&dnd, &on_up);
    });
    
    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();
    
    // Also bind global mousemove
    bind_global_mousemove(dnd, on_drag_end);
}
