//! Canvas Context
//!
//! Shared drag state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

/// Canvas-wide signals provided via context
#[derive(Clone, Copy)]
pub struct CanvasContext {
    /// Drag state shared by every card
    pub dnd: DndSignals,
}

impl CanvasContext {
    pub fn new(dnd: DndSignals) -> Self {
        Self { dnd }
    }

    /// Is this card being dragged right now?
    pub fn is_dragging(&self, id: u32) -> bool {
        self.dnd.dragging_id_read.get() == Some(id)
    }

    /// True just after a drag ends, so the trailing click can be ignored
    pub fn click_suppressed(&self) -> bool {
        self.dnd.drag_just_ended_read.get_untracked()
    }
}
