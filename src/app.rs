//! Card Canvas App
//!
//! Main application component: toolbar, card layer with arrow overlay, and
//! the detail modal.

use leptos::prelude::*;
use reactive_stores::Store;

use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals, DragEnd};

use crate::components::{ArrowLayer, CardView, DetailModal, Toolbar};
use crate::context::CanvasContext;
use crate::store::{card_ids, store_finish_drag, CanvasState};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(CanvasState::default());
    provide_context(store);

    // Drag state shared by every card
    let dnd = create_dnd_signals();
    provide_context(CanvasContext::new(dnd));

    // Bind global mouseup handler for drag release
    bind_global_mouseup(dnd, move |end: DragEnd| {
        log::debug!("[DND] Drag end: card={}, dx={}, dy={}", end.id, end.delta.dx, end.delta.dy);
        let outcome = store_finish_drag(&store, end);
        log::debug!("[DND] {:?}", outcome);
    });

    view! {
        <div class="app">
            <div class="canvas">
                <Toolbar />

                // Cards and arrows share one origin, so arrows need no view transform
                <div class="card-layer">
                    <ArrowLayer />
                    <For
                        each=move || card_ids(&store)
                        key=|id| *id
                        children=move |id| view! { <CardView id=id /> }
                    />
                </div>
            </div>

            <DetailModal />
        </div>
    }
}
