//! Card View Component
//!
//! A draggable, resizable card with a text preview, a "Show More" button
//! and the connection point used to draw arrows.

use leptos::prelude::*;

use canvas_model::{preview, Action, CardId, Outcome, MARKER_PADDING, MARKER_RISE, MARKER_SIZE};
use leptos_dragdrop::{live_delta, make_on_mousedown, make_on_resize_mousedown, DragKind};

use crate::context::CanvasContext;
use crate::store::{card_position, card_size, card_text, config, pending, store_apply, use_canvas_store};

/// A single card on the canvas
#[component]
pub fn CardView(id: CardId) -> impl IntoView {
    let store = use_canvas_store();
    let ctx = use_context::<CanvasContext>().expect("CanvasContext should be provided");
    let dnd = ctx.dnd;

    let config = config(&store);
    let preview_text = card_text(&store, id)
        .map(|text| preview(&text, config.preview_chars))
        .unwrap_or_default();

    let on_mousedown = make_on_mousedown(dnd, id);
    let on_resize_mousedown = make_on_resize_mousedown(dnd, id);

    // Stored geometry plus the live move or resize offset
    let card_style = move || {
        let position = card_position(&store, id).unwrap_or_default();
        let size = card_size(&store, id).unwrap_or(config.card_size);
        let moved = live_delta(&dnd, id, DragKind::Move);
        let resized = live_delta(&dnd, id, DragKind::Resize);
        let opacity = if ctx.is_dragging(id) { 0.5 } else { 1.0 };
        format!(
            "left: {}px; top: {}px; width: {}px; height: {}px; opacity: {};",
            position.x + moved.dx as f64,
            position.y + moved.dy as f64,
            (size.x + resized.dx as f64).max(config.min_card_side),
            (size.y + resized.dy as f64).max(config.min_card_side),
            opacity,
        )
    };

    let card_class = move || {
        if ctx.is_dragging(id) { "card-frame dragging" } else { "card-frame" }
    };

    let marker_class = move || {
        if pending(&store) == Some(id) { "connection-point pending" } else { "connection-point" }
    };
    // Must agree with canvas_model::anchor_offset
    let marker_style = format!(
        "width: {}px; height: {}px; padding: {}px; left: 50%; top: -{}px;",
        MARKER_SIZE, MARKER_SIZE, MARKER_PADDING, MARKER_RISE,
    );

    let on_connect = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if ctx.click_suppressed() {
            return;
        }
        match store_apply(&store, Action::ClickConnection { id }) {
            Outcome::ConnectionUnresolved { start, end } => {
                log::warn!("[CARD] Could not locate anchors for {} -> {}", start, end);
            }
            outcome => log::info!("[CARD] Connection click on {}: {:?}", id, outcome),
        }
    };

    view! {
        <div
            id=format!("card-{}", id)
            class=card_class
            style=card_style
            on:mousedown=on_mousedown
        >
            <div class="card">
                <p class="card-preview">{preview_text}</p>
                <button
                    class="show-more-btn"
                    on:click=move |_| {
                        store_apply(&store, Action::ShowMore { id });
                    }
                >
                    "Show More"
                </button>
            </div>
            <div
                id=format!("connection-point-{}", id)
                class=marker_class
                style=marker_style
                on:click=on_connect
            />
            <div class="resize-handle" on:mousedown=on_resize_mousedown />
        </div>
    }
}
