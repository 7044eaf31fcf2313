//! Toolbar Component
//!
//! "Add Card" button, a short status line and the log panel toggle.

use leptos::prelude::*;

use crate::components::LogPanel;
use crate::store::{counts, pending, store_add_card, use_canvas_store};

#[component]
pub fn Toolbar() -> impl IntoView {
    let store = use_canvas_store();
    let (log_open, set_log_open) = signal(false);

    let add_card = move |_| {
        let outcome = store_add_card(&store);
        log::info!("[APP] {:?}", outcome);
    };

    let status = move || {
        let (cards, arrows) = counts(&store);
        match pending(&store) {
            Some(id) => format!("{} cards, {} arrows. Connecting from card {}...", cards, arrows, id + 1),
            None => format!("{} cards, {} arrows", cards, arrows),
        }
    };

    view! {
        <div class="toolbar">
            <button class="add-card-btn" on:click=add_card>"Add Card"</button>
            <span class="board-status">{status}</span>
            <button class="log-toggle-btn" on:click=move |_| set_log_open.update(|open| *open = !*open)>
                {move || if log_open.get() { "Hide Log" } else { "Show Log" }}
            </button>
        </div>
        <LogPanel open=log_open />
    }
}
