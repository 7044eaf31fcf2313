//! Detail Modal Component
//!
//! Shows the full text of a card until dismissed.

use leptos::prelude::*;

use canvas_model::Action;

use crate::store::{detail, store_apply, use_canvas_store};

#[component]
pub fn DetailModal() -> impl IntoView {
    let store = use_canvas_store();

    let close = move || {
        store_apply(&store, Action::Dismiss);
    };

    view! {
        <Show when=move || detail(&store).is_some()>
            // Clicking the backdrop dismisses, clicks inside the dialog do not
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal-dialog" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <span class="modal-title">"Card Details"</span>
                        <button class="close-btn" on:click=move |_| close()>"×"</button>
                    </div>
                    <div class="modal-body">{move || detail(&store).unwrap_or_default()}</div>
                    <div class="modal-footer">
                        <button class="secondary-btn" on:click=move |_| close()>"Close"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
