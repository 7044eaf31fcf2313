//! Log Panel Component
//!
//! Recent log lines from the rolling logger, refreshed each time the panel
//! is opened.

use leptos::prelude::*;

#[component]
pub fn LogPanel(open: ReadSignal<bool>) -> impl IntoView {
    let (lines, set_lines) = signal(Vec::<String>::new());

    // Snapshot the ring buffer whenever the panel opens
    Effect::new(move |_| {
        if open.get() {
            set_lines.set(rolling_logger::recent_lines());
        }
    });

    view! {
        <Show when=move || open.get()>
            <div class="log-panel">
                {move || lines.get().join("\n")}
            </div>
        </Show>
    }
}
