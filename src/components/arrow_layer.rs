//! Arrow Layer Component
//!
//! SVG overlay drawing one line per arrow, with an arrowhead at the end card.

use leptos::prelude::*;

use crate::store::{arrows, use_canvas_store};

#[component]
pub fn ArrowLayer() -> impl IntoView {
    let store = use_canvas_store();

    // Redrawn whenever the arrow list or any cached coordinate changes
    let lines = move || {
        arrows(&store)
            .into_iter()
            .map(|arrow| {
                view! {
                    <line
                        x1=arrow.start_point.x.to_string()
                        y1=arrow.start_point.y.to_string()
                        x2=arrow.end_point.x.to_string()
                        y2=arrow.end_point.y.to_string()
                        stroke="black"
                        stroke-width="2"
                        marker-end="url(#arrowhead)"
                    />
                }
            })
            .collect_view()
    };

    view! {
        <svg class="arrow-layer">
            <defs>
                <marker
                    id="arrowhead"
                    markerWidth="10"
                    markerHeight="7"
                    refX="7.5"
                    refY="3.5"
                    orient="auto"
                >
                    <polygon points="0 0, 10 3.5, 0 7" fill="black" />
                </marker>
            </defs>
            {lines}
        </svg>
    }
}
