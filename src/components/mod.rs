//! UI Components
//!
//! Leptos components for the canvas.

mod card_view;
mod arrow_layer;
mod detail_modal;
mod toolbar;
mod log_panel;

pub use card_view::CardView;
pub use arrow_layer::ArrowLayer;
pub use detail_modal::DetailModal;
pub use toolbar::Toolbar;
pub use log_panel::LogPanel;
