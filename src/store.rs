//! Canvas State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Components never touch the board directly; they go through the helpers
//! below so every mutation passes `Board::apply`.

use leptos::prelude::*;
use reactive_stores::Store;
use canvas_model::{Action, Arrow, Board, CanvasConfig, CardId, Outcome, Point};
use leptos_dragdrop::{DragEnd, DragKind};

/// Global canvas state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CanvasState {
    /// Cards, arrows, pending connection and the open detail text
    pub board: Board,
}

/// Type alias for the store
pub type CanvasStore = Store<CanvasState>;

/// Get the canvas store from context
pub fn use_canvas_store() -> CanvasStore {
    expect_context::<CanvasStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run one action against the board
pub fn store_apply(store: &CanvasStore, action: Action) -> Outcome {
    let outcome = store.board().write().apply(action);
    if let Outcome::UnknownCard(id) = outcome {
        log::warn!("[STORE] {:?} referenced missing card {}", action, id);
    }
    outcome
}

/// Add a card at a pseudo-random spot inside the spawn square
pub fn store_add_card(store: &CanvasStore) -> Outcome {
    let position = store
        .board()
        .read_untracked()
        .config()
        .spawn_position(js_sys::Math::random(), js_sys::Math::random());
    store_apply(store, Action::AddCard { position })
}

/// Commit a finished drag as the card's new position or size
pub fn store_finish_drag(store: &CanvasStore, end: DragEnd) -> Outcome {
    let (dx, dy) = (end.delta.dx as f64, end.delta.dy as f64);
    let action = {
        let board = store.board().read_untracked();
        match end.kind {
            DragKind::Move => board.drag_target(end.id, dx, dy).map(|position| Action::MoveCard { id: end.id, position }),
            DragKind::Resize => board.resize_target(end.id, dx, dy).map(|size| Action::ResizeCard { id: end.id, size }),
        }
    };
    match action {
        Some(action) => store_apply(store, action),
        None => {
            log::warn!("[STORE] Drag ended on missing card {}", end.id);
            Outcome::UnknownCard(end.id)
        }
    }
}

// ========================
// Store Read Helpers
// ========================

pub fn card_ids(store: &CanvasStore) -> Vec<CardId> {
    store.board().read().cards().map(|card| card.id).collect()
}

pub fn card_position(store: &CanvasStore, id: CardId) -> Option<Point> {
    store.board().read().card(id).map(|card| card.position)
}

pub fn card_size(store: &CanvasStore, id: CardId) -> Option<Point> {
    store.board().read().card(id).map(|card| card.size)
}

/// Card text, read once; text never changes after creation
pub fn card_text(store: &CanvasStore, id: CardId) -> Option<String> {
    store.board().read_untracked().card(id).map(|card| card.text.clone())
}

pub fn arrows(store: &CanvasStore) -> Vec<Arrow> {
    store.board().read().arrows().to_vec()
}

pub fn pending(store: &CanvasStore) -> Option<CardId> {
    store.board().read().pending()
}

pub fn detail(store: &CanvasStore) -> Option<String> {
    store.board().read().detail().map(str::to_string)
}

pub fn config(store: &CanvasStore) -> CanvasConfig {
    store.board().read_untracked().config().clone()
}

/// (cards, arrows)
pub fn counts(store: &CanvasStore) -> (usize, usize) {
    let board = store.board().read();
    (board.card_count(), board.arrows().len())
}
