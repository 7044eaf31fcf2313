//! Canvas Model
//!
//! State for the card canvas, independent of any rendering surface:
//! - card: card registry (creation and position updates)
//! - connection: pending-connection state machine
//! - arrow: arrows and anchor resolution
//! - board: owned state object and the action/update entry point

mod arrow;
mod board;
mod card;
mod config;
mod connection;
mod geometry;

mod tests;

pub use arrow::{recompute, resolve, AnchorLocator, Arrow, ModelAnchors};
pub use board::{Action, Board, Outcome};
pub use card::{default_text, preview, Card, CardId, CardRegistry};
pub use config::{
    anchor_offset, CanvasConfig, CARD_HEIGHT, CARD_WIDTH, MARKER_PADDING, MARKER_RISE, MARKER_SIZE, MIN_CARD_SIDE,
    PREVIEW_CHARS, SPAWN_EXTENT,
};
pub use connection::{ConnectOutcome, ConnectionTracker};
pub use geometry::{Point, ViewTransform};
