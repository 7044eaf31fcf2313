//! Canvas Configuration
//!
//! Layout constants shared by the model (anchor resolution) and the UI
//! (card rendering). The UI must draw cards with the same numbers or arrows
//! will miss the connection points.

use crate::geometry::Point;

/// Card width in pixels
pub const CARD_WIDTH: f64 = 200.0;
/// Card height in pixels
pub const CARD_HEIGHT: f64 = 100.0;
/// Connection point dot diameter
pub const MARKER_SIZE: f64 = 10.0;
/// Padding around the dot; the clickable marker box is SIZE + 2 * PADDING
pub const MARKER_PADDING: f64 = 5.0;
/// Distance of the marker box above the card's top edge
pub const MARKER_RISE: f64 = 12.0;
/// New cards spawn in `[0, SPAWN_EXTENT)` on both axes
pub const SPAWN_EXTENT: f64 = 400.0;
/// Characters of card text shown on the card face
pub const PREVIEW_CHARS: usize = 26;

/// Smallest width or height a card can be resized to
pub const MIN_CARD_SIDE: f64 = 60.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    /// Size given to new cards
    pub card_size: Point,
    pub min_card_side: f64,
    pub spawn_extent: f64,
    pub preview_chars: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            card_size: Point::new(CARD_WIDTH, CARD_HEIGHT),
            min_card_side: MIN_CARD_SIDE,
            spawn_extent: SPAWN_EXTENT,
            preview_chars: PREVIEW_CHARS,
        }
    }
}

/// Centre of the connection point relative to a card's top-left corner.
/// The marker's left edge sits at 50% of the card width.
pub fn anchor_offset(card_size: Point) -> Point {
    let marker_half = MARKER_SIZE / 2.0 + MARKER_PADDING;
    Point::new(card_size.x / 2.0 + marker_half, -MARKER_RISE + marker_half)
}

impl CanvasConfig {
    /// Map two uniform samples in `[0, 1)` to a spawn position
    pub fn spawn_position(&self, rx: f64, ry: f64) -> Point {
        Point::new(rx.clamp(0.0, 1.0) * self.spawn_extent, ry.clamp(0.0, 1.0) * self.spawn_extent)
    }

    /// Raise both sides of `size` to the minimum card side
    pub fn clamp_size(&self, size: Point) -> Point {
        Point::new(size.x.max(self.min_card_side), size.y.max(self.min_card_side))
    }
}
