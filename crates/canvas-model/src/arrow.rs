//! Arrows and Anchor Resolution
//!
//! An arrow caches the drawing coordinates of both endpoints. Coordinates
//! are resolved through an [`AnchorLocator`]; when a locator cannot find an
//! endpoint the cached coordinates are left as they were.

use crate::card::{CardId, CardRegistry};
use crate::geometry::{Point, ViewTransform};

#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    pub start_id: CardId,
    pub end_id: CardId,
    pub start_point: Point,
    pub end_point: Point,
}

/// Finds the drawing coordinate of a card's connection point
pub trait AnchorLocator {
    fn locate(&self, id: CardId) -> Option<Point>;
}

/// Locates anchors from card geometry alone:
/// `transform(card.position + card.anchor_offset())`
pub struct ModelAnchors<'a> {
    registry: &'a CardRegistry,
    transform: ViewTransform,
}

impl<'a> ModelAnchors<'a> {
    pub fn new(registry: &'a CardRegistry, transform: ViewTransform) -> Self {
        Self { registry, transform }
    }
}

impl AnchorLocator for ModelAnchors<'_> {
    fn locate(&self, id: CardId) -> Option<Point> {
        self.registry
            .get(id)
            .map(|card| self.transform.apply(card.position + card.anchor_offset()))
    }
}

/// Build an arrow if both endpoints can be located
pub fn resolve(start_id: CardId, end_id: CardId, locator: &impl AnchorLocator) -> Option<Arrow> {
    let start_point = locator.locate(start_id)?;
    let end_point = locator.locate(end_id)?;
    Some(Arrow {
        start_id,
        end_id,
        start_point,
        end_point,
    })
}

/// Re-resolve every arrow in place. Arrows with an endpoint the locator
/// cannot find keep their previous coordinates.
///
/// Returns the number of arrows that were refreshed.
pub fn recompute(arrows: &mut [Arrow], locator: &impl AnchorLocator) -> usize {
    let mut refreshed = 0;
    for arrow in arrows.iter_mut() {
        match (locator.locate(arrow.start_id), locator.locate(arrow.end_id)) {
            (Some(start), Some(end)) => {
                arrow.start_point = start;
                arrow.end_point = end;
                refreshed += 1;
            }
            _ => {
                log::debug!(
                    "[ARROW] Keeping stale coordinates for {} -> {}",
                    arrow.start_id,
                    arrow.end_id
                );
            }
        }
    }
    refreshed
}
