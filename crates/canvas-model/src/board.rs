//! Board
//!
//! The single owned state object for the canvas. The UI feeds user actions
//! through [`Board::apply`] and renders whatever the board holds afterwards.

use crate::arrow::{self, AnchorLocator, Arrow, ModelAnchors};
use crate::card::{Card, CardId, CardRegistry};
use crate::config::CanvasConfig;
use crate::connection::{ConnectOutcome, ConnectionTracker};
use crate::geometry::{Point, ViewTransform};

/// User actions the board understands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    AddCard { position: Point },
    MoveCard { id: CardId, position: Point },
    ResizeCard { id: CardId, size: Point },
    ClickConnection { id: CardId },
    ShowMore { id: CardId },
    Dismiss,
}

/// What an action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    CardAdded(CardId),
    /// Card moved; `refreshed` arrows got new coordinates
    CardMoved { id: CardId, refreshed: usize },
    /// Card resized; `refreshed` arrows got new coordinates
    CardResized { id: CardId, refreshed: usize },
    Connection(ConnectOutcome),
    /// Both endpoints chosen but one could not be located; no arrow added
    ConnectionUnresolved { start: CardId, end: CardId },
    DetailShown(CardId),
    DetailDismissed,
    /// Action referenced a card that does not exist
    UnknownCard(CardId),
}

#[derive(Debug, Clone)]
pub struct Board {
    config: CanvasConfig,
    transform: ViewTransform,
    cards: CardRegistry,
    tracker: ConnectionTracker,
    arrows: Vec<Arrow>,
    /// Full text of the card open in the detail viewer
    detail: Option<String>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl Board {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            transform: ViewTransform::IDENTITY,
            cards: CardRegistry::new(),
            tracker: ConnectionTracker::new(),
            arrows: Vec::new(),
            detail: None,
        }
    }

    pub fn apply(&mut self, action: Action) -> Outcome {
        let outcome = match action {
            Action::AddCard { position } => Outcome::CardAdded(self.add_card(position)),
            Action::MoveCard { id, position } => self.move_card(id, position),
            Action::ResizeCard { id, size } => self.resize_card(id, size),
            Action::ClickConnection { id } => self.click_connection(id),
            Action::ShowMore { id } => self.show_more(id),
            Action::Dismiss => {
                self.dismiss();
                Outcome::DetailDismissed
            }
        };
        log::debug!("[BOARD] {:?} -> {:?}", action, outcome);
        outcome
    }

    pub fn add_card(&mut self, position: Point) -> CardId {
        self.cards.add(position, self.config.card_size)
    }

    /// Overwrite a card's position and refresh every arrow
    pub fn move_card(&mut self, id: CardId, position: Point) -> Outcome {
        if !self.cards.update_position(id, position) {
            return Outcome::UnknownCard(id);
        }
        let refreshed = self.recompute_arrows();
        Outcome::CardMoved { id, refreshed }
    }

    /// Overwrite a card's size (clamped to the minimum side) and refresh
    /// every arrow, since the anchor sits at half the card width
    pub fn resize_card(&mut self, id: CardId, size: Point) -> Outcome {
        let size = self.config.clamp_size(size);
        if !self.cards.resize(id, size) {
            return Outcome::UnknownCard(id);
        }
        let refreshed = self.recompute_arrows();
        Outcome::CardResized { id, refreshed }
    }

    /// Position a card lands on when released after moving by `(dx, dy)`
    pub fn drag_target(&self, id: CardId, dx: f64, dy: f64) -> Option<Point> {
        self.cards.get(id).map(|card| card.position + Point::new(dx, dy))
    }

    /// Size a card ends up with after its resize handle moved by `(dx, dy)`
    pub fn resize_target(&self, id: CardId, dx: f64, dy: f64) -> Option<Point> {
        self.cards
            .get(id)
            .map(|card| self.config.clamp_size(card.size + Point::new(dx, dy)))
    }

    pub fn click_connection(&mut self, id: CardId) -> Outcome {
        if !self.cards.contains(id) {
            return Outcome::UnknownCard(id);
        }
        match self.tracker.click(id) {
            ConnectOutcome::Connected { start, end } => {
                let locator = ModelAnchors::new(&self.cards, self.transform);
                match arrow::resolve(start, end, &locator) {
                    Some(new_arrow) => {
                        self.arrows.push(new_arrow);
                        Outcome::Connection(ConnectOutcome::Connected { start, end })
                    }
                    None => Outcome::ConnectionUnresolved { start, end },
                }
            }
            other => Outcome::Connection(other),
        }
    }

    pub fn show_more(&mut self, id: CardId) -> Outcome {
        match self.cards.get(id) {
            Some(card) => {
                self.detail = Some(card.text.clone());
                Outcome::DetailShown(id)
            }
            None => Outcome::UnknownCard(id),
        }
    }

    pub fn dismiss(&mut self) {
        self.detail = None;
    }

    /// Change the canvas-to-drawing transform; arrows follow
    pub fn set_transform(&mut self, transform: ViewTransform) {
        if self.transform != transform {
            self.transform = transform;
            self.recompute_arrows();
        }
    }

    pub fn recompute_arrows(&mut self) -> usize {
        let locator = ModelAnchors::new(&self.cards, self.transform);
        arrow::recompute(&mut self.arrows, &locator)
    }

    /// Recompute against an external locator, e.g. one that only knows about
    /// part of the board
    pub fn recompute_arrows_with(&mut self, locator: &impl AnchorLocator) -> usize {
        arrow::recompute(&mut self.arrows, locator)
    }

    /// Drawing coordinate of a card's connection point
    pub fn anchor_of(&self, id: CardId) -> Option<Point> {
        ModelAnchors::new(&self.cards, self.transform).locate(id)
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    pub fn pending(&self) -> Option<CardId> {
        self.tracker.pending()
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }
}
