//! Card Registry
//!
//! Owns the cards on the canvas. Cards are only ever added or moved.

use crate::config::anchor_offset;
use crate::geometry::Point;

pub type CardId = u32;

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub text: String,
    /// Top-left corner in canvas coordinates
    pub position: Point,
    /// Width and height
    pub size: Point,
}

impl Card {
    /// Connection point centre relative to this card's top-left corner
    pub fn anchor_offset(&self) -> Point {
        anchor_offset(self.size)
    }
}

/// Placeholder text for a freshly created card
pub fn default_text(id: CardId) -> String {
    format!("Card {} - This is some dummy text.", id + 1)
}

/// Card face text: the first `max_chars` characters followed by an ellipsis
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut short: String = text.chars().take(max_chars).collect();
    short.push_str("...");
    short
}

/// Cards in creation order
#[derive(Debug, Clone, Default)]
pub struct CardRegistry {
    cards: Vec<Card>,
}

impl CardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next card will get: max existing id + 1, or 0 when empty
    pub fn next_id(&self) -> CardId {
        self.cards.iter().map(|card| card.id).max().map_or(0, |max| max + 1)
    }

    pub fn add(&mut self, position: Point, size: Point) -> CardId {
        let id = self.next_id();
        self.cards.push(Card {
            id,
            text: default_text(id),
            position,
            size,
        });
        id
    }

    /// Overwrite a card's position. Returns false if no card has this id.
    pub fn update_position(&mut self, id: CardId, position: Point) -> bool {
        match self.cards.iter_mut().find(|card| card.id == id) {
            Some(card) => {
                card.position = position;
                true
            }
            None => false,
        }
    }

    /// Overwrite a card's size. Returns false if no card has this id.
    pub fn resize(&mut self, id: CardId, size: Point) -> bool {
        match self.cards.iter_mut().find(|card| card.id == id) {
            Some(card) => {
                card.size = size;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
