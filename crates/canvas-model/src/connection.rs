//! Connection Tracker
//!
//! Two-state machine for drawing arrows: the first connection-point click
//! picks a start card, the second picks the end card.

use crate::card::CardId;

/// Result of a connection-point click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// First endpoint chosen, waiting for the second
    Pending(CardId),
    /// Second click landed on the pending card; nothing is connected
    SelfRejected(CardId),
    /// Two distinct endpoints chosen
    Connected { start: CardId, end: CardId },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionTracker {
    pending: Option<CardId>,
}

impl ConnectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<CardId> {
        self.pending
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }

    /// Feed a click on the connection point of `id`.
    /// Every second click returns the tracker to idle.
    pub fn click(&mut self, id: CardId) -> ConnectOutcome {
        match self.pending.take() {
            None => {
                self.pending = Some(id);
                ConnectOutcome::Pending(id)
            }
            Some(start) if start == id => ConnectOutcome::SelfRejected(id),
            Some(start) => ConnectOutcome::Connected { start, end: id },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_click_pends() {
        let mut tracker = ConnectionTracker::new();
        assert!(tracker.is_idle());
        assert_eq!(tracker.click(3), ConnectOutcome::Pending(3));
        assert_eq!(tracker.pending(), Some(3));
    }

    #[test]
    fn test_same_id_rejected() {
        let mut tracker = ConnectionTracker::new();
        tracker.click(1);
        assert_eq!(tracker.click(1), ConnectOutcome::SelfRejected(1));
        assert!(tracker.is_idle());
    }

    #[test]
    fn test_distinct_ids_connect() {
        let mut tracker = ConnectionTracker::new();
        tracker.click(1);
        assert_eq!(tracker.click(0), ConnectOutcome::Connected { start: 1, end: 0 });
        assert!(tracker.is_idle());

        // Next click starts over
        assert_eq!(tracker.click(0), ConnectOutcome::Pending(0));
    }
}
