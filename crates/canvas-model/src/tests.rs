//! Board Scenario Tests
//!
//! End-to-end action sequences against a fresh board.

#[cfg(test)]
mod tests {
    use crate::{Action, AnchorLocator, Board, CardId, ConnectOutcome, Outcome, Point, ViewTransform};

    fn setup_board(cards: usize) -> Board {
        let mut board = Board::default();
        for i in 0..cards {
            board.apply(Action::AddCard { position: Point::new(i as f64 * 250.0, 100.0) });
        }
        board
    }

    /// Places every visible card's anchor at `(id, id)`; other cards cannot be located
    struct PartialAnchors<'a> {
        visible: &'a [CardId],
    }

    impl AnchorLocator for PartialAnchors<'_> {
        fn locate(&self, id: CardId) -> Option<Point> {
            self.visible.contains(&id).then(|| Point::new(id as f64, id as f64))
        }
    }

    #[test]
    fn test_ids_in_creation_order() {
        let mut board = Board::default();
        let mut ids = Vec::new();
        for i in 0..5 {
            if let Outcome::CardAdded(id) = board.apply(Action::AddCard { position: Point::ORIGIN }) {
                ids.push(id);
            }
            // Interleaved moves do not disturb numbering
            board.apply(Action::MoveCard { id: 0, position: Point::new(i as f64, i as f64) });
        }
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        let listed: Vec<CardId> = board.cards().map(|card| card.id).collect();
        assert_eq!(listed, ids);
    }

    #[test]
    fn test_move_then_read() {
        let mut board = setup_board(2);
        let outcome = board.apply(Action::MoveCard { id: 1, position: Point::new(33.0, 44.0) });
        assert_eq!(outcome, Outcome::CardMoved { id: 1, refreshed: 0 });
        assert_eq!(board.card(1).unwrap().position, Point::new(33.0, 44.0));
    }

    #[test]
    fn test_move_unknown_card() {
        let mut board = setup_board(1);
        assert_eq!(
            board.apply(Action::MoveCard { id: 9, position: Point::ORIGIN }),
            Outcome::UnknownCard(9)
        );
        assert_eq!(board.card_count(), 1);
    }

    #[test]
    fn test_first_click_only_pends() {
        let mut board = setup_board(2);
        let outcome = board.apply(Action::ClickConnection { id: 0 });
        assert_eq!(outcome, Outcome::Connection(ConnectOutcome::Pending(0)));
        assert_eq!(board.pending(), Some(0));
        assert!(board.arrows().is_empty());
    }

    #[test]
    fn test_self_connection_rejected() {
        let mut board = setup_board(2);
        board.apply(Action::ClickConnection { id: 1 });
        let outcome = board.apply(Action::ClickConnection { id: 1 });
        assert_eq!(outcome, Outcome::Connection(ConnectOutcome::SelfRejected(1)));
        assert_eq!(board.pending(), None);
        assert!(board.arrows().is_empty());
    }

    #[test]
    fn test_click_unknown_card_ignored() {
        let mut board = setup_board(1);
        board.apply(Action::ClickConnection { id: 0 });
        assert_eq!(board.apply(Action::ClickConnection { id: 7 }), Outcome::UnknownCard(7));
        // Pending selection survives the stray click
        assert_eq!(board.pending(), Some(0));
        assert!(board.arrows().is_empty());
    }

    #[test]
    fn test_connect_then_move() {
        let mut board = setup_board(2);
        board.apply(Action::ClickConnection { id: 1 });
        let outcome = board.apply(Action::ClickConnection { id: 0 });
        assert_eq!(outcome, Outcome::Connection(ConnectOutcome::Connected { start: 1, end: 0 }));
        assert_eq!(board.pending(), None);
        assert_eq!(board.arrows().len(), 1);

        let arrow = &board.arrows()[0];
        assert_eq!((arrow.start_id, arrow.end_id), (1, 0));
        assert_eq!(arrow.start_point, Point::new(360.0, 98.0));
        assert_eq!(arrow.end_point, Point::new(110.0, 98.0));

        let outcome = board.apply(Action::MoveCard { id: 0, position: Point::new(500.0, 300.0) });
        assert_eq!(outcome, Outcome::CardMoved { id: 0, refreshed: 1 });

        let arrow = &board.arrows()[0];
        assert_eq!((arrow.start_id, arrow.end_id), (1, 0));
        assert_eq!(arrow.start_point, Point::new(360.0, 98.0));
        assert_eq!(arrow.end_point, Point::new(610.0, 298.0));
        assert_eq!(board.anchor_of(0), Some(arrow.end_point));
    }

    #[test]
    fn test_resize_moves_arrow_endpoint() {
        let mut board = setup_board(2);
        board.apply(Action::ClickConnection { id: 1 });
        board.apply(Action::ClickConnection { id: 0 });
        let start_before = board.arrows()[0].start_point;

        let outcome = board.apply(Action::ResizeCard { id: 0, size: Point::new(400.0, 150.0) });
        assert_eq!(outcome, Outcome::CardResized { id: 0, refreshed: 1 });

        let arrow = &board.arrows()[0];
        assert_eq!((arrow.start_id, arrow.end_id), (1, 0));
        assert_eq!(arrow.start_point, start_before);
        // Anchor sits at half the new width
        assert_eq!(arrow.end_point, Point::new(210.0, 98.0));
        assert_eq!(board.card(0).unwrap().position, Point::new(0.0, 100.0));
    }

    #[test]
    fn test_resize_clamps_and_ignores_unknown() {
        let mut board = setup_board(1);
        board.apply(Action::ResizeCard { id: 0, size: Point::new(5.0, 5.0) });
        assert_eq!(board.card(0).unwrap().size, Point::new(60.0, 60.0));

        assert_eq!(
            board.apply(Action::ResizeCard { id: 3, size: Point::new(300.0, 300.0) }),
            Outcome::UnknownCard(3)
        );
    }

    #[test]
    fn test_drag_target() {
        let board = setup_board(2);
        // Card 1 starts at (250, 100)
        assert_eq!(board.drag_target(1, 30.0, 45.0), Some(Point::new(280.0, 145.0)));
        assert_eq!(board.drag_target(1, -300.0, -20.0), Some(Point::new(-50.0, 80.0)));
        assert_eq!(board.drag_target(1, 0.0, 0.0), Some(Point::new(250.0, 100.0)));
        assert_eq!(board.drag_target(8, 10.0, 10.0), None);

        // Committing the target moves the card exactly there
        let mut board = board;
        let target = board.drag_target(1, -12.0, 7.0).unwrap();
        board.apply(Action::MoveCard { id: 1, position: target });
        assert_eq!(board.card(1).unwrap().position, Point::new(238.0, 107.0));
    }

    #[test]
    fn test_resize_target() {
        let board = setup_board(1);
        assert_eq!(board.resize_target(0, 50.0, 20.0), Some(Point::new(250.0, 120.0)));
        assert_eq!(board.resize_target(0, -30.0, -10.0), Some(Point::new(170.0, 90.0)));
        assert_eq!(board.resize_target(0, 0.0, 0.0), Some(Point::new(200.0, 100.0)));
        // Shrinks no further than the minimum side
        assert_eq!(board.resize_target(0, -500.0, -500.0), Some(Point::new(60.0, 60.0)));
        assert_eq!(board.resize_target(4, 1.0, 1.0), None);
    }

    #[test]
    fn test_arrows_are_append_only() {
        let mut board = setup_board(3);
        for (a, b) in [(0, 1), (1, 2), (0, 1)] {
            board.apply(Action::ClickConnection { id: a });
            board.apply(Action::ClickConnection { id: b });
        }
        let pairs: Vec<(CardId, CardId)> = board.arrows().iter().map(|a| (a.start_id, a.end_id)).collect();
        // Duplicates are allowed
        assert_eq!(pairs, vec![(0, 1), (1, 2), (0, 1)]);
    }

    #[test]
    fn test_unlocatable_endpoint_keeps_stale_coordinates() {
        let mut board = setup_board(3);
        for (a, b) in [(0, 1), (1, 2)] {
            board.apply(Action::ClickConnection { id: a });
            board.apply(Action::ClickConnection { id: b });
        }
        let before = board.arrows().to_vec();

        // Card 2 cannot be located
        let locator = PartialAnchors { visible: &[0, 1] };
        assert_eq!(board.recompute_arrows_with(&locator), 1);

        assert_eq!(board.arrows()[0].start_point, Point::new(0.0, 0.0));
        assert_eq!(board.arrows()[0].end_point, Point::new(1.0, 1.0));
        assert_eq!(board.arrows()[1], before[1]);
    }

    #[test]
    fn test_transform_moves_arrows() {
        let mut board = setup_board(2);
        board.apply(Action::ClickConnection { id: 0 });
        board.apply(Action::ClickConnection { id: 1 });

        board.set_transform(ViewTransform::translate(Point::new(0.0, 40.0)));
        assert_eq!(board.arrows()[0].start_point, Point::new(110.0, 138.0));
        assert_eq!(board.arrows()[0].end_point, Point::new(360.0, 138.0));
    }

    #[test]
    fn test_detail_viewer() {
        let mut board = setup_board(2);
        assert_eq!(board.detail(), None);

        assert_eq!(board.apply(Action::ShowMore { id: 1 }), Outcome::DetailShown(1));
        assert_eq!(board.detail(), Some("Card 2 - This is some dummy text."));

        board.apply(Action::ShowMore { id: 0 });
        assert_eq!(board.detail(), Some("Card 1 - This is some dummy text."));

        assert_eq!(board.apply(Action::Dismiss), Outcome::DetailDismissed);
        assert_eq!(board.detail(), None);

        assert_eq!(board.apply(Action::ShowMore { id: 5 }), Outcome::UnknownCard(5));
        assert_eq!(board.detail(), None);
    }
}
