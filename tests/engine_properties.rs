//! Test suite for the board model
//! Validates game-rule invariants across the whole reachable state space

use oxo::engine::{Action, Board, Cell, Player, reachable_boards};

mod turn_alternation {
    use super::*;

    #[test]
    fn to_move_flips_after_every_legal_move() {
        for board in reachable_boards() {
            if board.is_terminal() {
                continue;
            }
            let mover = board.to_move();
            for action in board.legal_actions() {
                let next = board.apply(action).unwrap();
                assert_eq!(
                    next.to_move(),
                    mover.opponent(),
                    "turn did not alternate after {action} on {}",
                    board.encode()
                );
            }
        }
    }

    #[test]
    fn mark_counts_stay_balanced() {
        for board in reachable_boards() {
            let x_count = board
                .cells
                .iter()
                .flatten()
                .filter(|&&c| c == Cell::X)
                .count();
            let o_count = board
                .cells
                .iter()
                .flatten()
                .filter(|&&c| c == Cell::O)
                .count();
            assert!(
                x_count == o_count || x_count == o_count + 1,
                "unbalanced counts on {}",
                board.encode()
            );
        }
    }
}

mod move_application {
    use super::*;

    #[test]
    fn apply_never_mutates_the_input() {
        let board = Board::from_string("X.. .O. ...").unwrap();
        let snapshot = board;

        for action in board.legal_actions() {
            board.apply(action).unwrap();
        }
        board.apply(Action::new(0, 0)).unwrap_err();
        board.apply(Action::new(3, 3)).unwrap_err();

        assert_eq!(board, snapshot);
    }

    #[test]
    fn occupied_cells_always_reject_moves() {
        for board in reachable_boards() {
            for row in 0..3 {
                for col in 0..3 {
                    if board.get(row, col) == Cell::Empty {
                        continue;
                    }
                    let before = board;
                    let result = board.apply(Action::new(row, col));
                    assert!(
                        matches!(result, Err(oxo::Error::OccupiedCell { .. })),
                        "occupied ({row}, {col}) accepted on {}",
                        board.encode()
                    );
                    assert_eq!(board, before);
                }
            }
        }
    }

    #[test]
    fn out_of_range_coordinates_reject_moves() {
        let board = Board::new();
        for action in [
            Action::new(3, 0),
            Action::new(0, 3),
            Action::new(3, 3),
            Action::new(usize::MAX, 1),
        ] {
            assert!(matches!(
                board.apply(action),
                Err(oxo::Error::OutOfRange { .. })
            ));
        }
    }
}

mod winners {
    use super::*;

    #[test]
    fn every_line_is_detected() {
        let lined = [
            ("XXX OO. ...", Player::X),
            ("OO. XXX ...", Player::X),
            ("OO. ... XXX", Player::X),
            ("OX. OX. O.X", Player::O),
            ("XOX .O. .OX", Player::O),
            ("X.O XXO ..O", Player::O),
            ("X.O .XO ..X", Player::X),
            ("XXO XO. O..", Player::O),
        ];
        for (s, expected) in lined {
            let board = Board::from_string(s).unwrap();
            assert_eq!(board.winner(), Some(expected), "no winner found in {s}");
            assert!(board.is_terminal());
        }
    }

    #[test]
    fn boards_without_a_line_have_no_winner() {
        for s in ["........." , "XOX XOX OXO", "X.O .X. ..O"] {
            let board = Board::from_string(s).unwrap();
            assert_eq!(board.winner(), None, "phantom winner in {s}");
        }
    }

    #[test]
    fn rows_are_checked_before_columns_and_diagonals() {
        // Hand-built position where both players hold a line; rows come
        // first in the checking order, so X's top row decides
        let board = Board::from_string("XXX OOO ...").unwrap();
        assert_eq!(board.winner(), Some(Player::X));
    }
}

mod terminality {
    use super::*;

    #[test]
    fn full_boards_are_terminal_regardless_of_winner() {
        let drawn = Board::from_string("XOX XOX OXO").unwrap();
        assert!(drawn.legal_actions().is_empty());
        assert!(drawn.is_terminal());
        assert!(drawn.is_draw());

        let won_and_full = Board::from_string("XXX OOX OXO").unwrap();
        assert!(won_and_full.legal_actions().is_empty());
        assert!(won_and_full.is_terminal());
        assert!(!won_and_full.is_draw());
    }

    #[test]
    fn legal_actions_empty_only_on_full_boards() {
        for board in reachable_boards() {
            let empties = board
                .cells
                .iter()
                .flatten()
                .filter(|&&c| c == Cell::Empty)
                .count();
            assert_eq!(board.legal_actions().len(), empties);
        }
    }
}

mod state_space {
    use super::*;

    #[test]
    fn exactly_5478_boards_are_reachable() {
        let boards = reachable_boards();
        assert_eq!(boards.len(), 5478);
    }

    #[test]
    fn every_reachable_board_is_valid() {
        for board in reachable_boards() {
            assert!(board.is_valid(), "unreachable board produced: {}", board.encode());
        }
    }
}
