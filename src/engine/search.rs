//! Exhaustive minimax search
//!
//! Two mutually recursive value functions walk the full game tree:
//! [`max_value`] is the highest utility X can force, [`min_value`] the lowest
//! utility O can force. The 3x3 tree is small enough that no pruning or
//! caching is needed; the fold over [`Board::legal_actions`] is an explicit
//! loop so bounds could be threaded through later without restructuring.

use super::board::{Action, Board, Player};
use crate::Result;

fn ensure_well_formed(board: &Board) -> Result<()> {
    let (x_count, o_count) = board.counts();
    if x_count == o_count || x_count == o_count + 1 {
        Ok(())
    } else {
        Err(crate::Error::MalformedBoard { x_count, o_count })
    }
}

/// Highest utility the maximizing player (X) can guarantee from this board
pub fn max_value(board: &Board) -> Result<i32> {
    if board.is_terminal() {
        return Ok(board.utility());
    }

    let mut best = i32::MIN;
    for action in board.legal_actions() {
        best = best.max(min_value(&board.apply(action)?)?);
    }
    Ok(best)
}

/// Lowest utility the minimizing player (O) can guarantee from this board
pub fn min_value(board: &Board) -> Result<i32> {
    if board.is_terminal() {
        return Ok(board.utility());
    }

    let mut best = i32::MAX;
    for action in board.legal_actions() {
        best = best.min(max_value(&board.apply(action)?)?);
    }
    Ok(best)
}

/// Minimax value of the position for the player to move.
///
/// On terminal boards this is [`Board::utility`].
///
/// # Errors
///
/// Returns [`crate::Error::MalformedBoard`] when the mark counts could not
/// arise from legal play.
pub fn value(board: &Board) -> Result<i32> {
    ensure_well_formed(board)?;
    match board.to_move() {
        Player::X => max_value(board),
        Player::O => min_value(board),
    }
}

/// Evaluate every legal action, in row-major order.
///
/// Each action is paired with the minimax value of the board it produces,
/// evaluated through the opposing value function. Empty on terminal boards.
///
/// # Errors
///
/// Returns [`crate::Error::MalformedBoard`] when the mark counts could not
/// arise from legal play.
pub fn evaluate_actions(board: &Board) -> Result<Vec<(Action, i32)>> {
    ensure_well_formed(board)?;
    if board.is_terminal() {
        return Ok(Vec::new());
    }

    let mover = board.to_move();
    let mut evaluations = Vec::new();
    for action in board.legal_actions() {
        let next = board.apply(action)?;
        let value = match mover {
            Player::X => min_value(&next)?,
            Player::O => max_value(&next)?,
        };
        evaluations.push((action, value));
    }
    Ok(evaluations)
}

/// The optimal action and its value for the player to move, or `None` when
/// the board is terminal.
///
/// X picks the action maximizing [`min_value`] of the result, O the action
/// minimizing [`max_value`]. Ties break to the first action in row-major
/// order, so the choice is deterministic.
pub fn best_evaluation(board: &Board) -> Result<Option<(Action, i32)>> {
    let mover = board.to_move();
    let mut best: Option<(Action, i32)> = None;

    for (action, value) in evaluate_actions(board)? {
        let better = match best {
            None => true,
            Some((_, best_value)) => match mover {
                Player::X => value > best_value,
                Player::O => value < best_value,
            },
        };
        if better {
            best = Some((action, value));
        }
    }

    Ok(best)
}

/// The minimax-optimal action for the player to move, or `None` when the
/// board is terminal. See [`best_evaluation`].
pub fn best_move(board: &Board) -> Result<Option<Action>> {
    Ok(best_evaluation(board)?.map(|(action, _)| action))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_drawn() {
        // Perfect play from the empty board is a draw
        assert_eq!(value(&Board::new()).unwrap(), 0);
    }

    #[test]
    fn test_best_move_completes_a_line() {
        // X to move with XX. on the top row wins at (0, 2)
        let board = Board::from_string("XX. OO. ...").unwrap();
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(best_move(&board).unwrap(), Some(Action::new(0, 2)));
        assert_eq!(value(&board).unwrap(), 1);
    }

    #[test]
    fn test_best_move_blocks_a_threat() {
        // O to move; X threatens (0, 2)
        let board = Board::from_string("XX. .O. ...").unwrap();
        assert_eq!(board.to_move(), Player::O);
        assert_eq!(best_move(&board).unwrap(), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_terminal_board_has_no_best_move() {
        let won = Board::from_string("XXX OO. ...").unwrap();
        assert_eq!(best_move(&won).unwrap(), None);

        let drawn = Board::from_string("XOX XOX OXO").unwrap();
        assert_eq!(best_move(&drawn).unwrap(), None);
        assert_eq!(value(&drawn).unwrap(), 0);
    }

    #[test]
    fn test_malformed_board_is_rejected() {
        let mut board = Board::new();
        board.cells[0][0] = super::super::board::Cell::X;
        board.cells[0][1] = super::super::board::Cell::X;
        board.cells[0][2] = super::super::board::Cell::X;

        assert!(matches!(
            best_move(&board),
            Err(crate::Error::MalformedBoard { .. })
        ));
        assert!(value(&board).is_err());
        assert!(evaluate_actions(&board).is_err());
    }

    #[test]
    fn test_evaluations_follow_row_major_order() {
        let board = Board::from_string("X.. .O. ...").unwrap();
        let evaluations = evaluate_actions(&board).unwrap();
        assert_eq!(evaluations.len(), 7);
        assert_eq!(evaluations[0].0, Action::new(0, 1));
        assert_eq!(evaluations[6].0, Action::new(2, 2));
    }
}
