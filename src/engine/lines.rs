//! Winning line analysis

use super::board::{Action, Board, Cell, Player};

/// The eight winning lines as (row, col) triples, in checking order:
/// rows top-to-bottom, columns left-to-right, main diagonal, anti-diagonal.
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// The player holding all three cells of a line, if any
pub fn line_owner(board: &Board, line: &[(usize, usize); 3]) -> Option<Player> {
    let first = board.get(line[0].0, line[0].1);
    if first == Cell::Empty {
        return None;
    }
    if line[1..]
        .iter()
        .all(|&(row, col)| board.get(row, col) == first)
    {
        first.to_player()
    } else {
        None
    }
}

/// Find all actions that would immediately complete a line for the player
/// (two own marks plus one empty cell), in line-checking order.
pub fn winning_actions(board: &Board, player: Player) -> Vec<Action> {
    let mut actions = Vec::new();
    for line in &WINNING_LINES {
        if let Some(action) = winning_action_in_line(board, player, line)
            && !actions.contains(&action)
        {
            actions.push(action);
        }
    }
    actions
}

/// Find the completing action in a specific line, if one exists
fn winning_action_in_line(
    board: &Board,
    player: Player,
    line: &[(usize, usize); 3],
) -> Option<Action> {
    let target = player.to_cell();
    let mut count = 0;
    let mut empty = None;

    for &(row, col) in line {
        match board.get(row, col) {
            Cell::Empty => {
                if empty.is_some() {
                    // More than one empty cell, not a completing move
                    return None;
                }
                empty = Some(Action::new(row, col));
            }
            c if c == target => count += 1,
            _ => return None, // Opponent mark in line
        }
    }

    if count == 2 { empty } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_owner() {
        let board = Board::from_string("XXX OO. ...").unwrap();
        assert_eq!(line_owner(&board, &WINNING_LINES[0]), Some(Player::X));
        assert_eq!(line_owner(&board, &WINNING_LINES[1]), None);
        assert_eq!(line_owner(&board, &WINNING_LINES[3]), None);
    }

    #[test]
    fn test_winning_actions_single() {
        // X.X on the top row completes at (0, 1)
        let board = Board::from_string("X.X .O. ...").unwrap();
        let actions = winning_actions(&board, Player::X);
        assert_eq!(actions, vec![Action::new(0, 1)]);
    }

    #[test]
    fn test_winning_actions_fork() {
        // XX. / X.. / ... completes the top row at (0, 2) and the left
        // column at (2, 0)
        let board = Board::from_string("XX. X.. .OO").unwrap();
        let actions = winning_actions(&board, Player::X);
        assert_eq!(actions.len(), 2);
        assert!(actions.contains(&Action::new(0, 2)));
        assert!(actions.contains(&Action::new(2, 0)));
    }

    #[test]
    fn test_no_winning_action() {
        let board = Board::from_string("X.. .O. ...").unwrap();
        assert!(winning_actions(&board, Player::X).is_empty());
        assert!(winning_actions(&board, Player::O).is_empty());
    }
}
