//! Game progress tracking

use serde::{Deserialize, Serialize};

use super::board::{Action, Board, Player};
use crate::Result;

/// A move that has been played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// The status of a position: still being played, won, or drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl Board {
    /// Classify the position
    pub fn outcome(&self) -> Outcome {
        if let Some(winner) = self.winner() {
            Outcome::Win(winner)
        } else if self.legal_actions().is_empty() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

/// A game in progress, with its move history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    moves: Vec<Move>,
}

impl Game {
    /// Start a new game from the empty board
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            moves: Vec::new(),
        }
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The moves played so far
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Play a move for whoever's turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has ended, and the
    /// usual [`Board::apply`] errors for illegal actions; the game state is
    /// unchanged on error.
    pub fn play(&mut self, action: Action) -> Result<()> {
        if self.outcome().is_over() {
            return Err(crate::Error::GameOver);
        }

        let player = self.board.to_move();
        self.board = self.board.apply(action)?;
        self.moves.push(Move { action, player });
        Ok(())
    }

    /// Outcome of the game so far
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
