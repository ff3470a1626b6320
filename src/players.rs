//! Move-selection strategies for driving games

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    Error, Result,
    engine::{Action, Board, lines, search},
};

/// A source of moves for one side of a game
pub trait Strategy {
    /// Pick an action on the given board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoActions`] when the board has no legal
    /// action left.
    fn choose(&mut self, board: &Board) -> Result<Action>;

    /// Human-readable name for reports
    fn name(&self) -> &str;

    /// Reseed the strategy's randomness, if it has any
    fn reseed(&mut self, _seed: u64) {}
}

/// Perfect play via exhaustive minimax
pub struct Perfect {
    name: String,
}

impl Perfect {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Strategy for Perfect {
    fn choose(&mut self, board: &Board) -> Result<Action> {
        search::best_move(board)?.ok_or(Error::NoActions)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Uniform random baseline
pub struct Random {
    name: String,
    rng: StdRng,
}

impl Random {
    /// Create a new random strategy
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(rand::random()),
        }
    }

    /// Create a new random strategy with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for Random {
    fn choose(&mut self, board: &Board) -> Result<Action> {
        let actions = board.legal_actions();
        if actions.is_empty() {
            return Err(Error::NoActions);
        }
        let index = self.rng.random_range(0..actions.len());
        Ok(actions[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

/// Blocks immediate opponent wins, otherwise plays randomly.
///
/// This strategy does NOT try to win itself, only to deny the opponent's
/// completing move. It is the weakest baseline that still punishes naive
/// play.
pub struct Defensive {
    name: String,
    rng: StdRng,
}

impl Defensive {
    /// Create a new defensive strategy
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(rand::random()),
        }
    }

    /// Create a defensive strategy with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for Defensive {
    fn choose(&mut self, board: &Board) -> Result<Action> {
        let opponent = board.to_move().opponent();
        if let Some(&block) = lines::winning_actions(board, opponent).first() {
            return Ok(block);
        }

        let actions = board.legal_actions();
        if actions.is_empty() {
            return Err(Error::NoActions);
        }
        let index = self.rng.random_range(0..actions.len());
        Ok(actions[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}
