//! CLI command implementations

pub mod analyze;
pub mod evaluate;
pub mod export;
pub mod play;

use clap::ValueEnum;

use crate::engine::Player;

/// A side of the game, as a CLI argument
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Side {
    X,
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}
