//! Perfect-play tic-tac-toe engine
//!
//! This crate provides:
//! - Complete tic-tac-toe board model with value semantics
//! - Exhaustive minimax search computing optimal moves
//! - Baseline strategies and a head-to-head series runner
//! - CLI for playing, analyzing, evaluating, and exporting the optimal policy

pub mod cli;
pub mod engine;
pub mod error;
pub mod players;
pub mod series;

pub use engine::{Action, Board, Cell, Game, Outcome, Player};
pub use error::{Error, Result};
