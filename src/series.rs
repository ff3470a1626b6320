//! Head-to-head series between two strategies

use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    engine::{Board, Outcome, Player},
    players::Strategy,
};

/// Series configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Number of games to play
    pub games: usize,

    /// Random seed; the O side gets `seed + 1` so the strategies never
    /// share a stream
    pub seed: Option<u64>,

    /// Side whose perspective the win/loss counts use
    pub perspective: Player,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
            perspective: Player::X,
        }
    }
}

/// Aggregate result of a series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesResult {
    pub total_games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
}

impl SeriesResult {
    pub fn new(total_games: usize, wins: usize, draws: usize, losses: usize) -> Self {
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
        }
    }

    /// Save the result to a JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// Play one game between strategies for X and O, returning the final outcome
pub fn play_game(x: &mut dyn Strategy, o: &mut dyn Strategy) -> Result<Outcome> {
    let mut board = Board::new();

    loop {
        match board.outcome() {
            Outcome::InProgress => {}
            outcome => return Ok(outcome),
        }

        let action = match board.to_move() {
            Player::X => x.choose(&board)?,
            Player::O => o.choose(&board)?,
        };
        board = board.apply(action)?;
    }
}

/// Plays a configured number of games and aggregates the outcomes
pub struct SeriesRunner {
    config: SeriesConfig,
    progress: Option<ProgressBar>,
}

impl SeriesRunner {
    /// Create a new series runner
    pub fn new(config: SeriesConfig) -> Self {
        Self {
            config,
            progress: None,
        }
    }

    /// Report progress through the given bar
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Run the series. Wins and losses are counted from the perspective of
    /// `config.perspective`.
    pub fn run(&self, x: &mut dyn Strategy, o: &mut dyn Strategy) -> Result<SeriesResult> {
        if let Some(seed) = self.config.seed {
            x.reseed(seed);
            o.reseed(seed.wrapping_add(1));
        }

        let mut wins = 0;
        let mut draws = 0;
        let mut losses = 0;

        for game_num in 0..self.config.games {
            match play_game(x, o)? {
                Outcome::Win(winner) if winner == self.config.perspective => wins += 1,
                Outcome::Win(_) => losses += 1,
                Outcome::Draw => draws += 1,
                Outcome::InProgress => unreachable!("play_game only returns finished games"),
            }

            if let Some(progress) = &self.progress {
                progress.set_position(game_num as u64 + 1);
                progress.set_message(format!("{wins} D:{draws} L:{losses}"));
            }
        }

        if let Some(progress) = &self.progress {
            progress.finish_with_message(format!("{wins} D:{draws} L:{losses}"));
        }

        Ok(SeriesResult::new(self.config.games, wins, draws, losses))
    }
}
