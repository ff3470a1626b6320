//! Evaluate command - Run the engine against a baseline opponent

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde::Serialize;

use super::Side;
use crate::{
    cli::output::{create_series_progress, print_kv, print_section},
    engine::Player,
    players::{Defensive, Perfect, Random, Strategy},
    series::{SeriesConfig, SeriesResult, SeriesRunner},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OpponentKind {
    /// Uniform random baseline
    Random,
    /// Blocks immediate wins, otherwise random
    Defensive,
}

impl OpponentKind {
    fn as_str(&self) -> &'static str {
        match self {
            OpponentKind::Random => "random",
            OpponentKind::Defensive => "defensive",
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Evaluate the engine against a baseline opponent")]
pub struct EvaluateArgs {
    /// Opponent to evaluate against
    #[arg(long, short = 'o', value_enum, default_value_t = OpponentKind::Random)]
    pub opponent: OpponentKind,

    /// Number of evaluation games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Side the engine plays
    #[arg(long = "engine-as", value_enum, default_value_t = Side::X)]
    pub engine_as: Side,

    /// Export results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let engine_side: Player = args.engine_as.into();

    let mut engine = Perfect::new("Minimax");
    let mut opponent: Box<dyn Strategy> = match args.opponent {
        OpponentKind::Random => Box::new(Random::new("Random")),
        OpponentKind::Defensive => Box::new(Defensive::new("Defensive")),
    };

    print_section("Evaluation");
    print_kv("Opponent", opponent.name());
    print_kv("Engine plays", &format!("{engine_side:?}"));
    print_kv("Games", &args.games.to_string());
    if let Some(seed) = args.seed {
        print_kv("Seed", &seed.to_string());
    }

    let config = SeriesConfig {
        games: args.games,
        seed: args.seed,
        perspective: engine_side,
    };

    let progress = create_series_progress(args.games as u64)?;
    let runner = SeriesRunner::new(config).with_progress(progress);

    let result = match engine_side {
        Player::X => runner.run(&mut engine, opponent.as_mut())?,
        Player::O => runner.run(opponent.as_mut(), &mut engine)?,
    };

    print_section("Results");
    print_kv(
        "Wins",
        &format!("{} ({:.1}%)", result.wins, result.win_rate * 100.0),
    );
    print_kv(
        "Draws",
        &format!("{} ({:.1}%)", result.draws, result.draw_rate * 100.0),
    );
    print_kv(
        "Losses",
        &format!("{} ({:.1}%)", result.losses, result.loss_rate * 100.0),
    );

    if let Some(path) = &args.export {
        export_results(&result, &args, path)?;
        println!("\nResults exported to: {}", path.display());
    }

    Ok(())
}

/// Export evaluation results to JSON
fn export_results(result: &SeriesResult, args: &EvaluateArgs, path: &PathBuf) -> Result<()> {
    use std::fs::File;

    #[derive(Serialize)]
    struct EvaluationExport<'a> {
        opponent: &'a str,
        engine_side: String,
        games: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
        result: &'a SeriesResult,
    }

    let export = EvaluationExport {
        opponent: args.opponent.as_str(),
        engine_side: format!("{:?}", Player::from(args.engine_as)),
        games: args.games,
        seed: args.seed,
        result,
    };

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &export)?;
    Ok(())
}
