//! oxo CLI - Perfect-play tic-tac-toe toolkit
//!
//! This CLI provides a unified interface for:
//! - Playing interactive games against the engine
//! - Analyzing positions with exhaustive minimax
//! - Evaluating the engine against baseline opponents
//! - Exporting the optimal policy

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Perfect-play tic-tac-toe engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine
    Play(oxo::cli::commands::play::PlayArgs),

    /// Analyze a position with exhaustive minimax
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),

    /// Evaluate the engine against a baseline opponent
    Evaluate(oxo::cli::commands::evaluate::EvaluateArgs),

    /// Export the optimal policy for every reachable position
    Export(oxo::cli::commands::export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Analyze(args) => oxo::cli::commands::analyze::execute(args),
        Commands::Evaluate(args) => oxo::cli::commands::evaluate::execute(args),
        Commands::Export(args) => oxo::cli::commands::export::execute(args),
    }
}
