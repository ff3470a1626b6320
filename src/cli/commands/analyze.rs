//! Analyze command - Optimal-play report for a position

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::{
    cli::output::{print_kv, print_section},
    engine::{Board, Outcome, search},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum ReportMode {
    /// Report the single canonical optimal action
    Single,
    /// Report every minimax-equivalent action
    Full,
}

#[derive(Parser, Debug)]
#[command(about = "Analyze a position with exhaustive minimax")]
pub struct AnalyzeArgs {
    /// Board as 9 cells row-major ('.', 'X', 'O'); defaults to the empty board
    pub board: Option<String>,

    /// How many optimal actions to report
    #[arg(long, value_enum, default_value_t = ReportMode::Single)]
    pub mode: ReportMode,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = match &args.board {
        Some(s) => Board::from_string(s)?,
        None => Board::new(),
    };

    print_section("Position");
    println!("{board}");

    match board.outcome() {
        Outcome::Win(winner) => {
            print_kv("Outcome", &format!("{winner:?} has won"));
            return Ok(());
        }
        Outcome::Draw => {
            print_kv("Outcome", "draw");
            return Ok(());
        }
        Outcome::InProgress => {}
    }

    print_kv("To move", &format!("{:?}", board.to_move()));
    print_kv("Value", &search::value(&board)?.to_string());

    match args.mode {
        ReportMode::Single => {
            let (action, _) = search::best_evaluation(&board)?
                .ok_or_else(|| anyhow::anyhow!("live board has no evaluation"))?;
            print_kv("Best action", &action.to_string());
        }
        ReportMode::Full => {
            let evaluations = search::evaluate_actions(&board)?;
            let best_value = search::value(&board)?;
            println!("\nOptimal actions (all minimax-equivalent):");
            for (action, value) in evaluations {
                if value == best_value {
                    println!("  - {action}");
                }
            }
        }
    }

    Ok(())
}
