//! Export command - Optimal-policy table for every reachable position

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::{
    cli::output::{create_export_progress, format_number},
    engine::{Board, reachable_boards, search},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(about = "Export the optimal policy for every reachable position")]
pub struct ExportArgs {
    /// Output file
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,
}

/// One position with its optimal action
#[derive(Debug, Serialize)]
pub struct PolicyRecord {
    /// 9-character row-major board encoding
    pub board: String,
    pub to_move: String,
    /// Minimax value of the position
    pub value: i32,
    pub best_row: usize,
    pub best_col: usize,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    println!("Enumerating reachable positions...");
    let boards: Vec<Board> = reachable_boards()
        .into_iter()
        .filter(|board| !board.is_terminal())
        .collect();
    println!(
        "Computing the optimal policy for {} positions...",
        format_number(boards.len())
    );

    let progress = create_export_progress(boards.len() as u64)?;
    let mut records = Vec::with_capacity(boards.len());

    for board in &boards {
        let (action, value) = search::best_evaluation(board)?
            .ok_or_else(|| anyhow::anyhow!("non-terminal board has no evaluation"))?;
        records.push(PolicyRecord {
            board: board.encode(),
            to_move: format!("{:?}", board.to_move()),
            value,
            best_row: action.row,
            best_col: action.col,
        });
        progress.inc(1);
    }
    progress.finish();

    match args.format {
        ExportFormat::Json => write_json(&records, &args.output)?,
        ExportFormat::Csv => write_csv(&records, &args.output)?,
    }

    println!(
        "Exported {} policy entries to: {}",
        format_number(records.len()),
        args.output.display()
    );
    Ok(())
}

#[derive(Serialize)]
struct PolicyExport<'a> {
    description: &'static str,
    total_positions: usize,
    policy: &'a [PolicyRecord],
}

fn write_json(records: &[PolicyRecord], path: &PathBuf) -> Result<()> {
    let export = PolicyExport {
        description: "Optimal (minimax) policy for tic-tac-toe",
        total_positions: records.len(),
        policy: records,
    };

    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &export)?;
    Ok(())
}

fn write_csv(records: &[PolicyRecord], path: &PathBuf) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
