//! Play command - Interactive game against the engine

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use super::Side;
use crate::engine::{Action, Game, Outcome, Player, search};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game against the engine")]
pub struct PlayArgs {
    /// Side the human plays (X moves first)
    #[arg(long = "as", value_enum, default_value_t = Side::X)]
    pub side: Side,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let human: Player = args.side.into();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("You play {human:?}. Enter moves as `row col` (zero-based).");

    let mut game = Game::new();
    loop {
        println!("\n{}", game.board());

        match game.outcome() {
            Outcome::InProgress => {}
            Outcome::Win(winner) if winner == human => {
                println!("\nYou win!");
                break;
            }
            Outcome::Win(_) => {
                println!("\nThe engine wins.");
                break;
            }
            Outcome::Draw => {
                println!("\nDraw.");
                break;
            }
        }

        if game.board().to_move() == human {
            let action = prompt_action(&mut input)?;
            if let Err(err) = game.play(action) {
                println!("Illegal move: {err}");
                continue;
            }
        } else {
            let action = search::best_move(game.board())?
                .ok_or_else(|| anyhow::anyhow!("engine found no move on a live board"))?;
            println!("Engine plays {action}");
            game.play(action)?;
        }
    }

    Ok(())
}

/// Read actions from the input until one parses
fn prompt_action(input: &mut impl BufRead) -> Result<Action> {
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("input closed before the game finished");
        }

        match parse_action(line.trim()) {
            Some(action) => return Ok(action),
            None => println!("Enter two numbers 0-2 separated by a space, e.g. `1 2`."),
        }
    }
}

/// Parse `row col` (whitespace or comma separated) into an action
fn parse_action(s: &str) -> Option<Action> {
    let mut parts = s.split(|c: char| c.is_whitespace() || c == ',').filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Action::new(row, col))
}
