//! Line-input prompts with re-prompt loops.
//!
//! All raw input parsing lives here. Anything returned to the engine
//! already satisfies its constraint (a cell index in range, an empty
//! cell when emptiness is required), so invalid input never surfaces
//! past this module.

use crate::game::{Board, Cell, TossCall};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// The action a human picked for a power turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionChoice {
    /// Place a mark on an empty cell.
    Place,
    /// Attempt to capture an opponent cell.
    Conquer,
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    std::io::stdout().flush().context("flushing prompt")?;
    let mut line = String::new();
    let read = std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading console input")?;
    anyhow::ensure!(read > 0, "console input closed");
    Ok(line.trim().to_string())
}

/// Prompts for a coin call until one parses.
pub fn read_toss_call(prompt: &str) -> Result<TossCall> {
    loop {
        let line = read_line(prompt)?;
        match line.to_lowercase().as_str() {
            "h" | "heads" | "1" => return Ok(TossCall::Heads),
            "t" | "tails" | "2" => return Ok(TossCall::Tails),
            other => {
                debug!(input = other, "unparseable toss call");
                println!(" Enter 'h' for heads or 't' for tails.");
            }
        }
    }
}

/// Prompts for the power-turn action until one parses.
pub fn read_action_choice(prompt: &str) -> Result<ActionChoice> {
    loop {
        let line = read_line(prompt)?;
        match line.to_lowercase().as_str() {
            "p" | "place" | "1" => return Ok(ActionChoice::Place),
            "c" | "conquer" | "2" => return Ok(ActionChoice::Conquer),
            other => {
                debug!(input = other, "unparseable action choice");
                println!(" Enter 'p' to place or 'c' to conquer.");
            }
        }
    }
}

/// Prompts for a cell number (1-9) until it parses and, when
/// `empty_required`, refers to an empty cell.
pub fn read_cell(board: &Board, prompt: &str, empty_required: bool) -> Result<Cell> {
    loop {
        let line = read_line(prompt)?;
        let Some(cell) = line
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=9).contains(n))
            .and_then(|n| Cell::from_index(n - 1))
        else {
            debug!(input = %line, "unparseable cell number");
            println!(" Enter a square number from 1 to 9.");
            continue;
        };
        if empty_required && !board.is_empty(cell) {
            println!(" That square is already taken. Pick an empty one.");
            continue;
        }
        return Ok(cell);
    }
}
