//! Command-line interface for echogrid.

use clap::{Parser, ValueEnum};

/// EchoGrid - tic-tac-toe where coin tosses decide what a turn can do
#[derive(Parser, Debug)]
#[command(name = "echogrid")]
#[command(about = "Console tic-tac-toe with coin-toss turns and contested squares", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Who sits at the two seats.
    #[arg(long, value_enum, default_value = "human-ai")]
    pub mode: Mode,

    /// RNG seed for a reproducible match. Random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the pacing pauses between beats.
    #[arg(long)]
    pub fast: bool,
}

/// Seat assignment for the match.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Human as Player One against the AI.
    HumanAi,
    /// Two humans at one console.
    HumanHuman,
    /// Two AIs; sit back and watch.
    AiAi,
}
