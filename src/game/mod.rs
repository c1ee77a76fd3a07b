//! The EchoGrid rules engine.
//!
//! A match is plain tic-tac-toe bent by chance: a coin toss decides
//! whether a turn may conquer an opponent square, a defense toss
//! decides whether a conquest lands, and dice decide who starts.

mod cell;
mod types;

pub mod ai;
pub mod director;
pub mod participant;
pub mod rng;
pub mod rules;
pub mod turn;
pub mod view;

pub use cell::Cell;
pub use types::{Board, BoardError, MatchResult, Player, Square, TossCall};
