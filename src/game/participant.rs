//! Participant trait and the AI seat.
//!
//! A participant is whoever answers for one side of the board: a human
//! behind the console prompts, the heuristic AI, or a scripted double
//! in tests. The engine only ever talks to this trait; raw input
//! handling never reaches it.

use super::ai;
use super::rng::{GameRng, RandomSource};
use super::turn::{Intent, TurnKind};
use super::{Board, Cell, Player, TossCall};
use anyhow::Result;
use tracing::debug;

/// Context for a toss call, so prompts can say what is at stake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TossPrompt {
    /// The coin that decides the turn kind.
    TurnCoin,
    /// The defense toss for a contested cell.
    Defense(Cell),
}

/// One seat at the board.
pub trait Participant {
    /// The participant's display name.
    fn name(&self) -> &str;

    /// Supplies a call before a coin is drawn.
    fn call_toss(&mut self, prompt: TossPrompt) -> Result<TossCall>;

    /// Chooses the action for this turn. A normal turn must yield a
    /// place intent; input collaborators enforce this before the
    /// resolver sees it.
    fn choose_intent(&mut self, board: &Board, kind: TurnKind) -> Result<Intent>;
}

/// The heuristic AI behind a seat.
///
/// Owns a forked RNG stream so its tie-breaks and toss guesses do not
/// perturb the match-level dice and coins.
pub struct AiParticipant {
    name: String,
    side: Player,
    rng: GameRng,
}

impl AiParticipant {
    /// Creates an AI seat for the given side.
    pub fn new(name: impl Into<String>, side: Player, rng: GameRng) -> Self {
        Self {
            name: name.into(),
            side,
            rng,
        }
    }
}

impl Participant for AiParticipant {
    fn name(&self) -> &str {
        &self.name
    }

    fn call_toss(&mut self, prompt: TossPrompt) -> Result<TossCall> {
        // A coin call carries no information worth modeling; guess.
        let call = self.rng.flip_coin();
        debug!(ai = %self.name, ?prompt, ?call, "AI calls the toss");
        Ok(call)
    }

    fn choose_intent(&mut self, board: &Board, kind: TurnKind) -> Result<Intent> {
        let intent = ai::choose_intent(board, self.side, kind, &mut self.rng)?;
        debug!(ai = %self.name, ?intent, "AI chose its action");
        Ok(intent)
    }
}
