//! Human seat over console line input.

use super::input::{self, ActionChoice};
use crate::game::participant::{Participant, TossPrompt};
use crate::game::turn::{Intent, TurnKind};
use crate::game::{Board, Player, TossCall};
use anyhow::Result;

/// A human player answering through console prompts.
pub struct HumanParticipant {
    name: String,
    side: Player,
}

impl HumanParticipant {
    /// Creates a human seat for the given side.
    pub fn new(name: impl Into<String>, side: Player) -> Self {
        Self {
            name: name.into(),
            side,
        }
    }
}

impl Participant for HumanParticipant {
    fn name(&self) -> &str {
        &self.name
    }

    fn call_toss(&mut self, prompt: TossPrompt) -> Result<TossCall> {
        let text = match prompt {
            TossPrompt::TurnCoin => {
                format!(" {}, call the toss (h/t): ", self.name)
            }
            TossPrompt::Defense(cell) => {
                format!(
                    " {}, your {} square is under attack! Call the defense toss (h/t): ",
                    self.name,
                    cell.label()
                )
            }
        };
        input::read_toss_call(&text)
    }

    fn choose_intent(&mut self, board: &Board, kind: TurnKind) -> Result<Intent> {
        let opponent_holds_cells = !board.cells_owned_by(self.side.opponent()).is_empty();
        if kind == TurnKind::Power && opponent_holds_cells {
            let choice = input::read_action_choice(&format!(
                " {}, power turn! Place (p) or conquer (c)? ",
                self.name
            ))?;
            if choice == ActionChoice::Conquer {
                // Any square may be targeted; a bad target forfeits the
                // turn, which is the player's risk to take.
                let cell = input::read_cell(board, " Which square to conquer (1-9)? ", false)?;
                return Ok(Intent::Conquer(cell));
            }
        }
        let cell = input::read_cell(board, " Which square to mark (1-9)? ", true)?;
        Ok(Intent::Place(cell))
    }
}
