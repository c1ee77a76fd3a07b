//! Match lifecycle orchestration.
//!
//! The director owns the board, both seats, the match RNG, and the
//! view. One turn is in flight at a time; the loop structure, not
//! locks, enforces that.

use super::participant::{Participant, TossPrompt};
use super::rng::RandomSource;
use super::rules;
use super::turn::TurnResolver;
use super::view::MatchView;
use super::{Board, MatchResult, Player};
use anyhow::Result;
use tracing::{debug, info, instrument};

/// Drives one match from the starting roll to a terminal result.
pub struct GameDirector {
    board: Board,
    rng: Box<dyn RandomSource>,
    one: Box<dyn Participant>,
    two: Box<dyn Participant>,
    view: Box<dyn MatchView>,
}

impl GameDirector {
    /// Creates a director for a fresh board.
    pub fn new(
        one: Box<dyn Participant>,
        two: Box<dyn Participant>,
        rng: Box<dyn RandomSource>,
        view: Box<dyn MatchView>,
    ) -> Self {
        Self {
            board: Board::new(),
            rng,
            one,
            two,
            view,
        }
    }

    /// The current board state.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Rolls dice for both seats until the rolls differ; the strictly
    /// higher roll starts. No retry cap: ties re-roll indefinitely.
    #[instrument(skip(self))]
    pub fn decide_first_player(&mut self) -> Player {
        loop {
            let roll_one = self.rng.roll_die();
            let roll_two = self.rng.roll_die();
            self.view.first_roll(Player::One, self.one.name(), roll_one);
            self.view.first_roll(Player::Two, self.two.name(), roll_two);
            debug!(roll_one, roll_two, "starting rolls");

            if roll_one > roll_two {
                return Player::One;
            }
            if roll_two > roll_one {
                return Player::Two;
            }
            self.view.roll_tie(roll_one);
        }
    }

    /// Runs the match to completion and returns the result.
    ///
    /// # Errors
    ///
    /// Propagates participant input failures and collaborator contract
    /// breaches; rule violations never surface here.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<MatchResult> {
        let mut active = self.decide_first_player();
        let name = match active {
            Player::One => self.one.name(),
            Player::Two => self.two.name(),
        };
        info!(?active, name, "first player decided");
        self.view.first_player(active, name);

        loop {
            self.view.board(&self.board);

            let seat = match active {
                Player::One => self.one.as_mut(),
                Player::Two => self.two.as_mut(),
            };
            let call = seat.call_toss(TossPrompt::TurnCoin)?;
            let (kind, drawn) = TurnResolver::new(self.rng.as_mut()).toss_for_turn(call);
            self.view.coin_result(active, call, drawn, kind);

            let seat = match active {
                Player::One => self.one.as_mut(),
                Player::Two => self.two.as_mut(),
            };
            let intent = seat.choose_intent(&self.board, kind)?;
            debug!(?active, ?kind, ?intent, "resolving turn");

            let defender = match active {
                Player::One => self.two.as_mut(),
                Player::Two => self.one.as_mut(),
            };
            let outcome = TurnResolver::new(self.rng.as_mut()).resolve(
                &mut self.board,
                active,
                kind,
                intent,
                defender,
            )?;
            self.view.turn_outcome(active, &outcome);
            debug!(?outcome, board = %self.board.display(), "turn resolved");

            // Win is only possible when a cell changed hands this turn;
            // the draw check runs regardless, since the board may have
            // been full before a forfeited or defended turn.
            if outcome.mutated_cell().is_some() && rules::has_win(&self.board, active) {
                let result = MatchResult::Won(active);
                info!(?active, "match won");
                self.view.board(&self.board);
                self.view.result(&result);
                return Ok(result);
            }
            if rules::is_draw(&self.board) {
                let result = MatchResult::Draw;
                info!("match drawn");
                self.view.board(&self.board);
                self.view.result(&result);
                return Ok(result);
            }

            active = active.opponent();
        }
    }
}
