//! Render collaborator interface.
//!
//! The engine never writes to the console directly; it notifies a
//! [`MatchView`] and consumes no return values. The console front end
//! implements this with colors and pacing; tests use [`SilentView`].

use super::turn::{TurnKind, TurnOutcome};
use super::{Board, MatchResult, Player, TossCall};

/// Notifications emitted over the course of a match.
pub trait MatchView {
    /// The board changed (or a turn is about to start).
    fn board(&mut self, board: &Board);

    /// A starting-roll die came up for a player.
    fn first_roll(&mut self, player: Player, name: &str, roll: u8);

    /// Both starting rolls tied; rolling again.
    fn roll_tie(&mut self, roll: u8);

    /// The starting player is decided.
    fn first_player(&mut self, player: Player, name: &str);

    /// The turn coin was tossed for the active player.
    fn coin_result(&mut self, player: Player, call: TossCall, drawn: TossCall, kind: TurnKind);

    /// The active player's turn resolved.
    fn turn_outcome(&mut self, player: Player, outcome: &TurnOutcome);

    /// The match reached a terminal result.
    fn result(&mut self, result: &MatchResult);
}

/// A view that says nothing. Used by tests and fast AI-vs-AI runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentView;

impl MatchView for SilentView {
    fn board(&mut self, _board: &Board) {}

    fn first_roll(&mut self, _player: Player, _name: &str, _roll: u8) {}

    fn roll_tie(&mut self, _roll: u8) {}

    fn first_player(&mut self, _player: Player, _name: &str) {}

    fn coin_result(&mut self, _player: Player, _call: TossCall, _drawn: TossCall, _kind: TurnKind) {
    }

    fn turn_outcome(&mut self, _player: Player, _outcome: &TurnOutcome) {}

    fn result(&mut self, _result: &MatchResult) {}
}
