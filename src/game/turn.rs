//! Turn resolution state machine.
//!
//! One turn runs coin toss -> intent -> optional defense toss -> board
//! mutation. The resolver draws every coin through the injected
//! [`RandomSource`] and reports what happened as a [`TurnOutcome`];
//! the director handles win and draw evaluation afterwards.

use super::participant::{Participant, TossPrompt};
use super::rng::RandomSource;
use super::{Board, Cell, Player, Square, TossCall};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// What the turn coin toss granted the active player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnKind {
    /// Call matched the draw: place or conquer.
    Power,
    /// Call missed: place only.
    Normal,
}

/// The active player's chosen action for the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Place a mark on an empty cell.
    Place(Cell),
    /// Attempt to capture a cell (power turns only).
    Conquer(Cell),
}

/// How a turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// A mark was placed on an empty cell.
    Placed(Cell),
    /// A conquest went through; the cell changed owner.
    Conquered(Cell),
    /// The defender called the defense toss correctly; nothing changed.
    DefenseHeld(Cell),
    /// The conquest target was not an opponent cell; the turn is
    /// forfeited with no mutation and no defense toss.
    InvalidTargetForfeited(Cell),
}

impl TurnOutcome {
    /// The cell whose ownership changed this turn, if any.
    pub fn mutated_cell(&self) -> Option<Cell> {
        match self {
            TurnOutcome::Placed(cell) | TurnOutcome::Conquered(cell) => Some(*cell),
            TurnOutcome::DefenseHeld(_) | TurnOutcome::InvalidTargetForfeited(_) => None,
        }
    }
}

/// Collaborator contract breaches.
///
/// Input collaborators validate placements before they reach the
/// resolver, so these indicate a bug upstream, not a rule branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TurnError {
    /// A place intent targeted an occupied cell.
    #[display("placement on occupied cell {}", _0)]
    OccupiedPlacement(Cell),
    /// A conquer intent arrived on a normal turn.
    #[display("conquer intent on a normal turn")]
    ConquerOnNormalTurn,
}

impl std::error::Error for TurnError {}

/// Resolves one turn at a time against a mutably borrowed board.
pub struct TurnResolver<'a> {
    rng: &'a mut dyn RandomSource,
}

impl<'a> TurnResolver<'a> {
    /// Creates a resolver drawing coins from the given source.
    pub fn new(rng: &'a mut dyn RandomSource) -> Self {
        Self { rng }
    }

    /// Draws the turn coin against the active player's call.
    ///
    /// Returns the resulting turn kind and the drawn face, so the view
    /// can narrate the toss.
    #[instrument(skip(self))]
    pub fn toss_for_turn(&mut self, call: TossCall) -> (TurnKind, TossCall) {
        let drawn = self.rng.flip_coin();
        let kind = if drawn == call {
            TurnKind::Power
        } else {
            TurnKind::Normal
        };
        debug!(?call, ?drawn, ?kind, "turn coin tossed");
        (kind, drawn)
    }

    /// Applies the active player's intent to the board.
    ///
    /// A valid conquest always triggers a defense toss before any
    /// ownership transfer: the defender supplies a call through their
    /// participant, and a matching draw holds the cell.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError`] on collaborator contract breaches, or the
    /// defender's input error if the defense call cannot be obtained.
    #[instrument(skip(self, board, defender), fields(defender = defender.name()))]
    pub fn resolve(
        &mut self,
        board: &mut Board,
        attacker: Player,
        kind: TurnKind,
        intent: Intent,
        defender: &mut dyn Participant,
    ) -> Result<TurnOutcome> {
        match (kind, intent) {
            (_, Intent::Place(cell)) => {
                if let Err(err) = board.place(cell, attacker) {
                    debug!(%err, "rejecting invalid placement");
                    return Err(TurnError::OccupiedPlacement(cell).into());
                }
                Ok(TurnOutcome::Placed(cell))
            }
            (TurnKind::Normal, Intent::Conquer(_)) => Err(TurnError::ConquerOnNormalTurn.into()),
            (TurnKind::Power, Intent::Conquer(cell)) => {
                if board.get(cell) != Square::Owned(attacker.opponent()) {
                    // No mutation and no defense toss on a bad target.
                    debug!(%cell, "conquest target invalid, turn forfeited");
                    return Ok(TurnOutcome::InvalidTargetForfeited(cell));
                }
                let call = defender.call_toss(TossPrompt::Defense(cell))?;
                let drawn = self.rng.flip_coin();
                debug!(?call, ?drawn, %cell, "defense coin tossed");
                if call == drawn {
                    Ok(TurnOutcome::DefenseHeld(cell))
                } else {
                    board.conquer(cell, attacker)?;
                    Ok(TurnOutcome::Conquered(cell))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted chance events for exact branch coverage.
    struct Scripted {
        coins: Vec<TossCall>,
    }

    impl Scripted {
        fn coins(coins: &[TossCall]) -> Self {
            let mut coins: Vec<_> = coins.into();
            coins.reverse();
            Self { coins }
        }
    }

    impl RandomSource for Scripted {
        fn roll_die(&mut self) -> u8 {
            unreachable!("no dice in these tests")
        }

        fn flip_coin(&mut self) -> TossCall {
            self.coins.pop().expect("script exhausted")
        }

        fn choose_index(&mut self, _n: usize) -> usize {
            0
        }
    }

    /// Defender that always calls the scripted face.
    struct FixedCaller(TossCall);

    impl Participant for FixedCaller {
        fn name(&self) -> &str {
            "fixed"
        }

        fn call_toss(&mut self, _prompt: TossPrompt) -> Result<TossCall> {
            Ok(self.0)
        }

        fn choose_intent(&mut self, _board: &Board, _kind: TurnKind) -> Result<Intent> {
            unreachable!("defender never moves")
        }
    }

    #[test]
    fn test_toss_matching_call_grants_power() {
        let mut rng = Scripted::coins(&[TossCall::Heads, TossCall::Tails]);
        let mut resolver = TurnResolver::new(&mut rng);
        let (kind, drawn) = resolver.toss_for_turn(TossCall::Heads);
        assert_eq!(kind, TurnKind::Power);
        assert_eq!(drawn, TossCall::Heads);
        let (kind, _) = resolver.toss_for_turn(TossCall::Heads);
        assert_eq!(kind, TurnKind::Normal);
    }

    #[test]
    fn test_place_resolves_on_either_turn_kind() {
        for kind in [TurnKind::Normal, TurnKind::Power] {
            let mut rng = Scripted::coins(&[]);
            let mut resolver = TurnResolver::new(&mut rng);
            let mut board = Board::new();
            let mut defender = FixedCaller(TossCall::Heads);
            let outcome = resolver
                .resolve(
                    &mut board,
                    Player::One,
                    kind,
                    Intent::Place(Cell::Center),
                    &mut defender,
                )
                .expect("valid placement");
            assert_eq!(outcome, TurnOutcome::Placed(Cell::Center));
            assert_eq!(board.get(Cell::Center), Square::Owned(Player::One));
        }
    }

    #[test]
    fn test_place_on_occupied_cell_is_contract_breach() {
        let mut rng = Scripted::coins(&[]);
        let mut resolver = TurnResolver::new(&mut rng);
        let mut board = Board::new();
        board.place(Cell::Center, Player::Two).expect("empty cell");
        let mut defender = FixedCaller(TossCall::Heads);
        let err = resolver
            .resolve(
                &mut board,
                Player::One,
                TurnKind::Normal,
                Intent::Place(Cell::Center),
                &mut defender,
            )
            .expect_err("occupied placement must fail");
        assert_eq!(
            err.downcast::<TurnError>().expect("turn error"),
            TurnError::OccupiedPlacement(Cell::Center)
        );
    }

    #[test]
    fn test_conquer_on_normal_turn_is_contract_breach() {
        let mut rng = Scripted::coins(&[]);
        let mut resolver = TurnResolver::new(&mut rng);
        let mut board = Board::new();
        let mut defender = FixedCaller(TossCall::Heads);
        let err = resolver
            .resolve(
                &mut board,
                Player::One,
                TurnKind::Normal,
                Intent::Conquer(Cell::Center),
                &mut defender,
            )
            .expect_err("conquer needs a power turn");
        assert_eq!(
            err.downcast::<TurnError>().expect("turn error"),
            TurnError::ConquerOnNormalTurn
        );
    }

    #[test]
    fn test_conquer_empty_cell_forfeits_without_mutation() {
        let mut rng = Scripted::coins(&[]);
        let mut resolver = TurnResolver::new(&mut rng);
        let mut board = Board::new();
        board.place(Cell::TopLeft, Player::One).expect("empty cell");
        let before = board.clone();
        let mut defender = FixedCaller(TossCall::Heads);
        let outcome = resolver
            .resolve(
                &mut board,
                Player::One,
                TurnKind::Power,
                Intent::Conquer(Cell::Center),
                &mut defender,
            )
            .expect("forfeit is an outcome, not an error");
        assert_eq!(outcome, TurnOutcome::InvalidTargetForfeited(Cell::Center));
        assert_eq!(board, before);
    }

    #[test]
    fn test_conquer_own_cell_forfeits_without_mutation() {
        let mut rng = Scripted::coins(&[]);
        let mut resolver = TurnResolver::new(&mut rng);
        let mut board = Board::new();
        board.place(Cell::TopLeft, Player::One).expect("empty cell");
        let before = board.clone();
        let mut defender = FixedCaller(TossCall::Heads);
        let outcome = resolver
            .resolve(
                &mut board,
                Player::One,
                TurnKind::Power,
                Intent::Conquer(Cell::TopLeft),
                &mut defender,
            )
            .expect("forfeit is an outcome, not an error");
        assert_eq!(outcome, TurnOutcome::InvalidTargetForfeited(Cell::TopLeft));
        assert_eq!(board, before);
    }

    #[test]
    fn test_defense_held_when_call_matches_draw() {
        let mut rng = Scripted::coins(&[TossCall::Tails]);
        let mut resolver = TurnResolver::new(&mut rng);
        let mut board = Board::new();
        board.place(Cell::TopLeft, Player::Two).expect("empty cell");
        let before = board.clone();
        let mut defender = FixedCaller(TossCall::Tails);
        let outcome = resolver
            .resolve(
                &mut board,
                Player::One,
                TurnKind::Power,
                Intent::Conquer(Cell::TopLeft),
                &mut defender,
            )
            .expect("defense is an outcome");
        assert_eq!(outcome, TurnOutcome::DefenseHeld(Cell::TopLeft));
        assert_eq!(board, before);
    }

    #[test]
    fn test_conquest_transfers_when_defense_misses() {
        let mut rng = Scripted::coins(&[TossCall::Heads]);
        let mut resolver = TurnResolver::new(&mut rng);
        let mut board = Board::new();
        board.place(Cell::TopLeft, Player::Two).expect("empty cell");
        board.place(Cell::Center, Player::Two).expect("empty cell");
        let mut defender = FixedCaller(TossCall::Tails);
        let outcome = resolver
            .resolve(
                &mut board,
                Player::One,
                TurnKind::Power,
                Intent::Conquer(Cell::TopLeft),
                &mut defender,
            )
            .expect("conquest is an outcome");
        assert_eq!(outcome, TurnOutcome::Conquered(Cell::TopLeft));
        assert_eq!(board.get(Cell::TopLeft), Square::Owned(Player::One));
        // Exactly one cell changed hands.
        assert_eq!(board.get(Cell::Center), Square::Owned(Player::Two));
        assert_eq!(board.empty_cells().len(), 7);
    }
}
