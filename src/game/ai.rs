//! One-ply heuristic move selection.
//!
//! No lookahead: win if you can, block if you must, otherwise prefer
//! center, then corners, then whatever is left. Conquest attempts on
//! power turns happen with probability 1/3, targeting a uniformly
//! drawn opponent cell. Every random draw goes through the injected
//! [`RandomSource`], so the whole policy is scriptable in tests.

use super::rng::RandomSource;
use super::rules::LINES;
use super::turn::{Intent, TurnKind};
use super::{Board, Cell, Player, Square};
use tracing::{debug, instrument};

/// No empty cell remains for a placement.
///
/// The director checks for a draw before asking for a move, so hitting
/// this means the draw check was skipped: an invariant violation, not
/// a rule branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("no empty cell remains on the board")]
pub struct NoLegalMove;

impl std::error::Error for NoLegalMove {}

/// Chooses the AI's action for the turn.
///
/// On a power turn with at least one opponent cell on the board, a
/// conquest is attempted iff `rng.choose_index(3) == 0`; the target is
/// drawn uniformly from the opponent's cells. Otherwise falls through
/// to [`choose_placement`].
#[instrument(skip(board, rng))]
pub fn choose_intent(
    board: &Board,
    me: Player,
    kind: TurnKind,
    rng: &mut dyn RandomSource,
) -> Result<Intent, NoLegalMove> {
    if kind == TurnKind::Power {
        let targets = board.cells_owned_by(me.opponent());
        if !targets.is_empty() && rng.choose_index(3) == 0 {
            let target = targets[rng.choose_index(targets.len())];
            debug!(%target, "attempting conquest");
            return Ok(Intent::Conquer(target));
        }
    }
    choose_placement(board, me, rng).map(Intent::Place)
}

/// Chooses a placement target via the priority ladder.
///
/// Evaluated in order, first satisfied rung wins:
/// 1. an empty cell completing three-in-a-row for `me`;
/// 2. an empty cell the opponent would complete next (block);
/// 3. the center;
/// 4. a uniformly drawn empty corner;
/// 5. a uniformly drawn remaining empty cell.
#[instrument(skip(board, rng))]
pub fn choose_placement(
    board: &Board,
    me: Player,
    rng: &mut dyn RandomSource,
) -> Result<Cell, NoLegalMove> {
    if let Some(cell) = completing_cell(board, me) {
        debug!(%cell, "taking the winning cell");
        return Ok(cell);
    }
    if let Some(cell) = completing_cell(board, me.opponent()) {
        debug!(%cell, "blocking the opponent");
        return Ok(cell);
    }
    if board.is_empty(Cell::Center) {
        return Ok(Cell::Center);
    }
    let corners: Vec<Cell> = Cell::CORNERS
        .iter()
        .copied()
        .filter(|c| board.is_empty(*c))
        .collect();
    if !corners.is_empty() {
        return Ok(corners[rng.choose_index(corners.len())]);
    }
    let rest = board.empty_cells();
    if rest.is_empty() {
        return Err(NoLegalMove);
    }
    Ok(rest[rng.choose_index(rest.len())])
}

/// The empty cell that would complete a line for `player`, scanning
/// lines in their fixed order and taking the first hit.
pub fn completing_cell(board: &Board, player: Player) -> Option<Cell> {
    for line in LINES {
        let mut owned = 0;
        let mut empty = None;
        for cell in line {
            match board.get(cell) {
                Square::Owned(p) if p == player => owned += 1,
                Square::Empty => empty = Some(cell),
                Square::Owned(_) => {}
            }
        }
        if owned == 2 {
            if let Some(cell) = empty {
                return Some(cell);
            }
        }
    }
    None
}
