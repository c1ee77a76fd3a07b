//! Core domain types for EchoGrid.

use super::cell::Cell;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Player in the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First seat, plays 'X' (blue side).
    One,
    /// Second seat, plays 'O' (red side).
    Two,
}

impl Player {
    /// Returns the opposing player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The display symbol for this player's marks.
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }

    /// Side label for narration.
    pub fn label(self) -> &'static str {
        match self {
            Player::One => "Player One",
            Player::Two => "Player Two",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A square on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square owned by a player.
    Owned(Player),
}

/// A call made before a coin is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TossCall {
    /// Heads.
    Heads,
    /// Tails.
    Tails,
}

impl std::fmt::Display for TossCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TossCall::Heads => write!(f, "heads"),
            TossCall::Tails => write!(f, "tails"),
        }
    }
}

/// Terminal result of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// A player completed three in a row.
    Won(Player),
    /// The board filled with no line completed.
    Draw,
}

/// Errors from board mutations.
///
/// These are expected rule violations. The turn resolver consumes them
/// and turns them into turn outcomes; they never abort a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The target square already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Cell),
    /// The target square is not held by the opponent.
    #[display("{} is not an opponent square", _0)]
    InvalidTarget(Cell),
}

impl std::error::Error for BoardError {}

/// 3x3 board state.
///
/// Owned by the match director; the turn resolver borrows it mutably
/// for exactly one turn at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from raw squares (test fixtures, mostly).
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// The square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// All squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Every empty cell, in board order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::iter().filter(|c| self.is_empty(*c)).collect()
    }

    /// Every cell owned by the given player, in board order.
    pub fn cells_owned_by(&self, player: Player) -> Vec<Cell> {
        Cell::iter()
            .filter(|c| self.get(*c) == Square::Owned(player))
            .collect()
    }

    /// Places a mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CellOccupied`] if the cell already holds a mark.
    pub fn place(&mut self, cell: Cell, player: Player) -> Result<(), BoardError> {
        if !self.is_empty(cell) {
            return Err(BoardError::CellOccupied(cell));
        }
        self.squares[cell.to_index()] = Square::Owned(player);
        Ok(())
    }

    /// Transfers ownership of an opponent-held cell to `player`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidTarget`] unless the cell is currently
    /// owned by the other player.
    pub fn conquer(&mut self, cell: Cell, player: Player) -> Result<(), BoardError> {
        match self.get(cell) {
            Square::Owned(owner) if owner == player.opponent() => {
                self.squares[cell.to_index()] = Square::Owned(player);
                Ok(())
            }
            _ => Err(BoardError::InvalidTarget(cell)),
        }
    }

    /// Formats the board as a plain string (logging and tests; the
    /// console view does its own colored rendering).
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => char::from_digit(pos as u32 + 1, 10).unwrap_or('?'),
                    Square::Owned(player) => player.symbol(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_all_empty() {
        let board = Board::new();
        for cell in Cell::ALL {
            assert!(board.is_empty(cell));
        }
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_round_trip() {
        let mut board = Board::new();
        board.place(Cell::Center, Player::One).expect("empty cell");
        assert_eq!(board.get(Cell::Center), Square::Owned(Player::One));
        // No other cell changed.
        for cell in Cell::ALL {
            if cell != Cell::Center {
                assert!(board.is_empty(cell));
            }
        }
    }

    #[test]
    fn test_place_occupied_fails() {
        let mut board = Board::new();
        board.place(Cell::Center, Player::One).expect("empty cell");
        assert_eq!(
            board.place(Cell::Center, Player::Two),
            Err(BoardError::CellOccupied(Cell::Center))
        );
    }

    #[test]
    fn test_conquer_transfers_opponent_cell() {
        let mut board = Board::new();
        board.place(Cell::TopLeft, Player::Two).expect("empty cell");
        board.conquer(Cell::TopLeft, Player::One).expect("opponent cell");
        assert_eq!(board.get(Cell::TopLeft), Square::Owned(Player::One));
    }

    #[test]
    fn test_conquer_rejects_empty_and_own_cells() {
        let mut board = Board::new();
        assert_eq!(
            board.conquer(Cell::TopLeft, Player::One),
            Err(BoardError::InvalidTarget(Cell::TopLeft))
        );
        board.place(Cell::TopLeft, Player::One).expect("empty cell");
        assert_eq!(
            board.conquer(Cell::TopLeft, Player::One),
            Err(BoardError::InvalidTarget(Cell::TopLeft))
        );
    }

    #[test]
    fn test_owned_and_empty_queries() {
        let mut board = Board::new();
        board.place(Cell::TopLeft, Player::One).expect("empty cell");
        board.place(Cell::Center, Player::Two).expect("empty cell");
        assert_eq!(board.cells_owned_by(Player::One), vec![Cell::TopLeft]);
        assert_eq!(board.cells_owned_by(Player::Two), vec![Cell::Center]);
        assert_eq!(board.empty_cells().len(), 7);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for cell in Cell::ALL {
            board.place(cell, Player::One).expect("empty cell");
        }
        assert!(board.is_full());
    }
}
