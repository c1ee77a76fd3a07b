//! Win detection.

use super::super::{Board, Cell, Player, Square};
use tracing::instrument;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player holds all three cells of any
/// line, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Owned(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}

/// Checks if the given player holds a complete line.
///
/// Conquests can reshape lines mid-game, so this is asked per player
/// rather than derived from move order.
#[instrument]
pub fn has_win(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|c| board.get(*c) == Square::Owned(player)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert!(!has_win(&board, Player::One));
        assert!(!has_win(&board, Player::Two));
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.place(Cell::TopLeft, Player::One).expect("empty cell");
        board.place(Cell::TopCenter, Player::One).expect("empty cell");
        board.place(Cell::TopRight, Player::One).expect("empty cell");
        assert_eq!(check_winner(&board), Some(Player::One));
        assert!(has_win(&board, Player::One));
        assert!(!has_win(&board, Player::Two));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.place(Cell::TopLeft, Player::Two).expect("empty cell");
        board.place(Cell::Center, Player::Two).expect("empty cell");
        board.place(Cell::BottomRight, Player::Two).expect("empty cell");
        assert_eq!(check_winner(&board), Some(Player::Two));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.place(Cell::TopLeft, Player::One).expect("empty cell");
        board.place(Cell::TopCenter, Player::One).expect("empty cell");
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.place(Cell::TopLeft, Player::One).expect("empty cell");
        board.place(Cell::TopCenter, Player::Two).expect("empty cell");
        board.place(Cell::TopRight, Player::One).expect("empty cell");
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_win_after_conquest() {
        let mut board = Board::new();
        board.place(Cell::TopLeft, Player::One).expect("empty cell");
        board.place(Cell::TopCenter, Player::One).expect("empty cell");
        board.place(Cell::TopRight, Player::Two).expect("empty cell");
        assert!(!has_win(&board, Player::One));
        board.conquer(Cell::TopRight, Player::One).expect("opponent cell");
        assert!(has_win(&board, Player::One));
    }
}
