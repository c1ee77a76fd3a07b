//! Win and draw evaluation.
//!
//! Pure functions over [`Board`](super::Board) state. Evaluation is
//! separated from board storage so the director and the heuristic AI
//! share one definition of the eight winning lines.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, has_win, LINES};
