//! EchoGrid - console tic-tac-toe bent by chance.
//!
//! A coin toss decides whether each turn may conquer an opponent
//! square, a defense toss decides whether a conquest lands, and dice
//! decide who starts. The engine lives in [`game`]; everything that
//! touches a terminal lives in [`console`] behind the engine's
//! collaborator traits.
//!
//! # Example
//!
//! ```
//! use echogrid::game::director::GameDirector;
//! use echogrid::game::participant::AiParticipant;
//! use echogrid::game::rng::GameRng;
//! use echogrid::game::view::SilentView;
//! use echogrid::game::Player;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut rng = GameRng::new(42);
//! let one = AiParticipant::new("Echo", Player::One, rng.fork());
//! let two = AiParticipant::new("Grid", Player::Two, rng.fork());
//! let mut director = GameDirector::new(
//!     Box::new(one),
//!     Box::new(two),
//!     Box::new(rng),
//!     Box::new(SilentView),
//! );
//! let result = director.run()?;
//! # let _ = result;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod console;
pub mod game;

pub use game::{Board, BoardError, Cell, MatchResult, Player, Square, TossCall};
