//! Console collaborators: line input and colored rendering.

mod human;
mod render;

pub mod input;

pub use human::HumanParticipant;
pub use render::ConsoleView;
