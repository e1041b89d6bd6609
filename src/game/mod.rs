//! The grid game: a player walks an N×N board toward a goal while
//! every step and every enemy collision costs health.

pub mod error;
pub mod logic;
pub mod types;

pub use error::SetupError;
pub use logic::{apply_move, MoveEvent};
pub use types::{
    Difficulty, Direction, GameOutcome, GridGame, ParseDifficultyError, Position,
};
