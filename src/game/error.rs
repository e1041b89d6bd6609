use super::types::{Difficulty, Position};
use thiserror::Error;

/// Errors raised while setting up a session, before any move is played.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Board dimension of zero.
    #[error("invalid board size: {0}")]
    InvalidSize(usize),

    /// The difficulty wants more enemies than the board has free cells.
    #[error(
        "{difficulty} needs {enemies} enemies but a {size}x{size} board only has {free_cells} free cells"
    )]
    TooManyEnemies {
        difficulty: Difficulty,
        enemies: usize,
        free_cells: usize,
        size: usize,
    },

    /// A fixed layout placed something off the board.
    #[error("position {pos} is outside a {size}x{size} board")]
    OutOfBounds { pos: Position, size: usize },

    /// A fixed layout placed two things on the same cell.
    #[error("position {0} is occupied more than once")]
    Overlap(Position),
}
