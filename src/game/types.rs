//! Grid game data structures.
//!
//! A turn-based board where the player walks toward a goal cell while
//! enemy cells and every step drain health.

use super::error::SetupError;
use crate::constants::{DEFAULT_ENEMY_HIT_PENALTY, STARTING_HEALTH};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Difficulty presets. Each maps to an enemy count and a per-move health cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Number of enemy cells placed on the board.
    pub fn enemy_count(&self) -> usize {
        match self {
            Self::Easy => 4,
            Self::Medium => 7,
            Self::Hard => 10,
        }
    }

    /// Health lost on every accepted move.
    pub fn move_cost(&self) -> u32 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a difficulty name does not match any preset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty '{0}' (expected Easy, Medium or Hard)")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Case-insensitive: the input is title-cased before matching.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let titled: String = match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        };
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name() == titled)
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

/// Cardinal move direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the (d_row, d_col) delta for this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// A cell on the board, indexed as (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step one cell in `direction`, stopping at the board edge.
    pub fn step_clamped(self, direction: Direction, size: usize) -> Self {
        let (d_row, d_col) = direction.delta();
        let max = size as i32 - 1;
        Self {
            row: (self.row as i32 + d_row).clamp(0, max) as usize,
            col: (self.col as i32 + d_col).clamp(0, max) as usize,
        }
    }

    fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// How a session ended. Both outcomes are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Victory,
    Defeat,
}

/// One play session on the board.
#[derive(Debug, Clone)]
pub struct GridGame {
    pub size: usize,
    pub difficulty: Difficulty,
    pub player: Position,
    pub goal: Position,
    pub enemies: Vec<Position>,
    pub health: u32,
    /// Health at the moment the goal was reached; 0 until then.
    pub score: u32,
    /// None while the game is in progress.
    pub outcome: Option<GameOutcome>,
    /// Health lost per move (cached from difficulty).
    pub move_cost: u32,
    /// Extra health lost when landing on an enemy.
    pub enemy_hit_penalty: u32,
    /// Accepted moves so far.
    pub moves: u32,
}

impl GridGame {
    /// Place goal, player and enemies uniformly at random without replacement.
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Self, SetupError> {
        if size == 0 {
            return Err(SetupError::InvalidSize(size));
        }
        let cells = size * size;
        let enemy_count = difficulty.enemy_count();
        if cells < 2 || enemy_count > cells - 2 {
            return Err(SetupError::TooManyEnemies {
                difficulty,
                enemies: enemy_count,
                free_cells: cells.saturating_sub(2),
                size,
            });
        }

        let mut free: Vec<Position> = (0..size)
            .flat_map(|row| (0..size).map(move |col| Position::new(row, col)))
            .collect();

        let goal = free.swap_remove(rng.gen_range(0..free.len()));
        let player = free.swap_remove(rng.gen_range(0..free.len()));
        let enemies: Vec<Position> = free.choose_multiple(rng, enemy_count).copied().collect();

        Ok(Self::assemble(size, difficulty, player, goal, enemies))
    }

    /// Build a session from explicit positions. Positions must be in bounds
    /// and pairwise distinct.
    pub fn from_layout(
        size: usize,
        difficulty: Difficulty,
        player: Position,
        goal: Position,
        enemies: Vec<Position>,
    ) -> Result<Self, SetupError> {
        if size == 0 {
            return Err(SetupError::InvalidSize(size));
        }

        let mut seen: Vec<Position> = Vec::with_capacity(enemies.len() + 2);
        for pos in [player, goal].into_iter().chain(enemies.iter().copied()) {
            if !pos.in_bounds(size) {
                return Err(SetupError::OutOfBounds { pos, size });
            }
            if seen.contains(&pos) {
                return Err(SetupError::Overlap(pos));
            }
            seen.push(pos);
        }

        Ok(Self::assemble(size, difficulty, player, goal, enemies))
    }

    /// Override the enemy collision penalty.
    pub fn with_enemy_hit_penalty(mut self, penalty: u32) -> Self {
        self.enemy_hit_penalty = penalty;
        self
    }

    fn assemble(
        size: usize,
        difficulty: Difficulty,
        player: Position,
        goal: Position,
        enemies: Vec<Position>,
    ) -> Self {
        Self {
            size,
            difficulty,
            player,
            goal,
            enemies,
            health: STARTING_HEALTH,
            score: 0,
            outcome: None,
            move_cost: difficulty.move_cost(),
            enemy_hit_penalty: DEFAULT_ENEMY_HIT_PENALTY,
            moves: 0,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn is_enemy(&self, pos: Position) -> bool {
        self.enemies.contains(&pos)
    }
}
