//! Grid Game - turn-based terminal game library
//!
//! A player crosses a small board toward a goal while every step and every
//! enemy collision drains health. This module exposes the game logic, the
//! high-score table and the screen flow for testing and for the binary.

pub mod app;
pub mod config;
pub mod constants;
pub mod game;
pub mod high_scores;
pub mod input;
pub mod logging;
pub mod ui;
pub mod utils;

pub use app::{App, Screen};
pub use config::GameConfig;
pub use constants::*;
pub use game::{apply_move, Difficulty, Direction, GameOutcome, GridGame, MoveEvent, Position};
pub use high_scores::{HighScoreTable, HighScores, RecordOutcome};
