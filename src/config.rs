//! Runtime configuration assembled from command-line arguments.

use crate::constants::{
    DEFAULT_ENEMY_HIT_PENALTY, DEFAULT_GRID_SIZE, LEADERBOARD_DIR, LOG_FILE, MAX_GRID_SIZE,
};
use crate::game::{Difficulty, ParseDifficultyError};
use crate::high_scores::HighScoreTable;
use crate::utils::persistence::expand_home;
use std::path::PathBuf;
use thiserror::Error;

pub const HELP_TEXT: &str = "\
Grid Game - reach the goal before your health runs out

Usage: gridgame [options]

Options:
  --difficulty <easy|medium|hard>  Starting difficulty (default: medium)
  --size <n>                       Board size, 2-20 (default: 8)
  --penalty <n>                    Health lost when hitting an enemy (default: 10)
  --leaderboard-dir <path>         Where high_scores.json lives (default: leaderboard)
  --log-file <path>                Write logs to this file
  --version, -v                    Show version information
  --help, -h                       Show this help message

Logging is enabled by --log-file or by setting RUST_LOG.

Controls: W/A/S/D or arrow keys to move, Esc or M for the menu.";

/// Settings for a run of the game. Difficulty can still be changed from the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub difficulty: Difficulty,
    pub enemy_hit_penalty: u32,
    pub leaderboard_dir: PathBuf,
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            difficulty: Difficulty::default(),
            enemy_hit_penalty: DEFAULT_ENEMY_HIT_PENALTY,
            leaderboard_dir: PathBuf::from(LEADERBOARD_DIR),
            log_file: None,
        }
    }
}

impl GameConfig {
    pub fn high_score_table(&self) -> HighScoreTable {
        HighScoreTable::in_dir(&self.leaderboard_dir)
    }

    /// Log destination: the explicit `--log-file`, else a file beside the high scores.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| self.leaderboard_dir.join(LOG_FILE))
    }
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(GameConfig),
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value '{value}' for {flag}")]
    InvalidNumber { flag: String, value: String },

    #[error(transparent)]
    Difficulty(#[from] ParseDifficultyError),

    #[error("board size must be between 2 and {max}, got {0}", max = MAX_GRID_SIZE)]
    SizeOutOfRange(usize),

    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = GameConfig::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--difficulty" | "-d" => {
                config.difficulty = next_value(&mut args, &arg)?.parse()?;
            }
            "--size" => {
                let size: usize = parse_number(&next_value(&mut args, &arg)?, &arg)?;
                if !(2..=MAX_GRID_SIZE).contains(&size) {
                    return Err(ConfigError::SizeOutOfRange(size));
                }
                config.size = size;
            }
            "--penalty" => {
                config.enemy_hit_penalty = parse_number(&next_value(&mut args, &arg)?, &arg)?;
            }
            "--leaderboard-dir" => {
                config.leaderboard_dir = expand_home(&PathBuf::from(next_value(&mut args, &arg)?));
            }
            "--log-file" => {
                config.log_file = Some(expand_home(&PathBuf::from(next_value(&mut args, &arg)?)));
            }
            _ => return Err(ConfigError::UnknownArgument(arg.clone())),
        }
    }

    Ok(Command::Play(config))
}

fn next_value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, ConfigError> {
    args.next()
        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

fn parse_number<T: std::str::FromStr>(value: &str, flag: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, ConfigError> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    fn play(args: &[&str]) -> GameConfig {
        match parse(args).unwrap() {
            Command::Play(config) => config,
            other => panic!("expected Play, got {:?}", other),
        }
    }

    #[test]
    fn test_no_args_uses_defaults() {
        let config = play(&[]);
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.size, 8);
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.enemy_hit_penalty, 10);
        assert_eq!(config.leaderboard_dir, PathBuf::from("leaderboard"));
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse(&["--help"]).unwrap(), Command::Help);
        assert_eq!(parse(&["-h"]).unwrap(), Command::Help);
        assert_eq!(parse(&["--version"]).unwrap(), Command::Version);
        assert_eq!(parse(&["-v"]).unwrap(), Command::Version);
    }

    #[test]
    fn test_difficulty_flag_case_insensitive() {
        assert_eq!(play(&["--difficulty", "hard"]).difficulty, Difficulty::Hard);
        assert_eq!(play(&["-d", "EASY"]).difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_bad_difficulty() {
        assert!(matches!(
            parse(&["--difficulty", "nightmare"]),
            Err(ConfigError::Difficulty(_))
        ));
    }

    #[test]
    fn test_size_and_penalty() {
        let config = play(&["--size", "10", "--penalty", "20"]);
        assert_eq!(config.size, 10);
        assert_eq!(config.enemy_hit_penalty, 20);
    }

    #[test]
    fn test_size_out_of_range() {
        assert_eq!(parse(&["--size", "1"]), Err(ConfigError::SizeOutOfRange(1)));
        assert_eq!(parse(&["--size", "99"]), Err(ConfigError::SizeOutOfRange(99)));
    }

    #[test]
    fn test_invalid_number() {
        assert_eq!(
            parse(&["--penalty", "lots"]),
            Err(ConfigError::InvalidNumber {
                flag: "--penalty".to_string(),
                value: "lots".to_string()
            })
        );
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(
            parse(&["--size"]),
            Err(ConfigError::MissingValue("--size".to_string()))
        );
    }

    #[test]
    fn test_unknown_argument() {
        assert_eq!(
            parse(&["--fast"]),
            Err(ConfigError::UnknownArgument("--fast".to_string()))
        );
    }

    #[test]
    fn test_paths() {
        let config = play(&["--leaderboard-dir", "scores", "--log-file", "game.log"]);
        assert_eq!(config.leaderboard_dir, PathBuf::from("scores"));
        assert_eq!(config.log_path(), PathBuf::from("game.log"));
        assert_eq!(
            config.high_score_table().path(),
            PathBuf::from("scores").join("high_scores.json")
        );
    }

    #[test]
    fn test_default_log_path_beside_scores() {
        let config = GameConfig::default();
        assert_eq!(config.log_path(), PathBuf::from("leaderboard").join("gridgame.log"));
    }
}
