//! Best score per difficulty, persisted as a flat JSON object.

use crate::constants::HIGH_SCORES_FILE;
use crate::game::Difficulty;
use crate::utils::persistence::{load_json_or_default, save_json};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io;
use std::path::{Path, PathBuf};

/// Persisted high-score record: `{"Easy": n, "Medium": n, "Hard": n}`.
///
/// Only a JSON object is accepted. Missing keys read as 0; any present key
/// that is not a non-negative integer rejects the whole record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct HighScores {
    #[serde(rename = "Easy")]
    pub easy: u32,
    #[serde(rename = "Medium")]
    pub medium: u32,
    #[serde(rename = "Hard")]
    pub hard: u32,
}

impl TryFrom<Map<String, Value>> for HighScores {
    type Error = String;

    fn try_from(record: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut scores = HighScores::default();
        for difficulty in Difficulty::ALL {
            let Some(value) = record.get(difficulty.name()) else {
                continue;
            };
            let score = value
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| format!("bad {} score: {}", difficulty, value))?;
            scores.set(difficulty, score);
        }
        Ok(scores)
    }
}

impl HighScores {
    pub fn get(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    pub fn set(&mut self, difficulty: Difficulty, score: u32) {
        match difficulty {
            Difficulty::Easy => self.easy = score,
            Difficulty::Medium => self.medium = score,
            Difficulty::Hard => self.hard = score,
        }
    }
}

/// Result of offering a score to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The score beat the stored best and was written.
    NewRecord { previous: u32 },
    /// The stored best was kept.
    NotImproved { best: u32 },
}

impl RecordOutcome {
    pub fn is_new_record(&self) -> bool {
        matches!(self, RecordOutcome::NewRecord { .. })
    }
}

/// File-backed high-score table.
#[derive(Debug, Clone)]
pub struct HighScoreTable {
    path: PathBuf,
}

impl HighScoreTable {
    /// Table stored as `high_scores.json` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(HIGH_SCORES_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current record. Missing or unreadable data counts as all zeros.
    pub fn load(&self) -> HighScores {
        load_json_or_default(&self.path)
    }

    /// Store `score` only if it strictly beats the current best for `difficulty`.
    pub fn record_if_better(&self, difficulty: Difficulty, score: u32) -> io::Result<RecordOutcome> {
        let mut scores = self.load();
        let previous = scores.get(difficulty);
        if score <= previous {
            return Ok(RecordOutcome::NotImproved { best: previous });
        }

        scores.set(difficulty, score);
        save_json(&self.path, &scores)?;
        log::info!(
            "new {} high score {} (was {})",
            difficulty,
            score,
            previous
        );
        Ok(RecordOutcome::NewRecord { previous })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn table() -> (tempfile::TempDir, HighScoreTable) {
        let dir = tempfile::tempdir().unwrap();
        let table = HighScoreTable::in_dir(&dir.path().join("leaderboard"));
        (dir, table)
    }

    #[test]
    fn test_load_missing_is_zero() {
        let (_dir, table) = table();
        assert_eq!(table.load(), HighScores::default());
        assert!(!table.path().exists());
    }

    #[test]
    fn test_load_corrupt_is_zero() {
        let (_dir, table) = table();
        fs::create_dir_all(table.path().parent().unwrap()).unwrap();
        fs::write(table.path(), "]]garbage").unwrap();
        assert_eq!(table.load(), HighScores::default());
    }

    #[test]
    fn test_load_array_is_zero() {
        let (_dir, table) = table();
        fs::create_dir_all(table.path().parent().unwrap()).unwrap();
        fs::write(table.path(), "[1,2,3]").unwrap();
        assert_eq!(table.load(), HighScores::default());
    }

    #[test]
    fn test_array_record_is_replaced_on_new_score() {
        let (_dir, table) = table();
        fs::create_dir_all(table.path().parent().unwrap()).unwrap();
        fs::write(table.path(), "[90,90,90]").unwrap();
        let outcome = table.record_if_better(Difficulty::Medium, 5).unwrap();
        assert_eq!(outcome, RecordOutcome::NewRecord { previous: 0 });
        assert_eq!(
            table.load(),
            HighScores {
                easy: 0,
                medium: 5,
                hard: 0
            }
        );
    }

    #[test]
    fn test_load_fractional_is_zero() {
        let (_dir, table) = table();
        fs::create_dir_all(table.path().parent().unwrap()).unwrap();
        fs::write(table.path(), r#"{"Easy": 4.5}"#).unwrap();
        assert_eq!(table.load(), HighScores::default());
    }

    #[test]
    fn test_load_negative_is_zero() {
        let (_dir, table) = table();
        fs::create_dir_all(table.path().parent().unwrap()).unwrap();
        fs::write(table.path(), r#"{"Easy": -5, "Medium": 3, "Hard": 0}"#).unwrap();
        assert_eq!(table.load(), HighScores::default());
    }

    #[test]
    fn test_load_partial_record() {
        let (_dir, table) = table();
        fs::create_dir_all(table.path().parent().unwrap()).unwrap();
        fs::write(table.path(), r#"{"Medium": 44}"#).unwrap();
        let scores = table.load();
        assert_eq!(scores.medium, 44);
        assert_eq!(scores.easy, 0);
        assert_eq!(scores.hard, 0);
    }

    #[test]
    fn test_record_only_when_better() {
        let (_dir, table) = table();

        let first = table.record_if_better(Difficulty::Medium, 40).unwrap();
        assert_eq!(first, RecordOutcome::NewRecord { previous: 0 });

        let second = table.record_if_better(Difficulty::Medium, 30).unwrap();
        assert_eq!(second, RecordOutcome::NotImproved { best: 40 });
        assert_eq!(table.load().medium, 40);

        let third = table.record_if_better(Difficulty::Medium, 50).unwrap();
        assert!(third.is_new_record());
        assert_eq!(table.load().medium, 50);
    }

    #[test]
    fn test_equal_score_is_not_a_record() {
        let (_dir, table) = table();
        table.record_if_better(Difficulty::Easy, 90).unwrap();
        let outcome = table.record_if_better(Difficulty::Easy, 90).unwrap();
        assert!(!outcome.is_new_record());
    }

    #[test]
    fn test_zero_score_never_written() {
        let (_dir, table) = table();
        let outcome = table.record_if_better(Difficulty::Hard, 0).unwrap();
        assert_eq!(outcome, RecordOutcome::NotImproved { best: 0 });
        assert!(!table.path().exists());
    }

    #[test]
    fn test_difficulties_are_independent() {
        let (_dir, table) = table();
        table.record_if_better(Difficulty::Easy, 70).unwrap();
        table.record_if_better(Difficulty::Hard, 20).unwrap();
        let scores = table.load();
        assert_eq!(scores.get(Difficulty::Easy), 70);
        assert_eq!(scores.get(Difficulty::Medium), 0);
        assert_eq!(scores.get(Difficulty::Hard), 20);
    }

    #[test]
    fn test_file_format_has_exact_keys() {
        let (_dir, table) = table();
        table.record_if_better(Difficulty::Medium, 12).unwrap();
        let json = fs::read_to_string(table.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(obj["Easy"], 0);
        assert_eq!(obj["Medium"], 12);
        assert_eq!(obj["Hard"], 0);
    }

    #[test]
    fn test_corrupt_record_is_replaced_on_new_score() {
        let (_dir, table) = table();
        fs::create_dir_all(table.path().parent().unwrap()).unwrap();
        fs::write(table.path(), "not json").unwrap();
        let outcome = table.record_if_better(Difficulty::Easy, 5).unwrap();
        assert!(outcome.is_new_record());
        assert_eq!(table.load().easy, 5);
    }
}
