//! High-score leaderboard
//!
//! A score is `{ id, name, value, date }` where `value` is a win streak.
//! Listing is always highest value first; equal values keep the older entry
//! ahead.

use super::{StorageError, read_json, write_json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name used inside the data directory
pub const SCORES_FILE: &str = "scores.json";

/// A leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub id: u64,
    pub name: String,
    pub value: u32,
    pub date: DateTime<Utc>,
}

/// Fields required to create a score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScore {
    pub name: String,
    pub value: u32,
}

/// Partial update; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub name: Option<String>,
    pub value: Option<u32>,
}

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    #[error("no score found with id {0}")]
    NotFound(u64),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Create/read/update access to the leaderboard
pub trait ScoreBoard {
    /// All scores, highest value first
    ///
    /// # Errors
    /// Returns `ScoreError::Storage` if the backing store cannot be read.
    fn list(&self) -> Result<Vec<Score>, ScoreError>;

    /// # Errors
    /// Returns `ScoreError::NotFound` if no score has this id.
    fn get(&self, id: u64) -> Result<Score, ScoreError>;

    /// # Errors
    /// Returns `ScoreError::Validation` for a blank name.
    fn create(&mut self, new: NewScore) -> Result<Score, ScoreError>;

    /// # Errors
    /// Returns `ScoreError::NotFound` for an unknown id and
    /// `ScoreError::Validation` for a blank name.
    fn update(&mut self, id: u64, update: ScoreUpdate) -> Result<Score, ScoreError>;
}

/// The leaderboard's stored form, shared by every backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct ScoreTable {
    next_id: u64,
    scores: Vec<Score>,
}

impl ScoreTable {
    fn sorted(&self) -> Vec<Score> {
        let mut scores = self.scores.clone();
        scores.sort_by(|a, b| {
            b.value
                .cmp(&a.value)
                .then(a.date.cmp(&b.date))
                .then(a.id.cmp(&b.id))
        });
        scores
    }

    fn get(&self, id: u64) -> Result<Score, ScoreError> {
        self.scores
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(ScoreError::NotFound(id))
    }

    fn insert(&mut self, new: NewScore, date: DateTime<Utc>) -> Result<Score, ScoreError> {
        let name = validate_name(&new.name)?;
        self.next_id += 1;
        let score = Score {
            id: self.next_id,
            name,
            value: new.value,
            date,
        };
        self.scores.push(score.clone());
        Ok(score)
    }

    fn update(&mut self, id: u64, update: ScoreUpdate) -> Result<Score, ScoreError> {
        let name = update.name.as_deref().map(validate_name).transpose()?;
        let score = self
            .scores
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(ScoreError::NotFound(id))?;

        if let Some(name) = name {
            score.name = name;
        }
        if let Some(value) = update.value {
            score.value = value;
        }
        Ok(score.clone())
    }
}

fn validate_name(name: &str) -> Result<String, ScoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ScoreError::Validation {
            field: "name",
            message: "name field is required".to_string(),
        });
    }
    Ok(name.to_string())
}

/// Leaderboard held in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreBoard {
    table: ScoreTable,
}

impl MemoryScoreBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreBoard for MemoryScoreBoard {
    fn list(&self) -> Result<Vec<Score>, ScoreError> {
        Ok(self.table.sorted())
    }

    fn get(&self, id: u64) -> Result<Score, ScoreError> {
        self.table.get(id)
    }

    fn create(&mut self, new: NewScore) -> Result<Score, ScoreError> {
        self.table.insert(new, Utc::now())
    }

    fn update(&mut self, id: u64, update: ScoreUpdate) -> Result<Score, ScoreError> {
        self.table.update(id, update)
    }
}

/// Leaderboard stored as one JSON file, re-read on every call
#[derive(Debug, Clone)]
pub struct JsonScoreBoard {
    path: PathBuf,
}

impl JsonScoreBoard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Board at `<dir>/scores.json`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(SCORES_FILE))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<ScoreTable, ScoreError> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }

    fn store(&self, table: &ScoreTable) -> Result<(), ScoreError> {
        write_json(&self.path, table)?;
        Ok(())
    }
}

impl ScoreBoard for JsonScoreBoard {
    fn list(&self) -> Result<Vec<Score>, ScoreError> {
        Ok(self.load()?.sorted())
    }

    fn get(&self, id: u64) -> Result<Score, ScoreError> {
        self.load()?.get(id)
    }

    fn create(&mut self, new: NewScore) -> Result<Score, ScoreError> {
        let mut table = self.load()?;
        let score = table.insert(new, Utc::now())?;
        self.store(&table)?;
        Ok(score)
    }

    fn update(&mut self, id: u64, update: ScoreUpdate) -> Result<Score, ScoreError> {
        let mut table = self.load()?;
        let score = table.update(id, update)?;
        self.store(&table)?;
        Ok(score)
    }
}

/// Record a player's streak on the leaderboard
///
/// Names match case-insensitively. An existing entry is only raised, never
/// lowered; a player without an entry gets one. A blank name records nothing.
/// Returns the created or updated entry, or `None` when nothing changed.
///
/// # Errors
/// Propagates errors from the board.
pub fn record_streak(
    board: &mut dyn ScoreBoard,
    name: &str,
    streak: u32,
) -> Result<Option<Score>, ScoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }

    let existing = board
        .list()?
        .into_iter()
        .find(|s| s.name.to_lowercase() == name.to_lowercase());

    match existing {
        Some(score) if score.value < streak => {
            let update = ScoreUpdate {
                value: Some(streak),
                ..ScoreUpdate::default()
            };
            board.update(score.id, update).map(Some)
        }
        Some(_) => Ok(None),
        None => board
            .create(NewScore {
                name: name.to_string(),
                value: streak,
            })
            .map(Some),
    }
}

/// The best `n` scores
///
/// # Errors
/// Propagates errors from the board.
pub fn top(board: &dyn ScoreBoard, n: usize) -> Result<Vec<Score>, ScoreError> {
    let mut scores = board.list()?;
    scores.truncate(n);
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn new_score(name: &str, value: u32) -> NewScore {
        NewScore {
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn list_orders_by_value_descending() {
        let mut board = MemoryScoreBoard::new();
        board.create(new_score("ada", 3)).unwrap();
        board.create(new_score("bob", 9)).unwrap();
        board.create(new_score("cy", 5)).unwrap();

        let values: Vec<u32> = board.list().unwrap().iter().map(|s| s.value).collect();
        assert_eq!(values, [9, 5, 3]);
    }

    #[test]
    fn ties_keep_older_entry_first() {
        let mut table = ScoreTable::default();
        let later = Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        table.insert(new_score("late", 4), later).unwrap();
        table.insert(new_score("early", 4), earlier).unwrap();

        let names: Vec<String> = table.sorted().into_iter().map(|s| s.name).collect();
        assert_eq!(names, ["early", "late"]);
    }

    #[test]
    fn create_assigns_ids_and_trims_name() {
        let mut board = MemoryScoreBoard::new();
        let first = board.create(new_score("  ada ", 1)).unwrap();
        let second = board.create(new_score("bob", 2)).unwrap();

        assert_eq!(first.name, "ada");
        assert_ne!(first.id, second.id);
        assert_eq!(board.get(first.id).unwrap(), first);
    }

    #[test]
    fn create_rejects_blank_name() {
        let mut board = MemoryScoreBoard::new();
        let err = board.create(new_score("   ", 1)).unwrap_err();
        assert!(matches!(err, ScoreError::Validation { field: "name", .. }));
        assert!(board.list().unwrap().is_empty());
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let board = MemoryScoreBoard::new();
        assert!(matches!(board.get(42), Err(ScoreError::NotFound(42))));
    }

    #[test]
    fn update_is_partial() {
        let mut board = MemoryScoreBoard::new();
        let score = board.create(new_score("ada", 1)).unwrap();

        let updated = board
            .update(
                score.id,
                ScoreUpdate {
                    value: Some(6),
                    ..ScoreUpdate::default()
                },
            )
            .unwrap();
        assert_eq!(updated.name, "ada");
        assert_eq!(updated.value, 6);
        assert_eq!(updated.date, score.date);

        let renamed = board
            .update(
                score.id,
                ScoreUpdate {
                    name: Some("Ada L".to_string()),
                    value: None,
                },
            )
            .unwrap();
        assert_eq!(renamed.name, "Ada L");
        assert_eq!(renamed.value, 6);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut board = MemoryScoreBoard::new();
        let err = board.update(7, ScoreUpdate::default()).unwrap_err();
        assert!(matches!(err, ScoreError::NotFound(7)));
    }

    #[test]
    fn record_streak_creates_missing_player() {
        let mut board = MemoryScoreBoard::new();
        let created = record_streak(&mut board, "ada", 2).unwrap().unwrap();
        assert_eq!(created.value, 2);
        assert_eq!(board.list().unwrap().len(), 1);
    }

    #[test]
    fn record_streak_raises_existing_case_insensitively() {
        let mut board = MemoryScoreBoard::new();
        let original = board.create(new_score("Ada", 2)).unwrap();

        let updated = record_streak(&mut board, "ADA", 5).unwrap().unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.value, 5);
        assert_eq!(board.list().unwrap().len(), 1);
    }

    #[test]
    fn record_streak_never_lowers() {
        let mut board = MemoryScoreBoard::new();
        board.create(new_score("ada", 5)).unwrap();

        assert_eq!(record_streak(&mut board, "ada", 5).unwrap(), None);
        assert_eq!(record_streak(&mut board, "ada", 0).unwrap(), None);
        assert_eq!(board.list().unwrap()[0].value, 5);
    }

    #[test]
    fn record_streak_ignores_blank_name() {
        let mut board = MemoryScoreBoard::new();
        assert_eq!(record_streak(&mut board, " ", 3).unwrap(), None);
        assert!(board.list().unwrap().is_empty());
    }

    #[test]
    fn top_truncates() {
        let mut board = MemoryScoreBoard::new();
        for (name, value) in [("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 5)] {
            board.create(new_score(name, value)).unwrap();
        }
        let best: Vec<u32> = top(&board, 4).unwrap().iter().map(|s| s.value).collect();
        assert_eq!(best, [5, 4, 3, 2]);
    }

    #[test]
    fn json_board_persists_between_instances() {
        let dir = tempfile::tempdir().unwrap();
        let mut board = JsonScoreBoard::in_dir(dir.path());
        let score = board.create(new_score("ada", 3)).unwrap();
        board
            .update(
                score.id,
                ScoreUpdate {
                    value: Some(8),
                    ..ScoreUpdate::default()
                },
            )
            .unwrap();

        let reopened = JsonScoreBoard::in_dir(dir.path());
        let listed = reopened.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].value, 8);
        assert_eq!(reopened.get(score.id).unwrap().name, "ada");
    }

    #[test]
    fn json_board_ids_stay_unique_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let first = JsonScoreBoard::in_dir(dir.path())
            .create(new_score("ada", 1))
            .unwrap();
        let second = JsonScoreBoard::in_dir(dir.path())
            .create(new_score("bob", 1))
            .unwrap();
        assert_ne!(first.id, second.id);
    }
}
