//! Win streak persistence

use super::{StorageError, read_json, write_json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name used inside the data directory
pub const STREAK_FILE: &str = "streak.json";

/// Loads and saves the current win streak
pub trait StreakStore {
    /// # Errors
    /// Returns `StorageError` if the stored streak cannot be read.
    fn load(&self) -> Result<u32, StorageError>;

    /// # Errors
    /// Returns `StorageError` if the streak cannot be written.
    fn save(&mut self, streak: u32) -> Result<(), StorageError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StreakRecord {
    streak: u32,
    updated: DateTime<Utc>,
}

/// Streak kept in a small JSON file; a missing file means no streak yet
#[derive(Debug, Clone)]
pub struct JsonStreakStore {
    path: PathBuf,
}

impl JsonStreakStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/streak.json`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(STREAK_FILE))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StreakStore for JsonStreakStore {
    fn load(&self) -> Result<u32, StorageError> {
        Ok(read_json::<StreakRecord>(&self.path)?.map_or(0, |record| record.streak))
    }

    fn save(&mut self, streak: u32) -> Result<(), StorageError> {
        let record = StreakRecord {
            streak,
            updated: Utc::now(),
        };
        write_json(&self.path, &record)
    }
}

/// Streak held in memory only
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStreakStore {
    streak: u32,
}

impl MemoryStreakStore {
    #[must_use]
    pub const fn new(streak: u32) -> Self {
        Self { streak }
    }
}

impl StreakStore for MemoryStreakStore {
    fn load(&self) -> Result<u32, StorageError> {
        Ok(self.streak)
    }

    fn save(&mut self, streak: u32) -> Result<(), StorageError> {
        self.streak = streak;
        Ok(())
    }
}
