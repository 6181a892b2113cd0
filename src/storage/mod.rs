//! Persistence collaborators
//!
//! The game itself never touches the filesystem. It is handed a
//! `StreakStore` (and optionally a `ScoreBoard`) and calls them at the end of
//! a round. The JSON-file implementations here are plain read-modify-write
//! with no locking: one player, one process.

pub mod scores;
pub mod streak;

pub use scores::{
    JsonScoreBoard, MemoryScoreBoard, NewScore, Score, ScoreBoard, ScoreError, ScoreUpdate,
    record_streak, top,
};
pub use streak::{JsonStreakStore, MemoryStreakStore, StreakStore};

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A persistence operation that failed
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to serialize data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Read a JSON document; a missing file yields `None`
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| StorageError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Write a JSON document, creating parent directories as needed
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    let content = serde_json::to_string_pretty(value)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| StorageError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, content).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "wrote data file");
    Ok(())
}
