//! Leaderboard and streak maintenance commands

use crate::storage::{
    NewScore, Score, ScoreBoard, ScoreError, ScoreUpdate, StorageError, StreakStore, top,
};

/// Highest `limit` scores
///
/// # Errors
///
/// Returns an error if the board cannot be read.
pub fn list_scores(board: &dyn ScoreBoard, limit: usize) -> Result<Vec<Score>, ScoreError> {
    top(board, limit)
}

/// One score by id
///
/// # Errors
///
/// Returns `ScoreError::NotFound` for an unknown id.
pub fn show_score(board: &dyn ScoreBoard, id: u64) -> Result<Score, ScoreError> {
    board.get(id)
}

/// Add a score by hand
///
/// # Errors
///
/// Returns `ScoreError::Validation` for a blank name.
pub fn add_score(board: &mut dyn ScoreBoard, name: &str, value: u32) -> Result<Score, ScoreError> {
    board.create(NewScore {
        name: name.to_string(),
        value,
    })
}

/// Change the name and/or value of a score
///
/// # Errors
///
/// Returns `ScoreError::NotFound` for an unknown id and
/// `ScoreError::Validation` if nothing is changed or the new name is blank.
pub fn update_score(
    board: &mut dyn ScoreBoard,
    id: u64,
    name: Option<String>,
    value: Option<u32>,
) -> Result<Score, ScoreError> {
    if name.is_none() && value.is_none() {
        return Err(ScoreError::Validation {
            field: "update",
            message: "give --name and/or --value".to_string(),
        });
    }
    board.update(id, ScoreUpdate { name, value })
}

/// Current streak, reset to zero first when `reset` is set
///
/// # Errors
///
/// Returns an error if the streak cannot be read or written.
pub fn streak(store: &mut dyn StreakStore, reset: bool) -> Result<u32, StorageError> {
    if reset {
        store.save(0)?;
        tracing::info!("streak reset");
    }
    store.load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonScoreBoard, MemoryScoreBoard, MemoryStreakStore};

    #[test]
    fn add_list_show_update() {
        let mut board = MemoryScoreBoard::new();
        let low = add_score(&mut board, "bob", 2).unwrap();
        let high = add_score(&mut board, "ada", 7).unwrap();

        let listed = list_scores(&board, 10).unwrap();
        assert_eq!(listed, vec![high.clone(), low.clone()]);
        assert_eq!(show_score(&board, low.id).unwrap(), low);

        let updated = update_score(&mut board, low.id, None, Some(9)).unwrap();
        assert_eq!(updated.value, 9);
        assert_eq!(list_scores(&board, 1).unwrap(), vec![updated]);
    }

    #[test]
    fn update_without_fields_is_rejected() {
        let mut board = MemoryScoreBoard::new();
        let score = add_score(&mut board, "ada", 1).unwrap();
        assert!(matches!(
            update_score(&mut board, score.id, None, None),
            Err(ScoreError::Validation { .. })
        ));
    }

    #[test]
    fn unknown_id_not_found() {
        let board = MemoryScoreBoard::new();
        assert!(matches!(show_score(&board, 42), Err(ScoreError::NotFound(42))));
    }

    #[test]
    fn scores_persist_in_json_board() {
        let dir = tempfile::tempdir().unwrap();
        let mut board = JsonScoreBoard::in_dir(dir.path());
        add_score(&mut board, "ada", 3).unwrap();

        let reopened = JsonScoreBoard::in_dir(dir.path());
        assert_eq!(list_scores(&reopened, 4).unwrap().len(), 1);
    }

    #[test]
    fn streak_reset() {
        let mut store = MemoryStreakStore::new(5);
        assert_eq!(streak(&mut store, false).unwrap(), 5);
        assert_eq!(streak(&mut store, true).unwrap(), 0);
    }
}
