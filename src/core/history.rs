//! Append-only log of evaluated guesses for one round

use super::EvaluatedGuess;
use thiserror::Error;

/// Guesses allowed per round
pub const MAX_ATTEMPTS: usize = 6;

/// Returned when appending to a history that already holds `MAX_ATTEMPTS` guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("attempt history is full ({} guesses)", MAX_ATTEMPTS)]
pub struct HistoryFull;

/// Ordered guesses of the current round
///
/// Entries can be appended and read, never edited or removed. Starting a new
/// round means building a new history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttemptHistory {
    entries: Vec<EvaluatedGuess>,
}

impl AttemptHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a guess
    ///
    /// # Errors
    /// Returns `HistoryFull` once `MAX_ATTEMPTS` guesses are recorded.
    pub fn push(&mut self, guess: EvaluatedGuess) -> Result<(), HistoryFull> {
        if self.is_full() {
            return Err(HistoryFull);
        }
        self.entries.push(guess);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_ATTEMPTS
    }

    #[must_use]
    pub fn last(&self) -> Option<&EvaluatedGuess> {
        self.entries.last()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[EvaluatedGuess] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EvaluatedGuess> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a AttemptHistory {
    type Item = &'a EvaluatedGuess;
    type IntoIter = std::slice::Iter<'a, EvaluatedGuess>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
