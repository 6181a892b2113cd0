//! Errors surfaced to the player when a guess is refused

use crate::core::{EvaluationError, WORD_LENGTH, WordError};
use crate::dictionary::DictionaryError;
use thiserror::Error;

/// Why a guess or round operation was rejected
///
/// Every variant leaves the attempt history untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Game already over")]
    RoundOver,
    #[error("{0}")]
    InvalidWord(#[from] WordError),
    #[error("Attempt must be {expected} letters")]
    InvalidLength { expected: usize },
    #[error("Sorry, {0} is not a word")]
    NotAWord(String),
    #[error("Word check failed. Please try again")]
    DictionaryUnavailable(#[source] DictionaryError),
    #[error("No answers available to start a round")]
    EmptyAnswerPool,
    #[error("Answer '{0}' must be {len} letters", len = WORD_LENGTH)]
    InvalidAnswer(String),
}

impl From<EvaluationError> for GameError {
    fn from(err: EvaluationError) -> Self {
        match err {
            EvaluationError::InvalidLength { expected, .. } => Self::InvalidLength { expected },
        }
    }
}
