//! Core domain types for the game
//!
//! Pure, synchronous building blocks: words, verdicts, guess evaluation, the
//! attempt history and the keyboard view derived from it.

mod evaluation;
mod history;
mod keyboard;
mod verdict;
mod word;

pub use evaluation::{EvaluatedGuess, EvaluationError, ScoringRule, evaluate, evaluate_with};
pub use history::{AttemptHistory, HistoryFull, MAX_ATTEMPTS};
pub use keyboard::{KEYBOARD_ROWS, KeyboardState, aggregate};
pub use verdict::{LetterState, Verdict};
pub use word::{WORD_LENGTH, Word, WordError};
