//! Guess evaluation
//!
//! Scores a guess against the answer, producing one `Verdict` per position.
//! The default rule follows standard Wordle duplicate-letter handling: a letter
//! is marked `Correct`/`Present` at most as many times as it occurs in the
//! answer.

use super::{Verdict, Word};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a guess cannot be scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("attempt must be {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// How repeated letters are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringRule {
    /// Count-limited: greens first, then yellows from the remaining letter pool
    #[default]
    Standard,
    /// Each position judged independently; repeated letters may all be yellow
    Naive,
}

impl ScoringRule {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Naive => "naive",
        }
    }
}

impl FromStr for ScoringRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "naive" => Ok(Self::Naive),
            other => Err(format!(
                "Unknown scoring rule '{other}' (expected 'standard' or 'naive')"
            )),
        }
    }
}

impl fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scored guess: each letter paired with its verdict
///
/// Created only by evaluation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedGuess {
    word: Word,
    verdicts: Vec<Verdict>,
}

impl EvaluatedGuess {
    /// The guessed word
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Verdicts in position order
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    /// (letter, verdict) pairs in position order
    pub fn letters(&self) -> impl Iterator<Item = (u8, Verdict)> + '_ {
        self.word
            .chars()
            .iter()
            .copied()
            .zip(self.verdicts.iter().copied())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// True when every position is `Correct`
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.verdicts.iter().all(|&v| v == Verdict::Correct)
    }

    /// Count positions with the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.verdicts.iter().filter(|&&v| v == verdict).count()
    }

    /// Share line such as "🟩🟨⬛⬛🟩"
    ///
    /// # Examples
    /// ```
    /// use wriddle::core::{Word, evaluate};
    ///
    /// let answer = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// let scored = evaluate(&answer, &guess).unwrap();
    /// assert_eq!(scored.to_emoji(), "⬛⬛🟩⬛🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.verdicts.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for EvaluatedGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

/// Score `guess` against `answer` with the standard rule
///
/// # Errors
/// Returns `EvaluationError::InvalidLength` if the lengths differ.
///
/// # Examples
/// ```
/// use wriddle::core::{Verdict, Word, evaluate};
///
/// let answer = Word::new("crane").unwrap();
/// let guess = Word::new("trace").unwrap();
/// let scored = evaluate(&answer, &guess).unwrap();
///
/// assert_eq!(scored.verdicts()[0], Verdict::Absent); // t
/// assert_eq!(scored.verdicts()[3], Verdict::Present); // c
/// assert_eq!(scored.verdicts()[4], Verdict::Correct); // e
/// ```
pub fn evaluate(answer: &Word, guess: &Word) -> Result<EvaluatedGuess, EvaluationError> {
    evaluate_with(ScoringRule::Standard, answer, guess)
}

/// Score `guess` against `answer` with an explicit rule
///
/// # Errors
/// Returns `EvaluationError::InvalidLength` if the lengths differ.
pub fn evaluate_with(
    rule: ScoringRule,
    answer: &Word,
    guess: &Word,
) -> Result<EvaluatedGuess, EvaluationError> {
    if guess.len() != answer.len() {
        return Err(EvaluationError::InvalidLength {
            expected: answer.len(),
            actual: guess.len(),
        });
    }

    let verdicts = match rule {
        ScoringRule::Standard => score_count_limited(answer, guess),
        ScoringRule::Naive => score_naive(answer, guess),
    };

    Ok(EvaluatedGuess {
        word: guess.clone(),
        verdicts,
    })
}

fn score_count_limited(answer: &Word, guess: &Word) -> Vec<Verdict> {
    let mut result = vec![Verdict::Absent; guess.len()];
    let mut answer_available = answer.char_counts();

    // First pass: exact position matches, removed from the pool
    for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
        if g == a {
            result[i] = Verdict::Correct;
            if let Some(count) = answer_available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, limited by what is left in the pool
    for (i, &letter) in guess.chars().iter().enumerate() {
        if result[i] == Verdict::Correct {
            continue;
        }
        if let Some(count) = answer_available.get_mut(&letter)
            && *count > 0
        {
            result[i] = Verdict::Present;
            *count -= 1;
        }
    }

    result
}

fn score_naive(answer: &Word, guess: &Word) -> Vec<Verdict> {
    guess
        .chars()
        .iter()
        .zip(answer.chars())
        .map(|(&g, &a)| {
            if g == a {
                Verdict::Correct
            } else if answer.has_letter(g) {
                Verdict::Present
            } else {
                Verdict::Absent
            }
        })
        .collect()
}
