//! Keyboard state derived from the attempt history
//!
//! The keyboard is never updated in place: it is recomputed from every
//! evaluated guess each time it is needed, keeping the best state seen for
//! each letter.

use super::{EvaluatedGuess, LetterState};

/// On-screen keyboard layout, top row first
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best-known state for each letter `a..=z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardState {
    letters: [LetterState; 26],
}

impl KeyboardState {
    /// State of a letter; anything outside `a..=z` is `Unknown`
    #[must_use]
    pub fn get(&self, letter: u8) -> LetterState {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.letters[usize::from(letter - b'a')]
        } else {
            LetterState::Unknown
        }
    }

    /// Letters with their states, alphabetical
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterState)> + '_ {
        (b'a'..=b'z').zip(self.letters.iter().copied())
    }

    /// True when no letter ranks lower here than in `other`
    #[must_use]
    pub fn dominates(&self, other: &Self) -> bool {
        self.letters
            .iter()
            .zip(other.letters.iter())
            .all(|(mine, theirs)| mine >= theirs)
    }

    fn raise(&mut self, letter: u8, state: LetterState) {
        if letter.is_ascii_lowercase() {
            let slot = &mut self.letters[usize::from(letter - b'a')];
            if state > *slot {
                *slot = state;
            }
        }
    }
}

/// Recompute the keyboard from a sequence of evaluated guesses
///
/// Accepts an `&AttemptHistory` or any iterator of `&EvaluatedGuess`.
///
/// # Examples
/// ```
/// use wriddle::core::{LetterState, Word, aggregate, evaluate};
///
/// let answer = Word::new("crane").unwrap();
/// let first = evaluate(&answer, &Word::new("trace").unwrap()).unwrap();
/// let keyboard = aggregate([&first]);
///
/// assert_eq!(keyboard.get(b'r'), LetterState::Correct);
/// assert_eq!(keyboard.get(b'c'), LetterState::Present);
/// assert_eq!(keyboard.get(b't'), LetterState::Absent);
/// assert_eq!(keyboard.get(b'z'), LetterState::Unknown);
/// ```
pub fn aggregate<'a, I>(history: I) -> KeyboardState
where
    I: IntoIterator<Item = &'a EvaluatedGuess>,
{
    let mut keyboard = KeyboardState::default();
    for guess in history {
        for (letter, verdict) in guess.letters() {
            keyboard.raise(letter, verdict.into());
        }
    }
    keyboard
}
