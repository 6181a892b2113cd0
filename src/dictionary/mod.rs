//! Word lists and dictionary lookup
//!
//! The game asks a `Dictionary` whether a guess is a real word before scoring
//! it. Lookups return a `Result` so that a backend which can fail (a network
//! service, a broken file) can say so without being mistaken for "not a word".

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// A dictionary lookup that could not be completed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("word check failed: {reason}")]
pub struct DictionaryError {
    pub reason: String,
}

impl DictionaryError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Decides whether a word may be guessed
pub trait Dictionary {
    /// # Errors
    /// Returns `DictionaryError` when the lookup itself fails.
    fn is_valid_word(&self, word: &Word) -> Result<bool, DictionaryError>;
}

/// In-memory dictionary backed by a hash set
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    pub fn new<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        Self {
            words: words.into_iter().map(|w| w.text().to_string()).collect(),
        }
    }

    /// Every embedded word: answers plus guess-only words
    #[must_use]
    pub fn embedded() -> Self {
        let mut list = Self::new(&loader::words_from_slice(ANSWERS));
        list.extend(&loader::words_from_slice(ALLOWED));
        list
    }

    pub fn extend<'a>(&mut self, words: impl IntoIterator<Item = &'a Word>) {
        self.words
            .extend(words.into_iter().map(|w| w.text().to_string()));
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn is_valid_word(&self, word: &Word) -> Result<bool, DictionaryError> {
        Ok(self.contains(word.text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_lists_are_playable_words() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answer_and_guess_only_lists_are_disjoint() {
        let answers: FxHashSet<_> = ANSWERS.iter().collect();
        for word in ALLOWED {
            assert!(!answers.contains(word), "'{word}' is in both lists");
        }
    }

    #[test]
    fn embedded_dictionary_covers_both_lists() {
        let dictionary = WordList::embedded();
        assert_eq!(dictionary.len(), ANSWERS_COUNT + ALLOWED_COUNT);
        assert!(dictionary.contains("crane"));
        assert!(dictionary.contains("salet"));
        assert!(!dictionary.contains("qqqqq"));
    }

    #[test]
    fn word_list_lookup() {
        let words = loader::words_from_slice(&["crane", "trace"]);
        let dictionary = WordList::new(&words);

        let crane = Word::new("crane").unwrap();
        let zebra = Word::new("zebra").unwrap();
        assert_eq!(dictionary.is_valid_word(&crane), Ok(true));
        assert_eq!(dictionary.is_valid_word(&zebra), Ok(false));
    }
}
