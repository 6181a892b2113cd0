//! Word list loading utilities
//!
//! Lists are filtered to playable words: valid letters and exactly
//! `WORD_LENGTH` long. Anything else is skipped rather than reported.

use crate::core::{WORD_LENGTH, Word};
use std::fs;
use std::io;
use std::path::Path;

/// Load playable words from a file, one per line
///
/// Blank lines, `#` comments and invalid entries are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wriddle::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(playable)
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to playable words
///
/// # Examples
/// ```
/// use wriddle::dictionary::loader::words_from_slice;
/// use wriddle::dictionary::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| playable(s)).collect()
}

fn playable(text: &str) -> Option<Word> {
    Word::new(text).ok().filter(|w| w.len() == WORD_LENGTH)
}
