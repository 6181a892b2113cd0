//! Per-letter feedback values
//!
//! `Verdict` is what the evaluator assigns to one position of a guess.
//! `LetterState` is the keyboard's view of a letter: a verdict, or `Unknown`
//! when the letter has never been guessed. Both derive `Ord` from declaration
//! order, which is the ranking used when aggregating.

use std::fmt;

/// Feedback for one position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    /// Letter not in the answer, or already fully accounted for
    Absent,
    /// Letter in the answer, wrong position
    Present,
    /// Letter in the right position
    Correct,
}

impl Verdict {
    /// Square emoji used in share lines
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }

    /// Parse one feedback character
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/⬛/⬜.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬛' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

/// Best-known state of a keyboard letter
///
/// Ordered `Unknown < Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterState {
    #[default]
    Unknown,
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// The verdict behind this state, if the letter has been guessed
    #[must_use]
    pub const fn verdict(self) -> Option<Verdict> {
        match self {
            Self::Unknown => None,
            Self::Absent => Some(Verdict::Absent),
            Self::Present => Some(Verdict::Present),
            Self::Correct => Some(Verdict::Correct),
        }
    }
}

impl From<Verdict> for LetterState {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Absent => Self::Absent,
            Verdict::Present => Self::Present,
            Verdict::Correct => Self::Correct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_ranking() {
        assert!(Verdict::Absent < Verdict::Present);
        assert!(Verdict::Present < Verdict::Correct);
    }

    #[test]
    fn letter_state_ranking() {
        let mut states = [
            LetterState::Correct,
            LetterState::Unknown,
            LetterState::Present,
            LetterState::Absent,
        ];
        states.sort();
        assert_eq!(
            states,
            [
                LetterState::Unknown,
                LetterState::Absent,
                LetterState::Present,
                LetterState::Correct,
            ]
        );
    }

    #[test]
    fn letter_state_from_verdict_preserves_order() {
        let verdicts = [Verdict::Absent, Verdict::Present, Verdict::Correct];
        for pair in verdicts.windows(2) {
            assert!(LetterState::from(pair[0]) < LetterState::from(pair[1]));
        }
        for v in verdicts {
            assert!(LetterState::from(v) > LetterState::Unknown);
            assert_eq!(LetterState::from(v).verdict(), Some(v));
        }
        assert_eq!(LetterState::Unknown.verdict(), None);
    }

    #[test]
    fn verdict_from_char() {
        assert_eq!(Verdict::from_char('G'), Some(Verdict::Correct));
        assert_eq!(Verdict::from_char('🟨'), Some(Verdict::Present));
        assert_eq!(Verdict::from_char('_'), Some(Verdict::Absent));
        assert_eq!(Verdict::from_char('x'), None);
    }
}
