//! One round: a secret answer and up to six scored guesses
//!
//! ```text
//! InProgress ──all-correct guess──▶ Won
//!     │
//!     └──sixth guess, not correct──▶ Lost
//! ```
//!
//! `Won` and `Lost` are terminal. Guesses submitted after that are refused.

use super::GameError;
use crate::core::{
    AttemptHistory, EvaluatedGuess, KeyboardState, MAX_ATTEMPTS, ScoringRule, WORD_LENGTH, Word,
    aggregate, evaluate_with,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Debug, Clone)]
pub struct Round {
    answer: Word,
    history: AttemptHistory,
    status: RoundStatus,
    rule: ScoringRule,
}

impl Round {
    /// Start a round for `answer`
    ///
    /// # Errors
    /// Returns `GameError::InvalidAnswer` unless the answer is `WORD_LENGTH` letters.
    pub fn new(answer: Word, rule: ScoringRule) -> Result<Self, GameError> {
        if answer.len() != WORD_LENGTH {
            return Err(GameError::InvalidAnswer(answer.text().to_string()));
        }

        Ok(Self {
            answer,
            history: AttemptHistory::new(),
            status: RoundStatus::InProgress,
            rule,
        })
    }

    /// Score a guess, record it and advance the state machine
    ///
    /// # Errors
    /// - `GameError::RoundOver` if the round already ended
    /// - `GameError::InvalidLength` if the guess length differs from the answer
    ///
    /// On error the history is unchanged.
    pub fn submit(&mut self, guess: &Word) -> Result<EvaluatedGuess, GameError> {
        if self.status.is_over() {
            return Err(GameError::RoundOver);
        }

        let scored = evaluate_with(self.rule, &self.answer, guess)?;
        self.history
            .push(scored.clone())
            .map_err(|_| GameError::RoundOver)?;

        if scored.is_all_correct() {
            self.status = RoundStatus::Won;
        } else if self.history.is_full() {
            self.status = RoundStatus::Lost;
        }

        Ok(scored)
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub const fn history(&self) -> &AttemptHistory {
        &self.history
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub const fn rule(&self) -> ScoringRule {
        self.rule
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.history.len()
    }

    /// Keyboard recomputed from this round's guesses
    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        aggregate(&self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterState, Verdict};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn round(answer: &str) -> Round {
        Round::new(word(answer), ScoringRule::Standard).unwrap()
    }

    #[test]
    fn crane_won_in_two() {
        let mut round = round("crane");

        let first = round.submit(&word("trace")).unwrap();
        assert!(!first.is_all_correct());
        assert_eq!(first.count(Verdict::Correct), 3);
        assert_eq!(round.status(), RoundStatus::InProgress);

        let second = round.submit(&word("crane")).unwrap();
        assert!(second.is_all_correct());
        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(round.history().len(), 2);
    }

    #[test]
    fn first_guess_win() {
        let mut round = round("crane");
        round.submit(&word("crane")).unwrap();
        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(round.attempts_remaining(), MAX_ATTEMPTS - 1);
    }

    #[test]
    fn win_on_sixth_guess() {
        let mut round = round("crane");
        for guess in ["slate", "audio", "pizza", "fjord", "brick"] {
            round.submit(&word(guess)).unwrap();
            assert_eq!(round.status(), RoundStatus::InProgress);
        }
        round.submit(&word("crane")).unwrap();
        assert_eq!(round.status(), RoundStatus::Won);
    }

    #[test]
    fn six_misses_lose() {
        let mut round = round("crane");
        for guess in ["slate", "audio", "pizza", "fjord", "brick", "trace"] {
            round.submit(&word(guess)).unwrap();
        }
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.attempts_remaining(), 0);
    }

    #[test]
    fn seventh_guess_rejected_without_touching_history() {
        let mut round = round("crane");
        for guess in ["slate", "audio", "pizza", "fjord", "brick", "trace"] {
            round.submit(&word(guess)).unwrap();
        }
        let before = round.history().clone();

        assert_eq!(round.submit(&word("crane")), Err(GameError::RoundOver));
        assert_eq!(round.history(), &before);
        assert_eq!(round.status(), RoundStatus::Lost);
    }

    #[test]
    fn guess_after_win_rejected() {
        let mut round = round("crane");
        round.submit(&word("crane")).unwrap();
        assert_eq!(round.submit(&word("trace")), Err(GameError::RoundOver));
        assert_eq!(round.history().len(), 1);
    }

    #[test]
    fn wrong_length_rejected() {
        let mut round = round("crane");
        assert_eq!(
            round.submit(&word("cranes")),
            Err(GameError::InvalidLength { expected: 5 })
        );
        assert!(round.history().is_empty());
        assert_eq!(round.status(), RoundStatus::InProgress);
    }

    #[test]
    fn answer_must_be_five_letters() {
        assert_eq!(
            Round::new(word("cat"), ScoringRule::Standard).unwrap_err(),
            GameError::InvalidAnswer("cat".to_string())
        );
        assert_eq!(
            GameError::InvalidAnswer("cat".to_string()).to_string(),
            "Answer 'cat' must be 5 letters"
        );
    }

    #[test]
    fn keyboard_follows_history() {
        let mut round = round("crane");
        assert_eq!(round.keyboard(), KeyboardState::default());

        round.submit(&word("trace")).unwrap();
        let keyboard = round.keyboard();
        assert_eq!(keyboard.get(b't'), LetterState::Absent);
        assert_eq!(keyboard.get(b'c'), LetterState::Present);

        round.submit(&word("crane")).unwrap();
        assert_eq!(round.keyboard().get(b'c'), LetterState::Correct);
        assert!(round.keyboard().dominates(&keyboard));
    }

    #[test]
    fn naive_rule_is_used_when_chosen() {
        let mut round = Round::new(word("speed"), ScoringRule::Naive).unwrap();
        let scored = round.submit(&word("eerie")).unwrap();
        assert_eq!(scored.count(Verdict::Present), 3);
        assert_eq!(round.rule(), ScoringRule::Naive);
    }
}
