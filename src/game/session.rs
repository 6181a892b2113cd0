//! A player's session: the running round plus everything that outlives it
//!
//! The session owns the current round exclusively. At the end of each round
//! it updates the win streak and hands it to the injected stores; a failing
//! store is logged and otherwise ignored so that a broken disk never costs
//! the player their game.

use super::messages::victory_message;
use super::{GameError, Round, RoundStatus};
use crate::core::{EvaluatedGuess, KeyboardState, MAX_ATTEMPTS, ScoringRule, Word};
use crate::dictionary::Dictionary;
use crate::storage::{ScoreBoard, StreakStore, record_streak};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Results across the rounds of one session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by number of guesses used (index 0 unused)
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// What happened to an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub evaluated: EvaluatedGuess,
    pub status: RoundStatus,
    /// Guesses used so far in this round
    pub attempts: usize,
    /// Set on a win, e.g. "Splendid!"
    pub victory_message: Option<String>,
}

struct Leaderboard<'a> {
    board: Box<dyn ScoreBoard + 'a>,
    player: String,
}

pub struct Session<'a> {
    answers: &'a [Word],
    dictionary: &'a dyn Dictionary,
    streak_store: Box<dyn StreakStore + 'a>,
    leaderboard: Option<Leaderboard<'a>>,
    rng: StdRng,
    round: Round,
    streak: u32,
    stats: Statistics,
}

impl<'a> Session<'a> {
    /// Start a session and its first round
    ///
    /// The persisted streak is loaded here; if it cannot be read the session
    /// starts from zero.
    ///
    /// # Errors
    /// Returns `GameError::EmptyAnswerPool` if `answers` is empty and
    /// `GameError::InvalidAnswer` if the drawn answer is not playable.
    pub fn new(
        answers: &'a [Word],
        dictionary: &'a dyn Dictionary,
        streak_store: Box<dyn StreakStore + 'a>,
        rule: ScoringRule,
        mut rng: StdRng,
    ) -> Result<Self, GameError> {
        let answer = answers
            .choose(&mut rng)
            .cloned()
            .ok_or(GameError::EmptyAnswerPool)?;
        let round = Round::new(answer, rule)?;

        let streak = streak_store.load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "could not load streak, starting from 0");
            0
        });

        tracing::info!(streak, rule = %rule, answers = answers.len(), "session started");

        Ok(Self {
            answers,
            dictionary,
            streak_store,
            leaderboard: None,
            rng,
            round,
            streak,
            stats: Statistics::default(),
        })
    }

    /// Also record the streak on `board` under `player` at the end of each round
    #[must_use]
    pub fn with_leaderboard(mut self, board: Box<dyn ScoreBoard + 'a>, player: &str) -> Self {
        self.leaderboard = Some(Leaderboard {
            board,
            player: player.to_string(),
        });
        self
    }

    /// Abandon the current round and start another with a random answer
    ///
    /// # Errors
    /// Returns `GameError::EmptyAnswerPool` if there is nothing to draw from.
    pub fn new_round(&mut self) -> Result<(), GameError> {
        let answer = self
            .answers
            .choose(&mut self.rng)
            .cloned()
            .ok_or(GameError::EmptyAnswerPool)?;
        self.new_round_with(answer)
    }

    /// Start a round with a chosen answer
    ///
    /// # Errors
    /// Returns `GameError::InvalidAnswer` unless the answer is playable.
    pub fn new_round_with(&mut self, answer: Word) -> Result<(), GameError> {
        self.round = Round::new(answer, self.round.rule())?;
        tracing::info!("new round started");
        Ok(())
    }

    /// Validate, check and score a guess typed by the player
    ///
    /// Checks run in order: round still open, well-formed word, right length,
    /// known word. Any failure is returned without recording the guess.
    ///
    /// # Errors
    /// Returns the first `GameError` hit by the checks above.
    pub fn submit(&mut self, input: &str) -> Result<Submission, GameError> {
        if self.round.status().is_over() {
            tracing::debug!("guess refused: round already over");
            return Err(GameError::RoundOver);
        }

        let guess = Word::new(input)?;
        let expected = self.round.answer().len();
        if guess.len() != expected {
            return Err(GameError::InvalidLength { expected });
        }

        match self.dictionary.is_valid_word(&guess) {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(guess = %guess, "guess refused: not in dictionary");
                return Err(GameError::NotAWord(guess.text().to_string()));
            }
            Err(err) => {
                tracing::warn!(guess = %guess, error = %err, "dictionary lookup failed");
                return Err(GameError::DictionaryUnavailable(err));
            }
        }

        let evaluated = self.round.submit(&guess)?;
        let status = self.round.status();
        let attempts = self.round.history().len();
        tracing::info!(attempts, pattern = %evaluated.to_emoji(), "guess scored");

        let victory_message = match status {
            RoundStatus::InProgress => None,
            RoundStatus::Won => {
                self.finish_round(true, attempts);
                Some(victory_message(&mut self.rng))
            }
            RoundStatus::Lost => {
                self.finish_round(false, attempts);
                None
            }
        };

        Ok(Submission {
            evaluated,
            status,
            attempts,
            victory_message,
        })
    }

    fn finish_round(&mut self, won: bool, attempts: usize) {
        self.stats.total_games += 1;
        if won {
            self.stats.games_won += 1;
            if let Some(slot) = self.stats.guess_distribution.get_mut(attempts) {
                *slot += 1;
            }
            self.streak = self.streak.saturating_add(1);
        } else {
            self.streak = 0;
        }

        tracing::info!(won, attempts, streak = self.streak, "round finished");

        if let Err(err) = self.streak_store.save(self.streak) {
            tracing::warn!(error = %err, "could not save streak");
        }

        if let Some(leaderboard) = self.leaderboard.as_mut() {
            let recorded =
                record_streak(leaderboard.board.as_mut(), &leaderboard.player, self.streak);
            match recorded {
                Ok(Some(score)) => {
                    tracing::info!(name = %score.name, value = score.value, "leaderboard updated");
                }
                Ok(None) => {}
                Err(err) => tracing::warn!(error = %err, "could not update leaderboard"),
            }
        }
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Keyboard recomputed from the current round's guesses
    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        self.round.keyboard()
    }

    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn rule(&self) -> ScoringRule {
        self.round.rule()
    }
}
