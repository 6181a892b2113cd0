//! One-shot guess evaluation
//!
//! Scores a single guess against a given answer without a dictionary check,
//! handy for checking what the game would show.

use crate::core::{EvaluatedGuess, KeyboardState, ScoringRule, Word, aggregate, evaluate_with};

/// Result of evaluating one guess
#[derive(Debug)]
pub struct EvalResult {
    pub answer: Word,
    pub rule: ScoringRule,
    pub evaluated: EvaluatedGuess,
    pub keyboard: KeyboardState,
}

/// Score `guess` against `answer` under `rule`
///
/// # Errors
///
/// Returns an error if either word is malformed or their lengths differ.
pub fn eval_guess(answer: &str, guess: &str, rule: ScoringRule) -> Result<EvalResult, String> {
    let answer = Word::new(answer).map_err(|e| format!("Invalid answer: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    let evaluated = evaluate_with(rule, &answer, &guess).map_err(|e| e.to_string())?;
    let keyboard = aggregate([&evaluated]);

    Ok(EvalResult {
        answer,
        rule,
        evaluated,
        keyboard,
    })
}
