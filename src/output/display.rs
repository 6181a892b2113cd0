//! Colored terminal display for the line-oriented commands

use super::formatters::{medal, streak_flames};
use crate::commands::EvalResult;
use crate::core::{EvaluatedGuess, KEYBOARD_ROWS, KeyboardState, LetterState, Verdict};
use crate::storage::Score;
use colored::{ColoredString, Colorize};

/// A single letter tile colored by verdict
#[must_use]
pub fn tile(letter: u8, verdict: Verdict) -> ColoredString {
    let text = format!(" {} ", char::from(letter).to_ascii_uppercase());
    match verdict {
        Verdict::Correct => text.white().bold().on_green(),
        Verdict::Present => text.white().bold().on_truecolor(255, 140, 0),
        Verdict::Absent => text.white().bold().on_bright_black(),
    }
}

/// A keyboard key colored by its best-known state
fn key(letter: u8, state: LetterState) -> ColoredString {
    match state.verdict() {
        Some(verdict) => tile(letter, verdict),
        None => format!(" {} ", char::from(letter).to_ascii_uppercase())
            .black()
            .on_white(),
    }
}

/// Print a scored guess as a row of tiles
pub fn print_evaluated_guess(guess: &EvaluatedGuess) {
    let row: Vec<String> = guess
        .letters()
        .map(|(letter, verdict)| tile(letter, verdict).to_string())
        .collect();
    println!("  {}", row.join(" "));
}

/// Print the on-screen keyboard
pub fn print_keyboard(keyboard: &KeyboardState) {
    println!();
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .bytes()
            .map(|letter| key(letter, keyboard.get(letter)).to_string())
            .collect();
        println!("  {}{}", " ".repeat(indent * 2), keys.join(""));
    }
    println!();
}

/// Print the streak line, e.g. "Win Streak: 3 🔥🔥🔥"
pub fn print_streak(streak: u32) {
    println!(
        "Win Streak: {} {}",
        streak.to_string().bright_yellow().bold(),
        streak_flames(streak)
    );
}

/// Print the leaderboard
pub fn print_leaderboard(scores: &[Score]) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "HIGH SCORES".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    if scores.is_empty() {
        println!("\n  No scores yet. Win a round to get on the board!\n");
        return;
    }

    for (rank, score) in scores.iter().enumerate() {
        println!(
            "  {:>2}. {:<2} {:<20} {:>4}",
            rank + 1,
            medal(rank),
            score.name.to_uppercase().bold(),
            score.value.to_string().bright_yellow().bold()
        );
    }
    println!();
}

/// Print one leaderboard entry with all its fields
pub fn print_score(score: &Score) {
    println!("  id:    {}", score.id);
    println!("  name:  {}", score.name.bold());
    println!("  value: {}", score.value.to_string().bright_yellow());
    println!("  date:  {}", score.date.format("%Y-%m-%d %H:%M UTC"));
}

/// Print the result of a one-shot evaluation
pub fn print_eval_result(result: &EvalResult) {
    println!(
        "\nAnswer: {}   Rule: {}",
        result.answer.text().to_uppercase().bold(),
        result.rule
    );
    print_evaluated_guess(&result.evaluated);
    println!("  {}", result.evaluated.to_emoji());
    print_keyboard(&result.keyboard);
}
