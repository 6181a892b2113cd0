//! Terminal output formatting
//!
//! Display utilities for the line-oriented commands and share text.

pub mod display;
pub mod formatters;

pub use display::{
    print_eval_result, print_evaluated_guess, print_keyboard, print_leaderboard, print_score,
    print_streak,
};
