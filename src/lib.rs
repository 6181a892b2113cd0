//! Wriddle
//!
//! A terminal word-guessing game: find the hidden five-letter word in six
//! tries, with colored feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wriddle::core::{Verdict, Word, evaluate};
//!
//! let answer = Word::new("crane").unwrap();
//! let guess = Word::new("trace").unwrap();
//!
//! let scored = evaluate(&answer, &guess).unwrap();
//! assert_eq!(scored.count(Verdict::Correct), 3);
//! println!("{}", scored.to_emoji());
//! ```

// Core domain types and scoring
pub mod core;

// Rounds, sessions and player-facing texts
pub mod game;

// Word lists and validity checks
pub mod dictionary;

// Streak and leaderboard persistence
pub mod storage;

// Config file and settings resolution
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
