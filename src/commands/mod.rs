//! Command implementations

pub mod eval;
pub mod scores;
pub mod simple;

pub use eval::{EvalResult, eval_guess};
pub use scores::{add_score, list_scores, show_score, streak, update_score};
pub use simple::run_simple;
