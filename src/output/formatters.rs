//! Formatting utilities for terminal output

use crate::core::{AttemptHistory, MAX_ATTEMPTS};
use crate::game::RoundStatus;

/// Share text for a finished round, e.g. "Wriddle 3/6" followed by the grid
#[must_use]
pub fn share_grid(history: &AttemptHistory, status: RoundStatus) -> String {
    let score = match status {
        RoundStatus::Won => history.len().to_string(),
        RoundStatus::Lost | RoundStatus::InProgress => "X".to_string(),
    };

    let mut out = format!("Wriddle {score}/{MAX_ATTEMPTS}");
    for guess in history {
        out.push('\n');
        out.push_str(&guess.to_emoji());
    }
    out
}

/// One 🔥 per streak point, capped so long streaks stay on one line
#[must_use]
pub fn streak_flames(streak: u32) -> String {
    const MAX_FLAMES: u32 = 20;
    let flames = "🔥".repeat(streak.min(MAX_FLAMES) as usize);
    if streak > MAX_FLAMES {
        format!("{flames}+")
    } else {
        flames
    }
}

/// Medal for the top three leaderboard places (0-based rank)
#[must_use]
pub const fn medal(rank: usize) -> &'static str {
    match rank {
        0 => "🥇",
        1 => "🥈",
        2 => "🥉",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};

    fn history(answer: &str, guesses: &[&str]) -> AttemptHistory {
        let answer = Word::new(answer).unwrap();
        let mut history = AttemptHistory::new();
        for guess in guesses {
            let scored = evaluate(&answer, &Word::new(guess).unwrap()).unwrap();
            history.push(scored).unwrap();
        }
        history
    }

    #[test]
    fn share_grid_for_win() {
        let history = history("crane", &["trace", "crane"]);
        let grid = share_grid(&history, RoundStatus::Won);
        assert_eq!(grid, "Wriddle 2/6\n⬛🟩🟩🟨🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_grid_for_loss() {
        let history = history("crane", &["slate"]);
        let grid = share_grid(&history, RoundStatus::Lost);
        assert!(grid.starts_with("Wriddle X/6\n"));
    }

    #[test]
    fn streak_flames_counts() {
        assert_eq!(streak_flames(0), "");
        assert_eq!(streak_flames(3), "🔥🔥🔥");
        assert!(streak_flames(25).ends_with('+'));
    }

    #[test]
    fn medals_for_podium_only() {
        assert_eq!(medal(0), "🥇");
        assert_eq!(medal(2), "🥉");
        assert_eq!(medal(3), "");
    }
}
