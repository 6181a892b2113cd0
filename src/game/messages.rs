//! Player-facing texts for the end of a round

use rand::Rng;
use rand::seq::IndexedRandom;

pub const GAME_WON: &str = "YOU WIN! 🥳";
pub const GAME_LOST: &str = "Sorry, play again? 🥺";

/// One of these is shown (with a '!') after a win
pub const VICTORY_MESSAGES: [&str; 15] = [
    "Perfect",
    "Amazing",
    "Lovely",
    "Good job",
    "Nice",
    "Fantastic",
    "Bravo",
    "Splendid",
    "Stellar",
    "Awesome",
    "Great work",
    "Excellent",
    "Well done",
    "Super",
    "Way to go",
];

/// A random victory cheer such as "Bravo!"
pub fn victory_message<R: Rng + ?Sized>(rng: &mut R) -> String {
    let cheer = VICTORY_MESSAGES.choose(rng).copied().unwrap_or("Nice");
    format!("{cheer}!")
}

/// Shown after a loss
#[must_use]
pub fn reveal_answer(answer: &str) -> String {
    format!("The word was '{answer}'.")
}
