//! Game flow: rounds, the player session and round-end texts

mod error;
pub mod messages;
mod round;
mod session;

pub use error::GameError;
pub use round::{Round, RoundStatus};
pub use session::{Session, Statistics, Submission};
