//! Result of a finished round.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Outcome of a finished round.
///
/// Exactly one outcome holds per round: a line can only be completed by
/// the player who just moved, and a full board is only a tie when no line
/// was completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A marker completed a line.
    Winner(Mark),
    /// The board filled with no complete line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "{} wins", mark),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}
