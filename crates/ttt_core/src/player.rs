//! Players and set scoring.

use super::{Mark, Outcome};
use derive_getters::Getters;
use tracing::{info, instrument};

/// Points needed to win a set.
pub const DEFAULT_TARGET_SCORE: u32 = 5;

/// A player: a marker fixed for the game and a running score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Player {
    /// Marker this player places.
    mark: Mark,
    /// Rounds won in the current set.
    score: u32,
}

impl Player {
    /// Creates a player with no points.
    pub fn new(mark: Mark) -> Self {
        Self { mark, score: 0 }
    }

    /// Awards one point.
    pub fn add_point(&mut self) {
        self.score += 1;
    }

    /// Sets the score back to zero.
    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}

/// Scores of the human and computer across the rounds of a set.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Scoreboard {
    /// The human player.
    human: Player,
    /// The computer player.
    computer: Player,
    /// Points that win the set.
    target: u32,
}

impl Scoreboard {
    /// Creates a scoreboard; the computer plays the human's opponent marker.
    #[instrument]
    pub fn new(human_mark: Mark, target: u32) -> Self {
        Self {
            human: Player::new(human_mark),
            computer: Player::new(human_mark.opponent()),
            target,
        }
    }

    /// Credits the round winner. Ties score nothing.
    ///
    /// Returns the marker that scored.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) -> Option<Mark> {
        let winner = outcome.winner()?;
        let player = if winner == self.human.mark {
            &mut self.human
        } else {
            &mut self.computer
        };
        player.add_point();
        info!(
            human = self.human.score,
            computer = self.computer.score,
            "Score updated"
        );
        Some(winner)
    }

    /// Returns the marker of the player who reached the target, if any.
    pub fn set_winner(&self) -> Option<Mark> {
        [self.human, self.computer]
            .into_iter()
            .find(|p| p.score >= self.target)
            .map(|p| p.mark)
    }

    /// Returns true once a player reached the target.
    pub fn is_set_over(&self) -> bool {
        self.set_winner().is_some()
    }

    /// Resets both scores for a new set.
    #[instrument(skip(self))]
    pub fn start_new_set(&mut self) {
        self.human.reset_score();
        self.computer.reset_score();
        info!("New set started");
    }
}
