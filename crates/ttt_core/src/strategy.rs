//! Greedy one-ply computer opponent.
//!
//! Each turn the strategy looks for an immediate win, then a square that
//! blocks the opponent's immediate win, then the center, and otherwise
//! picks uniformly at random among the empty squares. It does not search
//! deeper, so it can be beaten by forks.

use super::{Board, Mark, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Why the strategy picked a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Reason {
    /// The square completes one of the computer's lines.
    Win,
    /// The square stops the opponent completing a line.
    Block,
    /// The center square was free.
    Center,
    /// No rule applied; chosen at random.
    Random,
}

/// A chosen square and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// The square to mark.
    pub position: Position,
    /// The rule that selected it.
    pub reason: Reason,
}

/// Heuristic move selection for the computer player.
#[derive(Debug, Clone)]
pub struct ComputerStrategy {
    rng: StdRng,
}

impl ComputerStrategy {
    /// Creates a strategy; a seed makes the random fallback reproducible.
    #[instrument]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Chooses a square for `me`, or `None` if the board is full.
    #[instrument(skip(self, board))]
    pub fn choose(&mut self, board: &Board, me: Mark) -> Option<Decision> {
        let decision = if let Some(position) = board.find_threat_or_opportunity(me) {
            Decision {
                position,
                reason: Reason::Win,
            }
        } else if let Some(position) = board.find_threat_or_opportunity(me.opponent()) {
            Decision {
                position,
                reason: Reason::Block,
            }
        } else if board.is_empty(Position::Center) {
            Decision {
                position: Position::Center,
                reason: Reason::Center,
            }
        } else {
            let position = *board.legal_moves().choose(&mut self.rng)?;
            Decision {
                position,
                reason: Reason::Random,
            }
        };

        debug!(
            square = decision.position.number(),
            reason = %decision.reason,
            "Computer chose square"
        );
        Some(decision)
    }
}

impl Default for ComputerStrategy {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(xs: &[u8], os: &[u8]) -> Board {
        let mut board = Board::new();
        for &n in xs {
            board.place(Position::from_number(n).unwrap(), Mark::X).unwrap();
        }
        for &n in os {
            board.place(Position::from_number(n).unwrap(), Mark::O).unwrap();
        }
        board
    }

    #[test]
    fn test_takes_win_over_block() {
        // O can win at 3; X threatens 9.
        let board = board_with(&[7, 8], &[1, 2]);
        let decision = ComputerStrategy::new(Some(1)).choose(&board, Mark::O).unwrap();
        assert_eq!(decision.position, Position::TopRight);
        assert_eq!(decision.reason, Reason::Win);
    }

    #[test]
    fn test_blocks_when_no_win() {
        let board = board_with(&[1, 2], &[5]);
        let decision = ComputerStrategy::new(Some(1)).choose(&board, Mark::O).unwrap();
        assert_eq!(decision.position, Position::TopRight);
        assert_eq!(decision.reason, Reason::Block);
    }

    #[test]
    fn test_prefers_center() {
        let board = board_with(&[1], &[]);
        let decision = ComputerStrategy::new(Some(1)).choose(&board, Mark::O).unwrap();
        assert_eq!(decision.position, Position::Center);
        assert_eq!(decision.reason, Reason::Center);
    }

    #[test]
    fn test_random_fallback_picks_legal_square() {
        let board = board_with(&[5], &[]);
        let mut strategy = ComputerStrategy::new(Some(7));
        for _ in 0..50 {
            let decision = strategy.choose(&board, Mark::O).unwrap();
            assert_eq!(decision.reason, Reason::Random);
            assert!(board.is_empty(decision.position));
        }
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = board_with(&[5], &[]);
        let a = ComputerStrategy::new(Some(42)).choose(&board, Mark::O);
        let b = ComputerStrategy::new(Some(42)).choose(&board, Mark::O);
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = board_with(&[1, 3, 4, 8, 9], &[2, 5, 6, 7]);
        assert!(ComputerStrategy::new(None).choose(&board, Mark::O).is_none());
    }
}
