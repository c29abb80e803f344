//! Computer player driven by the win/block/center heuristic.

use super::Controller;
use crate::console::Console;
use anyhow::Result;
use tracing::instrument;
use ttt_core::{Board, ComputerStrategy, Mark, Position};

/// Computer player. Moves are computed synchronously.
pub struct ComputerController {
    name: String,
    mark: Mark,
    strategy: ComputerStrategy,
}

impl ComputerController {
    /// Creates a computer player; `seed` fixes its random fallback moves.
    pub fn new(name: impl Into<String>, mark: Mark, seed: Option<u64>) -> Self {
        Self {
            name: name.into(),
            mark,
            strategy: ComputerStrategy::new(seed),
        }
    }
}

impl Controller for ComputerController {
    #[instrument(skip(self, board, _console), fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board, _console: &mut dyn Console) -> Result<Position> {
        match self.strategy.choose(board, self.mark) {
            Some(decision) => Ok(decision.position),
            None => anyhow::bail!("No valid moves available"),
        }
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}
