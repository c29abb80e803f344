//! Human player that types square numbers.

use super::Controller;
use crate::console::Console;
use crate::prompts;
use anyhow::Result;
use tracing::{debug, instrument};
use ttt_core::{Board, Mark, Position};

/// Human player reading square numbers from the console.
pub struct HumanController {
    name: String,
    mark: Mark,
}

impl HumanController {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }
}

impl Controller for HumanController {
    #[instrument(skip(self, board, console), fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board, console: &mut dyn Console) -> Result<Position> {
        let position = prompts::ask_square(console, board)?;
        debug!(square = position.number(), "Human chose square");
        Ok(position)
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}
