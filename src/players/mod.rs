//! Move sources for each side of the board.

mod computer;
mod human;

pub use computer::ComputerController;
pub use human::HumanController;

use crate::console::Console;
use anyhow::Result;
use ttt_core::{Board, Mark, Position};

/// Something that picks squares for one marker.
pub trait Controller {
    /// Picks an empty square on `board`.
    ///
    /// Human controllers read from `console`; others may ignore it.
    fn choose_move(&mut self, board: &Board, console: &mut dyn Console) -> Result<Position>;

    /// Marker this controller places.
    fn mark(&self) -> Mark;

    /// Display name.
    fn name(&self) -> &str;
}
