//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Marker a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Mark {
    /// Marker X.
    X,
    /// Marker O.
    O,
}

impl Mark {
    /// Returns the opponent's marker.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square claimed by a marker.
    Occupied(Mark),
}

impl Square {
    /// Returns the marker on this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty => write!(f, " "),
            Square::Occupied(mark) => write!(f, "{}", mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Every position maps to exactly one square for the lifetime of the
/// board; [`Board::reset`] empties the squares rather than replacing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (index 0-8, square numbers 1-9).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|sq| **sq == Square::Occupied(mark))
            .count()
    }

    /// Places `mark` on an empty square.
    ///
    /// Occupied squares are never overwritten; the board is left unchanged
    /// and [`MoveError::SquareOccupied`] is returned.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.squares[pos.index()] = Square::Occupied(mark);
        debug!(square = pos.number(), %mark, "Marker placed");
        Ok(())
    }

    /// Returns the empty positions in ascending square order.
    pub fn legal_moves(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Returns true when no empty squares remain.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the marker filling a complete winning line, if any.
    pub fn winning_marker(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// Returns a square that would complete a line for `mark`.
    ///
    /// See [`rules::find_threat_or_opportunity`].
    pub fn find_threat_or_opportunity(&self, mark: Mark) -> Option<Position> {
        rules::find_threat_or_opportunity(self, mark)
    }

    /// Empties every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            writeln!(f, "     |     |")?;
            writeln!(f, "  {}  |  {}  |  {}", cells[0], cells[1], cells[2])?;
            writeln!(f, "     |     |")?;
            if row < 2 {
                writeln!(f, "-----+-----+-----")?;
            }
        }
        Ok(())
    }
}
