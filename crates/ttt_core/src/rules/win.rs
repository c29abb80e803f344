//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Square};
use super::LINES;
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if every square of some line holds `mark`,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.mark();
        }
    }

    None
}
