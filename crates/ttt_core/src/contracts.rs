//! Contract-based validation for moves.
//!
//! Preconditions gate a move before it touches the board; postconditions
//! check the round after the move was applied: {P} move {Q}.

use super::action::{Move, MoveError};
use super::typestate::RoundInProgress;
use super::{Board, Mark, Square};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the target square must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    #[instrument(skip(round))]
    pub fn check(mov: &Move, round: &RoundInProgress) -> Result<(), MoveError> {
        if round.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Precondition: it must be the mover's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves made out of turn.
    #[instrument(skip(round))]
    pub fn check(mov: &Move, round: &RoundInProgress) -> Result<(), MoveError> {
        if mov.mark == round.to_move() {
            Ok(())
        } else {
            Err(MoveError::WrongPlayer(mov.mark))
        }
    }
}

/// Mark counts on the board differ by at most one.
pub struct BoardConsistent;

impl BoardConsistent {
    /// Returns true if the board could arise from alternating play.
    #[instrument(skip(board))]
    pub fn holds(board: &Board) -> bool {
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);
        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }
}

/// History length matches the number of filled squares.
pub struct HistoryComplete;

impl HistoryComplete {
    /// Returns true if every filled square has a recorded move.
    #[instrument(skip(round))]
    pub fn holds(round: &RoundInProgress) -> bool {
        let filled = round
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();
        let history_len = round.history().len();
        let valid = filled == history_len;
        if !valid {
            warn!(filled, history_len, "History completeness violated");
        }
        valid
    }
}

/// Contract for placing a marker.
///
/// Preconditions: square empty, mover's turn.
/// Postconditions: board consistent, history complete.
pub struct MoveContract;

impl Contract<RoundInProgress, Move> for MoveContract {
    fn pre(round: &RoundInProgress, action: &Move) -> Result<(), MoveError> {
        SquareIsEmpty::check(action, round)?;
        PlayersTurn::check(action, round)
    }

    fn post(_before: &RoundInProgress, after: &RoundInProgress) -> Result<(), MoveError> {
        if !BoardConsistent::holds(after.board()) {
            return Err(MoveError::InvariantViolation(
                "marker counts differ by more than one".to_string(),
            ));
        }
        if !HistoryComplete::holds(after) {
            return Err(MoveError::InvariantViolation(
                "history does not match filled squares".to_string(),
            ));
        }
        Ok(())
    }
}
