//! Phase-specific typestate structs for a single round.
//!
//! Each phase is its own type. A `RoundFinished` always carries an
//! outcome, and only a `RoundInProgress` accepts moves.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::outcome::Outcome;
use super::{Board, Mark, Position, rules};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Round ready to start. The board is always empty.
#[derive(Debug, Clone)]
pub struct RoundSetup {
    board: Board,
}

impl RoundSetup {
    /// Creates a new round with an empty board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the round with `first` to move.
    #[instrument(skip(self))]
    pub fn start(self, first: Mark) -> RoundInProgress {
        debug!(%first, "Round started");
        RoundInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: first,
            first,
        }
    }
}

impl Default for RoundSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Round in progress - accepts moves, alternating between markers.
#[derive(Debug, Clone)]
pub struct RoundInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Mark,
    first: Mark,
}

impl RoundInProgress {
    /// Applies a move, consuming the round.
    ///
    /// The mover wins if the move completes a line; otherwise a full board
    /// ends the round in a tie. Preconditions are always checked,
    /// postconditions only in debug builds.
    #[instrument(skip(self), fields(mark = %action.mark, square = action.position.number()))]
    pub fn make_move(self, action: Move) -> Result<RoundResult, MoveError> {
        MoveContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut round = self;
        round.board.place(action.position, action.mark)?;
        round.history.push(action);

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &round)?;

        if let Some(winner) = rules::check_winner(&round.board) {
            info!(%winner, moves = round.history.len(), "Round won");
            return Ok(RoundResult::Finished(round.finish(Outcome::Winner(winner))));
        }

        if rules::is_full(&round.board) {
            info!("Round tied");
            return Ok(RoundResult::Finished(round.finish(Outcome::Tie)));
        }

        round.to_move = round.to_move.opponent();
        Ok(RoundResult::InProgress(round))
    }

    fn finish(self, outcome: Outcome) -> RoundFinished {
        RoundFinished {
            board: self.board,
            history: self.history,
            outcome,
        }
    }

    /// Returns the marker to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the marker that moved first.
    pub fn first(&self) -> Mark {
        self.first
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the empty squares in ascending order.
    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.legal_moves()
    }

    /// Replays moves on a fresh round started by `first`.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(first: Mark, moves: &[Move]) -> Result<RoundResult, MoveError> {
        let mut round = RoundSetup::new().start(first);

        for action in moves {
            match round.make_move(*action)? {
                RoundResult::InProgress(r) => round = r,
                RoundResult::Finished(r) => return Ok(RoundResult::Finished(r)),
            }
        }

        Ok(RoundResult::InProgress(round))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Round over - outcome determined.
#[derive(Debug, Clone)]
pub struct RoundFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl RoundFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Resets the board for the next round.
    #[instrument(skip(self))]
    pub fn restart(self) -> RoundSetup {
        let mut board = self.board;
        board.reset();
        RoundSetup { board }
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum RoundResult {
    /// Round continues.
    InProgress(RoundInProgress),
    /// Round finished.
    Finished(RoundFinished),
}
