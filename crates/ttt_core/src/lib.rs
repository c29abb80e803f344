//! Tic-tac-toe engine: board, rules, computer heuristic and set scoring.
//!
//! # Architecture
//!
//! - **Board**: nine squares keyed by [`Position`] with win, full-board
//!   and threat detection ([`rules`]).
//! - **Rounds**: typestate phases [`RoundSetup`] → [`RoundInProgress`] →
//!   [`RoundFinished`], guarded by move [`contracts`].
//! - **Strategy**: [`ComputerStrategy`], a greedy win/block/center/random
//!   opponent.
//! - **Scoring**: [`Player`] and [`Scoreboard`] track points across a set.
//!
//! # Example
//!
//! ```
//! use ttt_core::{Mark, Move, Position, RoundResult, RoundSetup};
//!
//! let round = RoundSetup::new().start(Mark::X);
//! let result = round.make_move(Move::new(Mark::X, Position::Center)).unwrap();
//! assert!(matches!(result, RoundResult::InProgress(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod outcome;
mod player;
mod position;
pub mod rules;
mod strategy;
mod typestate;
mod types;

pub use action::{Move, MoveError};
pub use outcome::Outcome;
pub use player::{DEFAULT_TARGET_SCORE, Player, Scoreboard};
pub use position::Position;
pub use strategy::{ComputerStrategy, Decision, Reason};
pub use typestate::{RoundFinished, RoundInProgress, RoundResult, RoundSetup};
pub use types::{Board, Mark, Square};
