//! Console tic-tac-toe against a heuristic computer, played in sets.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Console**: line-oriented terminal I/O and validated prompts
//! - **Players**: human (typed squares) and computer (heuristic) controllers
//! - **Orchestrator**: the round and set state machine
//!
//! Game rules live in the `ttt_core` crate.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use ttt_console::{FirstMover, GameConfig, LineConsole, Orchestrator};
//!
//! let config = GameConfig::default()
//!     .with_first_mover(FirstMover::HumanFirst)
//!     .with_clear_screen(false)
//!     .with_seed(7);
//! let console = LineConsole::new(Cursor::new("5\n"), Vec::new(), false);
//! let mut session = Orchestrator::new(config, console).unwrap();
//! // Input runs out mid-round, so the session reports an error.
//! assert!(session.run().is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod orchestrator;
mod players;
mod prompts;

// Crate-level exports - Configuration
pub use config::{ConfigError, FirstMover, GameConfig};

// Crate-level exports - Console
pub use console::{Console, ConsoleError, LineConsole};
pub use prompts::{Rejection, ask_human_first, ask_square, ask_yes_no, joinor, parse_square};

// Crate-level exports - Players
pub use players::{ComputerController, Controller, HumanController};

// Crate-level exports - Session
pub use orchestrator::{Orchestrator, SessionSummary};
