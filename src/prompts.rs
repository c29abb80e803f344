//! Validated questions to the human player.
//!
//! Every question re-prompts on bad input without a retry limit. Only the
//! end of input stops a question.

use crate::console::{Console, ConsoleError};
use derive_more::Display;
use std::num::{IntErrorKind, ParseIntError};
use tracing::{debug, instrument};
use ttt_core::{Board, Position};

/// Why an answer to a question was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Rejection {
    /// The answer is not a whole number.
    #[display("Sorry, '{}' is not a square number.", _0)]
    NotANumber(String),

    /// The number is not a square on the board. Holds the digits as typed.
    #[display("Sorry, {} is not between 1 and 9.", _0)]
    OutOfRange(String),

    /// The square already holds a marker.
    #[display("Sorry, square {} is already taken.", _0)]
    Occupied(Position),

    /// The answer is not one of the offered choices.
    #[display("Sorry, must be {}.", _0)]
    InvalidChoice(&'static str),
}

/// Joins items as "1, 2, or 3"; two items become "1 or 2".
pub fn joinor<T: std::fmt::Display>(items: &[T], separator: &str, conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{} {} {}", first, conjunction, second),
        [init @ .., last] => {
            let head = init
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(separator);
            format!("{}{}{} {}", head, separator, conjunction, last)
        }
    }
}

/// Interprets a typed square number against the board.
#[instrument(skip(board))]
pub fn parse_square(input: &str, board: &Board) -> Result<Position, Rejection> {
    let trimmed = input.trim();
    let number: i64 = trimmed.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            Rejection::OutOfRange(trimmed.to_string())
        }
        _ => Rejection::NotANumber(trimmed.to_string()),
    })?;
    let position = u8::try_from(number)
        .ok()
        .and_then(Position::from_number)
        .ok_or_else(|| Rejection::OutOfRange(trimmed.to_string()))?;
    if board.is_empty(position) {
        Ok(position)
    } else {
        Err(Rejection::Occupied(position))
    }
}

/// Interprets a yes/no answer.
pub fn parse_yes_no(input: &str) -> Result<bool, Rejection> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(Rejection::InvalidChoice("y or n")),
    }
}

/// Interprets the opening-move choice: true when the human opens.
pub fn parse_first_mover(input: &str) -> Result<bool, Rejection> {
    match input.trim().to_lowercase().as_str() {
        "y" | "you" => Ok(true),
        "c" | "computer" => Ok(false),
        _ => Err(Rejection::InvalidChoice("y or c")),
    }
}

/// Shows `question`, then reads answers until `parse` accepts one.
#[instrument(skip(console, parse))]
fn ask<T>(
    console: &mut dyn Console,
    question: &str,
    mut parse: impl FnMut(&str) -> Result<T, Rejection>,
) -> Result<T, ConsoleError> {
    console.show(question)?;
    loop {
        let answer = console.read_line()?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(rejection) => {
                debug!(%answer, %rejection, "Answer rejected");
                console.show(&rejection.to_string())?;
            }
        }
    }
}

/// Asks the human for an empty square.
pub fn ask_square(console: &mut dyn Console, board: &Board) -> Result<Position, ConsoleError> {
    let question = format!("Choose a square ({}):", joinor(&board.legal_moves(), ", ", "or"));
    ask(console, &question, |answer| parse_square(answer, board))
}

/// Asks a yes/no question.
pub fn ask_yes_no(console: &mut dyn Console, question: &str) -> Result<bool, ConsoleError> {
    ask(console, question, parse_yes_no)
}

/// Asks who opens the round; true when the human opens.
pub fn ask_human_first(console: &mut dyn Console) -> Result<bool, ConsoleError> {
    ask(
        console,
        "Choose who goes first (y for 'you' or c for 'computer'):",
        parse_first_mover,
    )
}
