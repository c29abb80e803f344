//! End-to-end console sessions with scripted input.

use anyhow::Result;
use std::collections::VecDeque;
use std::io::Cursor;
use ttt_console::{
    ConfigError, Console, ConsoleError, Controller, FirstMover, GameConfig, HumanController,
    LineConsole, Orchestrator, SessionSummary,
};
use ttt_core::{Board, Mark, Position};

type TestConsole = LineConsole<Cursor<String>, Vec<u8>>;

/// Computer stand-in that plays a fixed list of squares.
struct ScriptedController {
    mark: Mark,
    squares: VecDeque<Position>,
}

impl ScriptedController {
    fn new(mark: Mark, squares: &[u8]) -> Self {
        Self {
            mark,
            squares: squares
                .iter()
                .map(|n| Position::from_number(*n).expect("square number 1-9"))
                .collect(),
        }
    }
}

impl Controller for ScriptedController {
    fn choose_move(&mut self, board: &Board, _console: &mut dyn Console) -> Result<Position> {
        let square = self
            .squares
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))?;
        assert!(board.is_empty(square), "script plays an occupied square");
        Ok(square)
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

fn config(first: FirstMover) -> GameConfig {
    GameConfig::default()
        .with_first_mover(first)
        .with_clear_screen(false)
        .with_seed(17)
}

fn scripted_orchestrator(
    config: GameConfig,
    input: &str,
    computer_squares: &[u8],
) -> Result<Orchestrator<TestConsole>> {
    let console: TestConsole = LineConsole::new(Cursor::new(input.to_string()), Vec::new(), false);
    Orchestrator::with_controllers(
        config,
        console,
        Box::new(HumanController::new("You", Mark::X)),
        Box::new(ScriptedController::new(Mark::O, computer_squares)),
    )
}

fn scripted_session(
    first: FirstMover,
    input: &str,
    computer_squares: &[u8],
) -> (Result<SessionSummary>, String) {
    let mut session =
        scripted_orchestrator(config(first), input, computer_squares).expect("valid config");
    let result = session.run();
    let output = String::from_utf8(session.into_console().into_output()).expect("utf-8 output");
    (result, output)
}

#[test]
fn test_human_win_scores_one_point() {
    let (result, output) = scripted_session(FirstMover::HumanFirst, "5\n2\n8\nn\n", &[1, 3]);
    let summary = result.expect("session completes");

    assert_eq!(
        summary,
        SessionSummary {
            rounds_played: 1,
            sets_completed: 0,
            human_score: 1,
            computer_score: 0,
        }
    );
    assert!(output.starts_with("Welcome to Tic Tac Toe!"));
    assert!(output.contains("You're a X. Computer is a O."));
    assert!(output.contains("You won!"));
    assert!(output.contains("You have 1 point(s)."));
    assert!(output.contains("The first player to 5 points wins the set."));
    assert!(output.contains("Continue playing? (y/n)"));
    assert!(output.trim_end().ends_with("Thanks for playing Tic Tac Toe! Goodbye!"));
}

#[test]
fn test_invalid_moves_are_reprompted() {
    let (result, output) =
        scripted_session(FirstMover::HumanFirst, "abc\n0\n5\n5\n2\n8\nn\n", &[1, 3]);
    let summary = result.expect("session completes");

    assert_eq!(summary.human_score, 1);
    assert!(output.contains("Sorry, 'abc' is not a square number."));
    assert!(output.contains("Sorry, 0 is not between 1 and 9."));
    assert!(output.contains("Sorry, square 5 is already taken."));
}

#[test]
fn test_computer_win_and_tie() {
    let (result, output) = scripted_session(
        FirstMover::ComputerFirst,
        "5\n9\ny\n2\n5\n6\n7\nn\n",
        &[1, 2, 3, 1, 3, 4, 8, 9],
    );
    let summary = result.expect("session completes");

    // Round 1: computer takes the top row. Round 2: O X O / O X X / X O O.
    assert_eq!(summary.rounds_played, 2);
    assert_eq!(summary.computer_score, 1);
    assert_eq!(summary.human_score, 0);
    assert!(output.contains("Computer won!"));
    assert!(output.contains("It's a tie!"));
    assert!(output.contains("Let's play again!"));
}

#[test]
fn test_five_wins_end_the_set_without_reset_when_declined() {
    let mut input = "5\n2\n8\ny\n".repeat(4);
    input.push_str("5\n2\n8\nn\n");
    let (result, output) = scripted_session(FirstMover::HumanFirst, &input, &[1u8, 3].repeat(5));
    let summary = result.expect("session completes");

    assert_eq!(summary.rounds_played, 5);
    assert_eq!(summary.sets_completed, 1);
    assert_eq!(summary.human_score, 5);
    assert!(output.contains("You have won the set!"));
    assert!(output.contains("Would you like to play another set? (y/n)"));
}

#[test]
fn test_new_set_resets_scores() {
    let mut input = "5\n2\n8\ny\n".repeat(5);
    input.push_str("5\n2\n8\nn\n");
    let (result, output) = scripted_session(FirstMover::HumanFirst, &input, &[1u8, 3].repeat(6));
    let summary = result.expect("session completes");

    assert_eq!(summary.rounds_played, 6);
    assert_eq!(summary.sets_completed, 1);
    assert_eq!(summary.human_score, 1);
    assert_eq!(summary.computer_score, 0);
    assert!(output.contains("Continue playing? (y/n)"));
}

#[test]
fn test_prompted_first_mover() {
    let (result, output) = scripted_session(
        FirstMover::PromptEachRound,
        "me\nc\n5\n9\nn\n",
        &[1, 2, 3],
    );
    let summary = result.expect("session completes");

    assert_eq!(summary.computer_score, 1);
    assert!(output.contains("Choose who goes first (y for 'you' or c for 'computer'):"));
    assert!(output.contains("Sorry, must be y or c."));
}

#[test]
fn test_heuristic_computer_opens_center_and_input_close_is_an_error() {
    let console: TestConsole = LineConsole::new(Cursor::new(String::new()), Vec::new(), false);
    let mut session =
        Orchestrator::new(config(FirstMover::ComputerFirst), console).expect("valid config");
    let err = session.run().expect_err("input ends before the first human move");

    assert!(matches!(
        err.downcast_ref::<ConsoleError>(),
        Some(ConsoleError::InputClosed)
    ));
    let output = String::from_utf8(session.into_console().into_output()).unwrap();
    assert!(output.contains("  O  |   "));
    assert!(output.contains("Choose a square (1, 2, 3, 4, 6, 7, 8, or 9):"));
}

#[test]
fn test_heuristic_computer_blocks_and_round_ties() {
    // Computer: center, block 3, block 4, then one of 8/9 at random.
    // The trailing answers cover either random pick.
    let console: TestConsole = LineConsole::new(
        Cursor::new("1\n2\n7\n6\n8\n9\nn\n".to_string()),
        Vec::new(),
        false,
    );
    let mut session =
        Orchestrator::new(config(FirstMover::HumanFirst), console).expect("valid config");
    let summary = session.run().expect("session completes");

    assert_eq!(summary.rounds_played, 1);
    assert_eq!(summary.human_score, 0);
    assert_eq!(summary.computer_score, 0);

    let output = String::from_utf8(session.into_console().into_output()).unwrap();
    assert!(output.contains("Choose a square (2, 3, 4, 6, 7, 8, or 9):"));
    assert!(output.contains("Choose a square (4, 6, 7, 8, or 9):"));
    assert!(output.contains("Choose a square (6, 8, or 9):"));
    assert!(output.contains("It's a tie!"));
}

#[test]
fn test_zero_target_score_is_rejected_before_play() {
    let config = config(FirstMover::ComputerFirst).with_target_score(0);
    let err = scripted_orchestrator(config.clone(), "5\n9\nn\n", &[1, 2, 3])
        .err()
        .expect("zero target must not start a session");
    assert!(err.downcast_ref::<ConfigError>().is_some());

    let console: TestConsole = LineConsole::new(Cursor::new(String::new()), Vec::new(), false);
    assert!(Orchestrator::new(config, console).is_err());
}

#[test]
fn test_one_point_set_goes_to_the_round_winner() {
    let config = config(FirstMover::ComputerFirst).with_target_score(1);
    let mut session =
        scripted_orchestrator(config, "5\n9\nn\n", &[1, 2, 3]).expect("valid config");
    let summary = session.run().expect("session completes");

    assert_eq!(summary.sets_completed, 1);
    assert_eq!(summary.computer_score, 1);
    assert_eq!(session.scoreboard().set_winner(), Some(Mark::O));
    assert_eq!(*session.scoreboard().target(), 1);

    let output = String::from_utf8(session.into_console().into_output()).expect("utf-8 output");
    assert!(output.contains("The computer has won the set!"));
    assert!(!output.contains("You have won the set!"));
}
