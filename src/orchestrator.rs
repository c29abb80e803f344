//! Game orchestration: rounds between the human and the computer, grouped
//! into sets.

use crate::config::{FirstMover, GameConfig};
use crate::console::Console;
use crate::players::{ComputerController, Controller, HumanController};
use crate::prompts;
use anyhow::Result;
use tracing::{debug, info, instrument};
use ttt_core::{Board, Mark, Move, Outcome, RoundFinished, RoundResult, RoundSetup, Scoreboard};

/// Where the session stands between moves.
#[derive(Debug)]
enum Phase {
    /// Deciding who opens the next round.
    ChooseFirstPlayer,
    /// Playing a round opened by the given marker.
    RoundInProgress(Mark),
    /// A round just ended; scores not yet updated.
    RoundOver(RoundFinished),
    /// No one reached the target yet.
    ContinueSet,
    /// The given marker reached the target.
    SetOver(Mark),
    /// The player is done.
    Terminal,
}

/// Counts reported when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Rounds played to completion.
    pub rounds_played: u32,
    /// Sets in which a player reached the target score.
    pub sets_completed: u32,
    /// Human score when the session ended.
    pub human_score: u32,
    /// Computer score when the session ended.
    pub computer_score: u32,
}

/// Runs a console session between a human and the computer.
pub struct Orchestrator<C> {
    config: GameConfig,
    console: C,
    human: Box<dyn Controller>,
    computer: Box<dyn Controller>,
    scoreboard: Scoreboard,
    setup: RoundSetup,
}

impl<C: Console> Orchestrator<C> {
    /// Creates a session with a console-driven human and the heuristic computer.
    ///
    /// Fails if the configuration does not validate.
    pub fn new(config: GameConfig, console: C) -> Result<Self> {
        let human = Box::new(HumanController::new("You", *config.human_mark()));
        let computer = Box::new(ComputerController::new(
            "Computer",
            config.computer_mark(),
            *config.seed(),
        ));
        Self::with_controllers(config, console, human, computer)
    }

    /// Creates a session with custom controllers for each side.
    ///
    /// Fails if the configuration does not validate.
    pub fn with_controllers(
        config: GameConfig,
        console: C,
        human: Box<dyn Controller>,
        computer: Box<dyn Controller>,
    ) -> Result<Self> {
        config.validate()?;
        let scoreboard = Scoreboard::new(human.mark(), *config.target_score());
        Ok(Self {
            config,
            console,
            human,
            computer,
            scoreboard,
            setup: RoundSetup::new(),
        })
    }

    /// Returns the current scores.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Consumes the session, returning its console.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Plays rounds until the human declines to continue.
    #[instrument(skip(self), fields(first_mover = %self.config.first_mover()))]
    pub fn run(&mut self) -> Result<SessionSummary> {
        info!("Starting session");
        let mut summary = SessionSummary::default();

        self.console.clear()?;
        self.console.show("Welcome to Tic Tac Toe!")?;
        self.console.show("")?;

        let mut phase = Phase::ChooseFirstPlayer;
        loop {
            debug!(?phase, "Entering phase");
            phase = match phase {
                Phase::ChooseFirstPlayer => Phase::RoundInProgress(self.choose_first_mover()?),
                Phase::RoundInProgress(first) => {
                    let finished = self.play_round(first)?;
                    summary.rounds_played += 1;
                    Phase::RoundOver(finished)
                }
                Phase::RoundOver(finished) => {
                    self.finish_round(finished)?;
                    match self.scoreboard.set_winner() {
                        Some(winner) => Phase::SetOver(winner),
                        None => Phase::ContinueSet,
                    }
                }
                Phase::ContinueSet => {
                    if prompts::ask_yes_no(&mut self.console, "Continue playing? (y/n)")? {
                        self.show_play_again()?;
                        Phase::ChooseFirstPlayer
                    } else {
                        Phase::Terminal
                    }
                }
                Phase::SetOver(winner) => {
                    summary.sets_completed += 1;
                    info!(%winner, "Set won");
                    if prompts::ask_yes_no(
                        &mut self.console,
                        "Would you like to play another set? (y/n)",
                    )? {
                        self.scoreboard.start_new_set();
                        self.show_play_again()?;
                        Phase::ChooseFirstPlayer
                    } else {
                        Phase::Terminal
                    }
                }
                Phase::Terminal => break,
            };
        }

        self.console.show("Thanks for playing Tic Tac Toe! Goodbye!")?;

        summary.human_score = *self.scoreboard.human().score();
        summary.computer_score = *self.scoreboard.computer().score();
        info!(?summary, "Session finished");
        Ok(summary)
    }

    /// Resolves who opens the next round.
    fn choose_first_mover(&mut self) -> Result<Mark> {
        let human_first = match self.config.first_mover() {
            FirstMover::HumanFirst => true,
            FirstMover::ComputerFirst => false,
            FirstMover::PromptEachRound => {
                let answer = prompts::ask_human_first(&mut self.console)?;
                self.console.clear()?;
                answer
            }
        };
        Ok(if human_first {
            self.human.mark()
        } else {
            self.computer.mark()
        })
    }

    /// Alternates moves until a line is completed or the board fills.
    #[instrument(skip(self))]
    fn play_round(&mut self, first: Mark) -> Result<RoundFinished> {
        let mut round = std::mem::take(&mut self.setup).start(first);
        self.show_board(round.board())?;

        loop {
            let mover = round.to_move();
            let controller = if mover == self.human.mark() {
                &mut self.human
            } else {
                &mut self.computer
            };
            debug!(player = controller.name(), "Waiting for move");
            let position = controller.choose_move(round.board(), &mut self.console)?;

            match round.make_move(Move::new(mover, position))? {
                RoundResult::InProgress(next) => {
                    round = next;
                    if round.to_move() == self.human.mark() {
                        self.console.clear()?;
                        self.show_board(round.board())?;
                    }
                }
                RoundResult::Finished(finished) => return Ok(finished),
            }
        }
    }

    /// Shows the result, updates scores and resets the board.
    fn finish_round(&mut self, finished: RoundFinished) -> Result<()> {
        self.console.clear()?;
        self.show_board(finished.board())?;

        let outcome = finished.outcome();
        let message = match outcome {
            Outcome::Winner(mark) if mark == self.human.mark() => "You won!",
            Outcome::Winner(_) => "Computer won!",
            Outcome::Tie => "It's a tie!",
        };
        self.console.show(message)?;
        self.console.show("")?;

        self.scoreboard.record(outcome);
        self.show_score()?;

        self.setup = finished.restart();
        Ok(())
    }

    fn show_board(&mut self, board: &Board) -> Result<()> {
        let intro = format!(
            "You're a {}. Computer is a {}.",
            self.human.mark(),
            self.computer.mark()
        );
        self.console.show(&intro)?;
        self.console.show("")?;
        self.console.show(board.to_string().trim_end())?;
        self.console.show("")?;
        Ok(())
    }

    fn show_score(&mut self) -> Result<()> {
        let human = *self.scoreboard.human().score();
        let computer = *self.scoreboard.computer().score();
        self.console.show(&format!("You have {} point(s).", human))?;
        self.console
            .show(&format!("The computer has {} point(s).", computer))?;

        let line = match self.scoreboard.set_winner() {
            Some(mark) if mark == self.human.mark() => "You have won the set!".to_string(),
            Some(_) => "The computer has won the set!".to_string(),
            None => format!(
                "The first player to {} points wins the set.",
                self.scoreboard.target()
            ),
        };
        self.console.show(&line)?;
        self.console.show("")?;
        Ok(())
    }

    fn show_play_again(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.show("Let's play again!")?;
        self.console.show("")?;
        Ok(())
    }
}
