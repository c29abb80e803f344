//! Line-oriented console I/O.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, Write};
use tracing::{instrument, trace};

/// Errors raised while talking to the player.
#[derive(Debug, derive_more::Display)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),

    /// Input ended before a valid answer was given.
    #[display("Input closed before a valid answer was given")]
    InputClosed,
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Io(e) => Some(e),
            ConsoleError::InputClosed => None,
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Text console the game talks through.
pub trait Console {
    /// Writes `text` followed by a newline.
    fn show(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Reads one line without its line ending.
    ///
    /// Fails with [`ConsoleError::InputClosed`] at end of input.
    fn read_line(&mut self) -> Result<String, ConsoleError>;

    /// Clears the screen, if this console supports it.
    fn clear(&mut self) -> Result<(), ConsoleError>;
}

/// Console over any buffered reader and writer.
///
/// Screen clearing emits terminal escape sequences and is only done when
/// enabled.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    /// Creates a console.
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Returns the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl LineConsole<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Console on the process's stdin and stdout.
    pub fn stdio(clear_screen: bool) -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout(), clear_screen)
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn show(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        let line = line.trim_end_matches(['\r', '\n']).to_string();
        trace!(%line, "Read input");
        Ok(line)
    }

    fn clear(&mut self) -> Result<(), ConsoleError> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}
