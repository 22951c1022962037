//! Line-based terminal adapter for the [`Console`] port.

use crate::{Console, ConsoleError, ConsoleErrorKind};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Stdin, Stdout, Write};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Message shown when an answer is not one of the offered choices.
pub const INVALID_CHOICE: &str = "Sorry, that's not a valid choice.";

/// Console over any line reader and writer.
///
/// The binary wires this to stdin/stdout; tests feed it a
/// [`std::io::Cursor`] and inspect the written bytes.
#[derive(Debug)]
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    clear_enabled: bool,
    pause_enabled: bool,
}

impl TerminalConsole<io::StdinLock<'static>, Stdout> {
    /// Creates a console on the process's standard input and output.
    #[instrument]
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    ///
    /// Screen clearing and pauses are enabled.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_enabled: true,
            pause_enabled: true,
        }
    }

    /// Turns screen clearing on or off.
    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_enabled = enabled;
        self
    }

    /// Turns pauses on or off.
    pub fn with_pauses(mut self, enabled: bool) -> Self {
        self.pause_enabled = enabled;
        self
    }

    /// Returns the writer, e.g. to inspect captured output.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the console and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        self.output.flush()?;
        let mut buf = String::new();
        let read = self.input.read_line(&mut buf)?;
        if read == 0 {
            return Err(ConsoleError::new(ConsoleErrorKind::InputClosed));
        }
        Ok(buf.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    #[instrument(skip(self))]
    fn prompt_text(&mut self, message: &str) -> Result<String, ConsoleError> {
        self.write_line(message)?;
        self.read_line()
    }

    #[instrument(skip(self))]
    fn prompt_choice(&mut self, message: &str, choices: &[String]) -> Result<usize, ConsoleError> {
        self.write_line(message)?;
        loop {
            let answer = self.read_line()?;
            if let Some(index) = choices
                .iter()
                .position(|choice| choice.eq_ignore_ascii_case(&answer))
            {
                debug!(answer = %answer, index, "Choice accepted");
                return Ok(index);
            }
            warn!(answer = %answer, "Rejected answer");
            self.write_line(INVALID_CHOICE)?;
        }
    }

    fn display(&mut self, lines: &[String]) -> Result<(), ConsoleError> {
        for line in lines {
            self.write_line(line)?;
        }
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<(), ConsoleError> {
        if self.clear_enabled {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn pause(&mut self, duration: Duration) -> Result<(), ConsoleError> {
        if self.pause_enabled && !duration.is_zero() {
            self.output.flush()?;
            std::thread::sleep(duration);
        }
        Ok(())
    }
}
