//! The console port both game engines talk through.

use crate::{ConsoleError, ConsoleErrorKind};
use std::fmt::Display;
use std::time::Duration;

/// Blocking, line-based conversation with the person at the keyboard.
///
/// Engines never read or print directly. Everything they need from the
/// outside world goes through this trait, which keeps the game cores
/// deterministic and testable against in-memory buffers.
pub trait Console {
    /// Prints `message` and reads one line of input, trimmed.
    ///
    /// The answer may be empty; callers validate it.
    fn prompt_text(&mut self, message: &str) -> Result<String, ConsoleError>;

    /// Prints `message` and reads lines until one matches an entry of
    /// `choices` (trimmed, case-insensitive).
    ///
    /// Returns the index of the matched choice. Invalid answers are
    /// re-prompted indefinitely.
    fn prompt_choice(&mut self, message: &str, choices: &[String]) -> Result<usize, ConsoleError>;

    /// Prints each line in order.
    fn display(&mut self, lines: &[String]) -> Result<(), ConsoleError>;

    /// Clears the terminal. Purely cosmetic.
    fn clear_screen(&mut self) -> Result<(), ConsoleError>;

    /// Prints a single line.
    fn say(&mut self, line: &str) -> Result<(), ConsoleError> {
        self.display(&[line.to_string()])
    }

    /// Offers `options` by their display form and returns the chosen one.
    fn select<'o, T: Display>(&mut self, message: &str, options: &'o [T]) -> Result<&'o T, ConsoleError>
    where
        Self: Sized,
    {
        let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
        let index = self.prompt_choice(message, &labels)?;
        options
            .get(index)
            .ok_or_else(|| ConsoleError::new(ConsoleErrorKind::ChoiceOutOfRange(index)))
    }

    /// Prompts until a non-empty answer is given, printing `retry` after
    /// each empty one.
    fn prompt_non_empty(&mut self, message: &str, retry: &str) -> Result<String, ConsoleError> {
        let mut answer = self.prompt_text(message)?;
        while answer.is_empty() {
            self.say(retry)?;
            answer = self.prompt_text(message)?;
        }
        Ok(answer)
    }

    /// Asks whether to play another round.
    fn confirm_replay(&mut self) -> Result<bool, ConsoleError> {
        let choices = ["y".to_string(), "n".to_string()];
        let answer = self.prompt_choice("Would you like to play again? (y/n)", &choices)?;
        Ok(answer == 0)
    }

    /// Waits before continuing so a player can read what just happened.
    fn pause(&mut self, _duration: Duration) -> Result<(), ConsoleError> {
        Ok(())
    }
}
