//! Console error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong while talking to the player.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConsoleErrorKind {
    /// Reading or writing the terminal failed.
    #[display("I/O failure: {}", _0)]
    Io(String),

    /// The console answered with an index it was never offered.
    #[display("Choice {} is out of range", _0)]
    ChoiceOutOfRange(usize),

    /// The input stream ended before an answer was given.
    #[display("Input closed before an answer was given")]
    InputClosed,
}

/// Console error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Console error: {} at {}:{}", kind, file, line)]
pub struct ConsoleError {
    /// What went wrong.
    pub kind: ConsoleErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConsoleErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(ConsoleErrorKind::Io(err.to_string()))
    }
}
