//! Tic-tac-toe error types.

use super::position::Position;
use parlor_console::ConsoleError;

/// Error when writing a marker onto the board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MarkError {
    /// The square already holds a marker.
    #[display("Square {} is already marked", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for MarkError {}

/// Anything that can end a tic-tac-toe session early.
#[derive(Debug, derive_more::Display)]
pub enum TicTacToeError {
    /// The console could not prompt or display.
    #[display("{}", _0)]
    Console(ConsoleError),

    /// A marker was written onto a claimed square.
    #[display("{}", _0)]
    Mark(MarkError),

    /// The computer was asked to move on a full board.
    #[display("No unmarked square left for the computer")]
    NoMoveAvailable,
}

impl std::error::Error for TicTacToeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TicTacToeError::Console(e) => Some(e),
            TicTacToeError::Mark(e) => Some(e),
            TicTacToeError::NoMoveAvailable => None,
        }
    }
}

impl From<ConsoleError> for TicTacToeError {
    fn from(err: ConsoleError) -> Self {
        Self::Console(err)
    }
}

impl From<MarkError> for TicTacToeError {
    fn from(err: MarkError) -> Self {
        Self::Mark(err)
    }
}
