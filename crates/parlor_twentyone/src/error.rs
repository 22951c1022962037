//! Twenty-One error types.

use parlor_console::ConsoleError;

/// Error when dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DeckError {
    /// Every card has already been dealt.
    #[display("The deck is out of cards")]
    Exhausted,
}

impl std::error::Error for DeckError {}

/// Anything that can end a Twenty-One table early.
#[derive(Debug, derive_more::Display)]
pub enum TwentyOneError {
    /// The console could not prompt or display.
    #[display("{}", _0)]
    Console(ConsoleError),

    /// A card was dealt from an empty deck.
    #[display("{}", _0)]
    Deck(DeckError),
}

impl std::error::Error for TwentyOneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TwentyOneError::Console(e) => Some(e),
            TwentyOneError::Deck(e) => Some(e),
        }
    }
}

impl From<ConsoleError> for TwentyOneError {
    fn from(err: ConsoleError) -> Self {
        Self::Console(err)
    }
}

impl From<DeckError> for TwentyOneError {
    fn from(err: DeckError) -> Self {
        Self::Deck(err)
    }
}
