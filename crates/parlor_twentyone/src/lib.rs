//! Twenty-One against a dealer.
//!
//! # Architecture
//!
//! - **Cards**: [`Card`], [`Deck`], and [`Hand`] with soft-ace valuation
//! - **Participants**: one [`Participant`] type; its [`Role`] decides how it
//!   chooses to hit
//! - **Dealer policy**: stand on 17, or chase a higher player total
//! - **Controller**: [`TwentyOne`] runs rounds until the player leaves
//!
//! All input and output goes through a [`parlor_console::Console`], and the
//! only randomness comes from the [`parlor_console::GameRng`] passed in.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod card;
mod deck;
mod error;
mod game;
mod hand;
mod participant;
mod policy;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use error::{DeckError, TwentyOneError};
pub use game::{DEFAULT_DEALER_PAUSE, Showdown, TableSummary, TwentyOne};
pub use hand::{Hand, TWENTY_ONE};
pub use participant::{DEALER_NAMES, Participant, Role};
pub use policy::{DEALER_STANDS_ON, dealer_should_hit, dealer_target};
