//! Tic-tac-toe against a heuristic computer opponent.
//!
//! # Architecture
//!
//! - **Board**: nine squares, the eight winning lines, winner detection
//! - **Policy**: offense, defense, center, then a random square
//! - **Scoreboard**: round wins, first to five ends the session
//! - **Controller**: [`TicTacToe`] alternates turns and drives replays
//!
//! All input and output goes through a [`parlor_console::Console`], and the
//! only randomness comes from the [`parlor_console::GameRng`] passed in.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod player;
mod policy;
mod position;
mod score;
mod types;

pub use error::{MarkError, TicTacToeError};
pub use game::{SessionSummary, TicTacToe};
pub use player::{COMPUTER_NAMES, Player, Side};
pub use policy::{Tactic, at_risk_square, center_square, choose_move, decide, random_square};
pub use position::Position;
pub use score::{RoundOutcome, Scoreboard, WIN_THRESHOLD, wins_phrase};
pub use types::{Board, Marker, Square, WINNING_LINES};
