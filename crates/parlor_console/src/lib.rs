//! Shared plumbing for the parlor games.
//!
//! - [`Console`]: the port engines use to prompt and display
//! - [`TerminalConsole`]: line-based adapter over any reader/writer
//! - [`GameRng`]: seedable shuffle and sampling
//! - [`joinor`] / [`joinand`]: English list joining

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod error;
mod join;
mod rng;
mod terminal;

pub use console::Console;
pub use error::{ConsoleError, ConsoleErrorKind};
pub use join::{join_with, joinand, joinor};
pub use rng::GameRng;
pub use terminal::{INVALID_CHOICE, TerminalConsole};
