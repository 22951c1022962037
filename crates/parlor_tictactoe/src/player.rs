//! The two seats at the table.

use super::types::Marker;
use derive_getters::Getters;
use parlor_console::GameRng;
use tracing::instrument;

/// Names the computer opponent may go by.
pub const COMPUTER_NAMES: [&str; 4] = ["Deep Blue", "Brainiac", "HAL", "J-5"];

/// Who is sitting in a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The person at the keyboard.
    Human,
    /// The heuristic opponent.
    Computer,
}

/// A named player and the marker they play with.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Player {
    name: String,
    marker: Marker,
    side: Side,
}

impl Player {
    /// The human player.
    pub fn human(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
            side: Side::Human,
        }
    }

    /// The computer player, with a name drawn from [`COMPUTER_NAMES`].
    #[instrument(skip(rng))]
    pub fn computer(rng: &mut GameRng) -> Self {
        let name = rng.choose(&COMPUTER_NAMES).copied().unwrap_or(COMPUTER_NAMES[0]);
        Self {
            name: name.to_string(),
            marker: Marker::COMPUTER,
            side: Side::Computer,
        }
    }
}
