//! How the computer picks its square.
//!
//! Four tactics, tried in order until one yields a square:
//!
//! 1. [`Tactic::Offense`]: complete a line it already holds two of.
//! 2. [`Tactic::Defense`]: block a line the human holds two of.
//! 3. [`Tactic::Center`]: take square 5.
//! 4. [`Tactic::Random`]: any unmarked square, uniformly.

use super::position::Position;
use super::types::{Board, Marker, WINNING_LINES};
use parlor_console::GameRng;
use tracing::{debug, instrument};

/// Which rule produced the computer's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Tactic {
    /// Winning move.
    #[display("offense")]
    Offense,
    /// Blocking move.
    #[display("defense")]
    Defense,
    /// Center square.
    #[display("center")]
    Center,
    /// Uniform pick among unmarked squares.
    #[display("random")]
    Random,
}

/// The open square of the first line holding two of `marker` and one
/// unmarked square.
pub fn at_risk_square(board: &Board, marker: Marker) -> Option<Position> {
    WINNING_LINES.iter().find_map(|line| {
        let open: Vec<Position> = line
            .iter()
            .copied()
            .filter(|pos| board.is_unmarked(*pos))
            .collect();
        match open.as_slice() {
            [square] if board.line_count(line, marker) == 2 => Some(*square),
            _ => None,
        }
    })
}

/// Square 5, while it is free.
pub fn center_square(board: &Board) -> Option<Position> {
    board
        .is_unmarked(Position::Center)
        .then_some(Position::Center)
}

/// Any unmarked square, uniformly.
pub fn random_square(board: &Board, rng: &mut GameRng) -> Option<Position> {
    rng.choose(&board.unmarked_positions()).copied()
}

/// Picks the computer's square and reports which tactic chose it.
///
/// `None` only on a full board.
#[instrument(skip(board, rng))]
pub fn decide(
    board: &Board,
    computer: Marker,
    human: Marker,
    rng: &mut GameRng,
) -> Option<(Position, Tactic)> {
    let decision = at_risk_square(board, computer)
        .map(|pos| (pos, Tactic::Offense))
        .or_else(|| at_risk_square(board, human).map(|pos| (pos, Tactic::Defense)))
        .or_else(|| center_square(board).map(|pos| (pos, Tactic::Center)))
        .or_else(|| random_square(board, rng).map(|pos| (pos, Tactic::Random)));

    if let Some((pos, tactic)) = decision {
        debug!(square = pos.number(), %tactic, "Computer chose square");
    }
    decision
}

/// Picks the computer's square. `None` only on a full board.
pub fn choose_move(
    board: &Board,
    computer: Marker,
    human: Marker,
    rng: &mut GameRng,
) -> Option<Position> {
    decide(board, computer, human, rng).map(|(pos, _)| pos)
}
