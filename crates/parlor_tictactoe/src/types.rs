//! Core domain types for tic-tac-toe.

use super::error::MarkError;
use super::position::Position;
use tracing::{debug, instrument};

/// The symbol a player uses to claim squares.
///
/// Always a single uppercase character. The computer plays `O`; humans
/// pick from [`Marker::human_choices`], which leaves `O` out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker(char);

impl Marker {
    /// The computer's fixed marker.
    pub const COMPUTER: Marker = Marker('O');

    /// Markers a human may choose: `1`-`9`, `A`-`N`, `P`-`Z`.
    pub fn human_choices() -> Vec<Marker> {
        ('1'..='9')
            .chain('A'..='N')
            .chain('P'..='Z')
            .map(Marker)
            .collect()
    }

    /// Parses a human's marker choice, case-insensitively.
    ///
    /// Returns `None` for anything outside [`Marker::human_choices`].
    #[instrument]
    pub fn parse(s: &str) -> Option<Marker> {
        let mut chars = s.trim().chars();
        let c = chars.next()?.to_ascii_uppercase();
        if chars.next().is_some() {
            return None;
        }
        Self::human_choices().into_iter().find(|m| m.0 == c)
    }

    /// The marker's character.
    pub fn symbol(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Nobody has played here yet.
    #[default]
    Unmarked,
    /// Claimed by the player using this marker.
    Marked(Marker),
}

impl Square {
    /// Character drawn for this square.
    pub fn symbol(self) -> char {
        match self {
            Square::Unmarked => ' ',
            Square::Marked(marker) => marker.symbol(),
        }
    }

    fn is(self, marker: Marker) -> bool {
        self == Square::Marked(marker)
    }
}

/// The eight three-in-a-row lines: rows, then columns, then diagonals.
///
/// Order matters. Winner detection and the computer's tactics both take
/// the first qualifying line.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Squares in row-major order (index 0-8, square numbers 1-9).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a square is still unmarked.
    pub fn is_unmarked(&self, pos: Position) -> bool {
        self.get(pos) == Square::Unmarked
    }

    /// Claims an unmarked square.
    ///
    /// # Errors
    ///
    /// Returns [`MarkError::SquareOccupied`] if the square is already
    /// marked. The round controller only offers unmarked squares, so this
    /// indicates a bug.
    #[instrument(skip(self))]
    pub fn mark(&mut self, pos: Position, marker: Marker) -> Result<(), MarkError> {
        if !self.is_unmarked(pos) {
            return Err(MarkError::SquareOccupied(pos));
        }
        self.squares[pos.index()] = Square::Marked(marker);
        debug!(square = pos.number(), label = pos.label(), %marker, "Square marked");
        Ok(())
    }

    /// Squares nobody has claimed, in ascending order.
    pub fn unmarked_positions(&self) -> Vec<Position> {
        Position::unmarked(self)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Unmarked)
    }

    /// Returns the marker holding a complete line, if any.
    ///
    /// Lines are scanned in [`WINNING_LINES`] order and, within a line,
    /// the human marker is tested before the computer's.
    pub fn winner(&self, human: Marker, computer: Marker) -> Option<Marker> {
        WINNING_LINES.iter().find_map(|line| {
            if self.line_count(line, human) == 3 {
                Some(human)
            } else if self.line_count(line, computer) == 3 {
                Some(computer)
            } else {
                None
            }
        })
    }

    /// True once either player holds a complete line.
    pub fn someone_won(&self, human: Marker, computer: Marker) -> bool {
        self.winner(human, computer).is_some()
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Unmarked; 9];
    }

    /// How many squares of `line` hold `marker`.
    pub(crate) fn line_count(&self, line: &[Position; 3], marker: Marker) -> usize {
        line.iter().filter(|pos| self.get(**pos).is(marker)).count()
    }

    /// Draws the board as text, one entry per terminal line.
    pub fn render(&self) -> Vec<String> {
        let spacer = "     |     |".to_string();
        let divider = "-----+-----+-----".to_string();
        let mut lines = Vec::with_capacity(11);
        for (row, cells) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                lines.push(divider.clone());
            }
            lines.push(spacer.clone());
            lines.push(format!(
                "  {}  |  {}  |  {}",
                cells[0].symbol(),
                cells[1].symbol(),
                cells[2].symbol()
            ));
            lines.push(spacer.clone());
        }
        lines
    }
}
