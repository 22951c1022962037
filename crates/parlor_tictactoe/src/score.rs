//! Session scoring: first to five round wins.

use super::player::Side;
use tracing::{info, instrument};

/// Round wins needed to end the session.
pub const WIN_THRESHOLD: u32 = 5;

/// How a single round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// One side completed a line.
    Won(Side),
    /// The board filled with no line completed.
    Tie,
}

impl RoundOutcome {
    /// The winning side, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundOutcome::Won(side) => Some(side),
            RoundOutcome::Tie => None,
        }
    }
}

/// Round wins for each side. Lives for the whole session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    human_wins: u32,
    computer_wins: u32,
}

impl Scoreboard {
    /// Both counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds the human has won.
    pub fn human_wins(&self) -> u32 {
        self.human_wins
    }

    /// Rounds the computer has won.
    pub fn computer_wins(&self) -> u32 {
        self.computer_wins
    }

    /// Counts a round. Ties change nothing.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome.winner() {
            Some(Side::Human) => self.human_wins += 1,
            Some(Side::Computer) => self.computer_wins += 1,
            None => {}
        }
        info!(
            human_wins = self.human_wins,
            computer_wins = self.computer_wins,
            "Score updated"
        );
    }

    /// True once either side has [`WIN_THRESHOLD`] wins.
    pub fn threshold_reached(&self) -> bool {
        self.human_wins >= WIN_THRESHOLD || self.computer_wins >= WIN_THRESHOLD
    }

    /// The side with strictly more wins; `None` when level.
    pub fn leader(&self) -> Option<Side> {
        match self.human_wins.cmp(&self.computer_wins) {
            std::cmp::Ordering::Greater => Some(Side::Human),
            std::cmp::Ordering::Less => Some(Side::Computer),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// `"1 win."` / `"3 wins."`
pub fn wins_phrase(wins: u32) -> String {
    if wins == 1 {
        format!("{} win.", wins)
    } else {
        format!("{} wins.", wins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_are_not_counted() {
        let mut score = Scoreboard::new();
        score.record(RoundOutcome::Tie);
        assert_eq!(score, Scoreboard::new());
        assert_eq!(score.leader(), None);
    }

    #[test]
    fn test_threshold_after_five_wins() {
        let mut score = Scoreboard::new();
        for _ in 0..4 {
            score.record(RoundOutcome::Won(Side::Computer));
        }
        assert!(!score.threshold_reached());
        score.record(RoundOutcome::Won(Side::Computer));
        assert!(score.threshold_reached());
        assert_eq!(score.leader(), Some(Side::Computer));
    }

    #[test]
    fn test_threshold_after_five_human_wins() {
        let mut score = Scoreboard::new();
        score.record(RoundOutcome::Won(Side::Computer));
        for _ in 0..4 {
            score.record(RoundOutcome::Won(Side::Human));
            score.record(RoundOutcome::Tie);
        }
        assert!(!score.threshold_reached());
        score.record(RoundOutcome::Won(Side::Human));
        assert!(score.threshold_reached());
        assert_eq!(score.human_wins(), 5);
        assert_eq!(score.leader(), Some(Side::Human));
    }

    #[test]
    fn test_leader() {
        let mut score = Scoreboard::new();
        score.record(RoundOutcome::Won(Side::Human));
        score.record(RoundOutcome::Won(Side::Human));
        score.record(RoundOutcome::Won(Side::Computer));
        assert_eq!(score.leader(), Some(Side::Human));
        assert_eq!(score.human_wins(), 2);
        assert_eq!(score.computer_wins(), 1);
    }

    #[test]
    fn test_wins_phrase() {
        assert_eq!(wins_phrase(0), "0 wins.");
        assert_eq!(wins_phrase(1), "1 win.");
        assert_eq!(wins_phrase(5), "5 wins.");
    }
}
