//! The player and the dealer.

use super::card::Card;
use super::hand::Hand;
use super::policy::dealer_should_hit;
use derive_getters::Getters;
use parlor_console::{Console, ConsoleError, GameRng};
use tracing::{debug, instrument};

/// Names a dealer may go by. A new one sits down every round.
pub const DEALER_NAMES: [&str; 8] = [
    "The Lone Stranger",
    "Tommy Two-Sleeves",
    "Cat Thievens",
    "The Heiress",
    "Fat Stacks McGee",
    "Bux McMillions",
    "Millie Ann Cashington",
    "Josh from college",
];

/// How a participant decides whether to take another card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Asks the person at the console.
    Player,
    /// Follows the house rule in [`dealer_should_hit`].
    Dealer,
}

/// Someone at the table holding a hand.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Participant {
    name: String,
    hand: Hand,
    role: Role,
}

impl Participant {
    /// The human player.
    pub fn player(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            role: Role::Player,
        }
    }

    /// A dealer with the given name.
    pub fn dealer_named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            role: Role::Dealer,
        }
    }

    /// A dealer with a name drawn from [`DEALER_NAMES`].
    #[instrument(skip(rng))]
    pub fn dealer(rng: &mut GameRng) -> Self {
        let name = rng.choose(&DEALER_NAMES).copied().unwrap_or(DEALER_NAMES[0]);
        Self::dealer_named(name)
    }

    /// Takes a dealt card.
    pub fn hit(&mut self, card: Card) {
        debug!(name = %self.name, %card, "Card dealt");
        self.hand.push(card);
    }

    /// Empties the hand for a new round.
    pub fn discard_hand(&mut self) {
        self.hand.clear();
    }

    /// Whether to take another card.
    ///
    /// The player is asked through `console`; the dealer compares its hand
    /// with `opponent` and never touches the console.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] if the player could not be asked.
    pub fn decide_to_continue<C: Console>(
        &self,
        opponent: &Hand,
        console: &mut C,
    ) -> Result<bool, ConsoleError> {
        let decision = match self.role {
            Role::Player => {
                let choices = ["hit", "stay"];
                let answer = console.select("Would you like to hit or stay?", &choices)?;
                *answer == "hit"
            }
            Role::Dealer => dealer_should_hit(&self.hand, opponent),
        };
        debug!(name = %self.name, role = ?self.role, decision, "Decided whether to continue");
        Ok(decision)
    }
}
