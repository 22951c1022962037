//! A single 52-card deck, dealt from the top.

use super::card::{Card, Rank, Suit};
use super::error::DeckError;
use parlor_console::GameRng;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Cards still undealt. Each card appears at most once.
///
/// The top of the deck is the end of the vector, so dealing is a pop.
/// A deck is never refilled; a new round gets a new deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards, suit by suit, unshuffled.
    pub fn standard() -> Self {
        let cards = Suit::iter()
            .flat_map(|suit| Rank::iter().map(move |rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }

    /// All 52 cards in random order.
    #[instrument(skip(rng))]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::standard();
        rng.shuffle(&mut deck.cards);
        debug!(cards = deck.cards.len(), "Deck shuffled");
        deck
    }

    /// A deck that deals `deal_order` front to back.
    pub fn stacked(deal_order: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = deal_order.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] when no cards remain. A round never
    /// comes close to using 52 cards, so this indicates a bug.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted)
    }

    /// Cards left to deal.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True once every card has been dealt.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
