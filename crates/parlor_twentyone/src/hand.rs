//! A participant's cards and what they are worth.

use super::card::Card;
use parlor_console::joinand;

/// The best total a hand can have without busting.
pub const TWENTY_ONE: u32 = 21;

/// Difference between an ace counted high (11) and low (1).
const SOFT_ACE_DISCOUNT: u32 = 10;

/// Cards in the order they were dealt.
///
/// The value is recomputed on every call so it always reflects the current
/// cards, soft aces included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// An empty hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dealt card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Throws every card away.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Cards in deal order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Best total: aces count 11 until that would bust, then 1, one ace
    /// at a time.
    pub fn value(&self) -> u32 {
        self.evaluate().0
    }

    /// True while an ace is still counted as 11.
    pub fn is_soft(&self) -> bool {
        self.evaluate().1 > 0
    }

    /// Over twenty-one.
    pub fn busted(&self) -> bool {
        self.value() > TWENTY_ONE
    }

    /// Exactly twenty-one.
    pub fn twenty_one(&self) -> bool {
        self.value() == TWENTY_ONE
    }

    /// Busted or twenty-one; either way no more cards are taken.
    pub fn game_over(&self) -> bool {
        self.busted() || self.twenty_one()
    }

    /// `"2 of Spades, and K of Hearts"`.
    pub fn describe(&self) -> String {
        joinand(&self.cards)
    }

    /// Total and the number of aces still counted high.
    fn evaluate(&self) -> (u32, usize) {
        let mut total: u32 = self.cards.iter().map(|c| c.rank().value()).sum();
        let mut high_aces = self.cards.iter().filter(|c| c.rank().is_ace()).count();
        while total > TWENTY_ONE && high_aces > 0 {
            total -= SOFT_ACE_DISCOUNT;
            high_aces -= 1;
        }
        (total, high_aces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for rank in ranks {
            hand.push(Card::new(Suit::Spades, *rank));
        }
        hand
    }

    #[test]
    fn test_two_aces_and_nine_is_twenty_one() {
        let h = hand(&[Rank::Ace, Rank::Ace, Rank::Nine]);
        assert_eq!(h.value(), 21);
        assert!(h.twenty_one());
        assert!(h.is_soft());
    }

    #[test]
    fn test_value_is_stable() {
        let h = hand(&[Rank::Ace, Rank::Six, Rank::King]);
        assert_eq!(h.value(), 17);
        assert_eq!(h.value(), h.value());
        assert!(!h.is_soft());
    }

    #[test]
    fn test_faces_count_ten() {
        assert_eq!(hand(&[Rank::Jack, Rank::Queen]).value(), 20);
        assert_eq!(hand(&[Rank::King, Rank::Ten]).value(), 20);
    }

    #[test]
    fn test_natural() {
        let h = hand(&[Rank::Ace, Rank::King]);
        assert_eq!(h.value(), 21);
        assert!(h.game_over());
    }

    #[test]
    fn test_soft_seventeen() {
        let h = hand(&[Rank::Ace, Rank::Six]);
        assert_eq!(h.value(), 17);
        assert!(h.is_soft());
    }

    #[test]
    fn test_bust() {
        let h = hand(&[Rank::King, Rank::Queen, Rank::Two]);
        assert_eq!(h.value(), 22);
        assert!(h.busted());
        assert!(h.game_over());
        assert!(!h.twenty_one());
    }

    #[test]
    fn test_four_aces() {
        assert_eq!(hand(&[Rank::Ace; 4]).value(), 14);
    }

    #[test]
    fn test_empty_and_cleared() {
        let mut h = hand(&[Rank::Five]);
        h.clear();
        assert_eq!(h, Hand::new());
        assert_eq!(h.value(), 0);
        assert!(!h.game_over());
    }

    #[test]
    fn test_describe() {
        let mut h = Hand::new();
        h.push(Card::new(Suit::Spades, Rank::Two));
        h.push(Card::new(Suit::Hearts, Rank::King));
        assert_eq!(h.describe(), "2 of Spades, and K of Hearts");
    }
}
