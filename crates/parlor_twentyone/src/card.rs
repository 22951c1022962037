//! Playing cards.

use derive_getters::Getters;
use derive_more::Display;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, strum::EnumIter)]
pub enum Suit {
    /// ♠
    Spades,
    /// ♥
    Hearts,
    /// ♦
    Diamonds,
    /// ♣
    Clubs,
}

/// Card rank, two through ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, strum::EnumIter)]
pub enum Rank {
    /// 2
    #[display("2")]
    Two,
    /// 3
    #[display("3")]
    Three,
    /// 4
    #[display("4")]
    Four,
    /// 5
    #[display("5")]
    Five,
    /// 6
    #[display("6")]
    Six,
    /// 7
    #[display("7")]
    Seven,
    /// 8
    #[display("8")]
    Eight,
    /// 9
    #[display("9")]
    Nine,
    /// 10
    #[display("10")]
    Ten,
    /// Jack
    #[display("J")]
    Jack,
    /// Queen
    #[display("Q")]
    Queen,
    /// King
    #[display("K")]
    King,
    /// Ace
    #[display("A")]
    Ace,
}

impl Rank {
    /// Points before any ace adjustment. Faces count 10, an ace 11.
    pub fn value(self) -> u32 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }

    /// True for an ace.
    pub fn is_ace(self) -> bool {
        self == Rank::Ace
    }
}

/// A single card. Immutable once dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, derive_new::new)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
