//! Card types and deck constants.

use core::fmt;

/// Card suit.
///
/// The discriminants are the suit ordinals used by
/// [`absolute_rank`](crate::ranking::absolute_rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Suit {
    /// Spades.
    Spade = 0,
    /// Diamonds.
    Diamond = 1,
    /// Clubs.
    Club = 2,
    /// Hearts.
    Heart = 3,
    /// Marker suit for jokers. Never part of a standard deck.
    Joker = 4,
}

impl Suit {
    /// The four playable suits, in deck construction order.
    pub const STANDARD: [Self; 4] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];

    /// Returns the ordinal of the suit.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the singular name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
            Self::Joker => "Joker",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank.
///
/// Ordinary cards use `ACE` (1) through `KING` (13). Joker cards reuse the
/// rank as a counter starting at [`JOKER_RANK_BASE`] so that several jokers
/// in one deck stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u32);

/// Rank names indexed by ordinal. Index 0 is unused.
const RANK_NAMES: [&str; 14] = [
    "", "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack",
    "Queen", "King",
];

impl Rank {
    /// Ace.
    pub const ACE: Self = Self(1);
    /// Two.
    pub const TWO: Self = Self(2);
    /// Three.
    pub const THREE: Self = Self(3);
    /// Four.
    pub const FOUR: Self = Self(4);
    /// Five.
    pub const FIVE: Self = Self(5);
    /// Six.
    pub const SIX: Self = Self(6);
    /// Seven.
    pub const SEVEN: Self = Self(7);
    /// Eight.
    pub const EIGHT: Self = Self(8);
    /// Nine.
    pub const NINE: Self = Self(9);
    /// Ten.
    pub const TEN: Self = Self(10);
    /// Jack.
    pub const JACK: Self = Self(11);
    /// Queen.
    pub const QUEEN: Self = Self(12);
    /// King.
    pub const KING: Self = Self(13);

    /// Creates a rank from its ordinal.
    ///
    /// Note: This function does not validate the value. Anything outside
    /// 1..=13 is only meaningful as a joker counter.
    #[must_use]
    pub const fn new(ordinal: u32) -> Self {
        Self(ordinal)
    }

    /// Returns the ordinal of the rank.
    #[must_use]
    pub const fn ordinal(self) -> u32 {
        self.0
    }

    /// Returns `true` for Ace through King.
    #[must_use]
    pub const fn is_standard(self) -> bool {
        self.0 >= MIN_RANK.0 && self.0 <= MAX_RANK.0
    }

    /// Iterates Ace through King in ascending order.
    pub fn standard() -> impl DoubleEndedIterator<Item = Self> + Clone {
        (MIN_RANK.0..=MAX_RANK.0).map(Self)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_standard() {
            f.write_str(RANK_NAMES[self.0 as usize])
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Lowest ordinary rank.
pub const MIN_RANK: Rank = Rank::ACE;

/// Highest ordinary rank.
pub const MAX_RANK: Rank = Rank::KING;

/// Rank given to the first joker added to a deck.
pub const JOKER_RANK_BASE: u32 = 14;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Creates a joker carrying the given rank counter.
    #[must_use]
    pub const fn joker(rank: u32) -> Self {
        Self {
            suit: Suit::Joker,
            rank: Rank(rank),
        }
    }

    /// Returns `true` if the card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.suit, Suit::Joker)
    }

    /// See [`absolute_rank`](crate::ranking::absolute_rank).
    #[must_use]
    pub const fn absolute_rank(&self) -> u64 {
        crate::ranking::absolute_rank(self)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            return f.write_str(self.suit.name());
        }
        write!(f, "{} of {}s", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn renders_ordinary_cards() {
        assert_eq!(Card::new(Suit::Club, Rank::ACE).to_string(), "Ace of Clubs");
        assert_eq!(
            Card::new(Suit::Diamond, Rank::FIVE).to_string(),
            "Five of Diamonds"
        );
        assert_eq!(
            Card::new(Suit::Heart, Rank::EIGHT).to_string(),
            "Eight of Hearts"
        );
        assert_eq!(
            Card::new(Suit::Spade, Rank::QUEEN).to_string(),
            "Queen of Spades"
        );
    }

    #[test]
    fn renders_joker_regardless_of_rank() {
        assert_eq!(Card::joker(0).to_string(), "Joker");
        assert_eq!(Card::joker(JOKER_RANK_BASE).to_string(), "Joker");
        assert_eq!(Card::new(Suit::Joker, Rank::KING).to_string(), "Joker");
    }

    #[test]
    fn non_standard_ranks_render_numerically() {
        assert_eq!(Rank::new(0).to_string(), "0");
        assert_eq!(Rank::new(JOKER_RANK_BASE).to_string(), "14");
        assert_eq!(
            Card::new(Suit::Heart, Rank::new(20)).to_string(),
            "20 of Hearts"
        );
    }

    #[test]
    fn standard_ranks_ascend() {
        let mut ranks = Rank::standard();
        assert_eq!(ranks.next(), Some(Rank::ACE));
        assert_eq!(ranks.next_back(), Some(Rank::KING));
        assert_eq!(Rank::standard().count(), 13);
        assert!(Rank::standard().all(Rank::is_standard));
    }

    #[test]
    fn standard_suits_exclude_joker() {
        assert!(!Suit::STANDARD.contains(&Suit::Joker));
        assert_eq!(Suit::STANDARD.len() * 13, DECK_SIZE);
    }
}
