//! Total ordering of cards.

use alloc::boxed::Box;

use crate::card::{Card, MAX_RANK};

/// A less-than predicate over two positions of a deck.
///
/// Produced by a comparator factory for the deck it is about to sort; see
/// [`sort`](crate::sort).
pub type IndexLess<'a> = Box<dyn FnMut(usize, usize) -> bool + 'a>;

/// Maps a card to an integer used for comparison and shuffle seeding.
///
/// The value is `suit_ordinal * 13 + rank_ordinal`, so Spades span 1..=13
/// and Diamonds 14..=26. Joker cards get a value too, but it carries no
/// ordering meaning.
///
/// # Example
///
/// ```
/// use deckrs::{Card, Rank, Suit, absolute_rank};
///
/// assert_eq!(absolute_rank(&Card::new(Suit::Spade, Rank::ACE)), 1);
/// assert_eq!(absolute_rank(&Card::new(Suit::Diamond, Rank::ACE)), 14);
/// assert_eq!(absolute_rank(&Card::new(Suit::Heart, Rank::KING)), 52);
/// ```
#[must_use]
pub const fn absolute_rank(card: &Card) -> u64 {
    card.suit.ordinal() as u64 * MAX_RANK.ordinal() as u64 + card.rank.ordinal() as u64
}

/// Default comparator factory: position `i` sorts before `j` when its card
/// has the lower [`absolute_rank`].
///
/// # Example
///
/// ```
/// use deckrs::{less, new_deck};
///
/// let deck = new_deck();
/// let mut less = less(&deck);
/// assert!(less(0, 51));
/// assert!(!less(51, 0));
/// ```
#[must_use]
pub fn less(cards: &[Card]) -> IndexLess<'_> {
    Box::new(move |i: usize, j: usize| card_less(&cards[i], &cards[j]))
}

/// Pairwise form of [`less`]: `true` when `a` sorts strictly before `b`.
#[must_use]
pub const fn card_less(a: &Card, b: &Card) -> bool {
    absolute_rank(a) < absolute_rank(b)
}
