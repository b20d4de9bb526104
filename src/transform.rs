//! Composable deck transformations.
//!
//! Each transformation consumes a deck and returns the next one, so they can
//! be chained directly or recorded on [`DeckOptions`](crate::DeckOptions).

use core::cmp::Ordering;

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, JOKER_RANK_BASE};
use crate::error::DeckError;
use crate::ranking::{IndexLess, absolute_rank, less};

/// Converts a strict less-than predicate into an ordering.
fn ordering_from_less<T, F>(less: &mut F, a: T, b: T) -> Ordering
where
    T: Copy,
    F: FnMut(T, T) -> bool,
{
    if less(a, b) {
        Ordering::Less
    } else if less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Stable-sorts the deck ascending by [`absolute_rank`].
///
/// # Example
///
/// ```
/// use deckrs::{Card, Rank, Suit, default_sort, new_deck};
///
/// let mut deck = new_deck();
/// deck.reverse();
/// let deck = default_sort(deck);
/// assert_eq!(deck[0], Card::new(Suit::Spade, Rank::ACE));
/// ```
#[must_use]
pub fn default_sort(deck: Vec<Card>) -> Vec<Card> {
    sort(less)(deck)
}

/// Returns a transformation that stable-sorts the deck with a comparator
/// built for it.
///
/// `make_less` receives the deck being sorted and returns a predicate over
/// two positions in it, so the ordering may depend on the whole deck.
/// Positions for which neither `less(i, j)` nor `less(j, i)` holds keep
/// their relative order.
///
/// # Example
///
/// ```
/// use deckrs::{Card, IndexLess, Rank, Suit, new_deck, sort};
///
/// // Cards whose rank is rarer in the deck come first.
/// fn rarest_rank_first(cards: &[Card]) -> IndexLess<'_> {
///     let copies = move |i: usize| cards.iter().filter(|c| c.rank == cards[i].rank).count();
///     Box::new(move |i: usize, j: usize| copies(i) < copies(j))
/// }
///
/// let mut deck = new_deck();
/// deck.truncate(3);
/// deck.push(Card::new(Suit::Heart, Rank::ACE));
/// let deck = sort(rarest_rank_first)(deck);
/// assert_eq!(deck[0], Card::new(Suit::Spade, Rank::TWO));
/// ```
pub fn sort<M>(mut make_less: M) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    M: for<'a> FnMut(&'a [Card]) -> IndexLess<'a>,
{
    move |deck| {
        let mut order: Vec<usize> = (0..deck.len()).collect();
        let mut less = make_less(deck.as_slice());
        order.sort_by(|&i, &j| ordering_from_less(&mut less, i, j));
        order.into_iter().map(|i| deck[i]).collect()
    }
}

/// Returns a transformation that stable-sorts the deck with a strict
/// less-than predicate over two cards.
pub fn sort_by<F>(mut less: F) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    F: FnMut(&Card, &Card) -> bool,
{
    move |mut deck| {
        deck.sort_by(|a, b| ordering_from_less(&mut less, a, b));
        deck
    }
}

/// Returns a transformation that stable-sorts the deck by a key.
pub fn sort_by_key<K, F>(mut key: F) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    K: Ord,
    F: FnMut(&Card) -> K,
{
    move |mut deck| {
        deck.sort_by_key(&mut key);
        deck
    }
}

/// Shuffles the deck with a generator seeded from its first card.
///
/// The seed is the [`absolute_rank`] of `deck[0]`, which makes the
/// permutation reproducible: two decks of the same length that start with
/// the same card are permuted identically.
///
/// # Errors
///
/// Returns [`DeckError::EmptyDeck`] if the deck has no cards.
pub fn shuffle(deck: Vec<Card>) -> Result<Vec<Card>, DeckError> {
    let first = deck.first().ok_or(DeckError::EmptyDeck)?;
    let seed = absolute_rank(first);
    Ok(shuffle_with_seed(seed)(deck))
}

/// Returns a transformation that shuffles the deck with a fixed seed.
///
/// Unlike [`shuffle`], this accepts an empty deck.
pub fn shuffle_with_seed(seed: u64) -> impl FnMut(Vec<Card>) -> Vec<Card> {
    move |mut deck| {
        #[cfg(feature = "tracing")]
        tracing::event!(tracing::Level::TRACE, seed, len = deck.len(), "shuffling deck");

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        deck.shuffle(&mut rng);
        deck
    }
}

/// Returns a transformation that appends `count` jokers.
///
/// The jokers get ranks `14, 15, ...` so each one is distinguishable. The
/// count is a `u16`, so every joker rank fits in a [`Rank`](crate::Rank).
///
/// # Example
///
/// ```
/// use deckrs::{add_jokers, new_deck};
///
/// let deck = add_jokers(2)(new_deck());
/// assert_eq!(deck.len(), 54);
/// assert!(deck[52].is_joker());
/// ```
pub fn add_jokers(count: u16) -> impl FnMut(Vec<Card>) -> Vec<Card> {
    move |mut deck| {
        deck.reserve(usize::from(count));
        deck.extend((0..u32::from(count)).map(|i| Card::joker(JOKER_RANK_BASE + i)));
        deck
    }
}

/// Returns a transformation that removes every card matching `predicate`.
///
/// Remaining cards keep their relative order.
pub fn filter_cards<P>(mut predicate: P) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    P: FnMut(&Card) -> bool,
{
    move |mut deck| {
        deck.retain(|card| !predicate(card));
        deck
    }
}

/// Returns a transformation that replaces the deck with `n` back-to-back
/// copies of itself.
///
/// The result holds exactly `n` copies, not the input plus `n` more;
/// `n == 0` yields an empty deck.
///
/// # Example
///
/// ```
/// use deckrs::{add_deck, new_deck};
///
/// assert_eq!(add_deck(3)(new_deck()).len(), 156);
/// assert!(add_deck(0)(new_deck()).is_empty());
/// ```
pub fn add_deck(n: usize) -> impl FnMut(Vec<Card>) -> Vec<Card> {
    move |deck| deck.repeat(n)
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec;

    use super::*;
    use crate::card::{Rank, Suit};

    const fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let deck = vec![
            card(Suit::Heart, Rank::TWO),
            card(Suit::Spade, Rank::TWO),
            card(Suit::Club, Rank::ACE),
            card(Suit::Diamond, Rank::TWO),
        ];
        let sorted = sort_by(|a: &Card, b: &Card| a.rank < b.rank)(deck);
        assert_eq!(
            sorted,
            vec![
                card(Suit::Club, Rank::ACE),
                card(Suit::Heart, Rank::TWO),
                card(Suit::Spade, Rank::TWO),
                card(Suit::Diamond, Rank::TWO),
            ]
        );
    }

    fn by_suit_count_descending(cards: &[Card]) -> IndexLess<'_> {
        let count = move |i: usize| cards.iter().filter(|c| c.suit == cards[i].suit).count();
        Box::new(move |i: usize, j: usize| count(i) > count(j))
    }

    #[test]
    fn sort_comparator_sees_whole_deck() {
        let deck = vec![
            card(Suit::Heart, Rank::TWO),
            card(Suit::Club, Rank::ACE),
            card(Suit::Spade, Rank::KING),
            card(Suit::Club, Rank::FIVE),
            card(Suit::Spade, Rank::THREE),
            card(Suit::Club, Rank::NINE),
        ];
        let sorted = sort(by_suit_count_descending)(deck);
        assert_eq!(
            sorted,
            vec![
                card(Suit::Club, Rank::ACE),
                card(Suit::Club, Rank::FIVE),
                card(Suit::Club, Rank::NINE),
                card(Suit::Spade, Rank::KING),
                card(Suit::Spade, Rank::THREE),
                card(Suit::Heart, Rank::TWO),
            ]
        );
    }

    #[test]
    fn default_sort_matches_sort_by_card_less() {
        let deck = shuffle_with_seed(3)(add_jokers(2)(crate::new_deck()));
        assert_eq!(
            default_sort(deck.clone()),
            sort_by(crate::ranking::card_less)(deck)
        );
    }

    #[test]
    fn sort_by_key_descending() {
        let deck = vec![
            card(Suit::Spade, Rank::ACE),
            card(Suit::Spade, Rank::KING),
            card(Suit::Spade, Rank::SEVEN),
        ];
        let sorted = sort_by_key(|c: &Card| core::cmp::Reverse(c.rank))(deck);
        assert_eq!(sorted[0].rank, Rank::KING);
        assert_eq!(sorted[2].rank, Rank::ACE);
    }

    #[test]
    fn shuffle_rejects_empty_deck() {
        assert_eq!(shuffle(Vec::new()), Err(DeckError::EmptyDeck));
    }

    #[test]
    fn shuffle_single_card() {
        let deck = vec![card(Suit::Club, Rank::NINE)];
        assert_eq!(shuffle(deck.clone()), Ok(deck));
    }

    #[test]
    fn shuffle_matches_explicit_seed() {
        let deck = vec![
            card(Suit::Diamond, Rank::THREE),
            card(Suit::Spade, Rank::ACE),
            card(Suit::Heart, Rank::JACK),
            card(Suit::Club, Rank::TEN),
        ];
        let seed = absolute_rank(&deck[0]);
        assert_eq!(
            shuffle(deck.clone()),
            Ok(shuffle_with_seed(seed)(deck))
        );
    }

    #[test]
    fn shuffle_with_seed_accepts_empty_deck() {
        assert!(shuffle_with_seed(7)(Vec::new()).is_empty());
    }

    #[test]
    fn joker_ranks_count_up_from_base() {
        let deck = add_jokers(3)(Vec::new());
        assert_eq!(
            deck,
            vec![Card::joker(14), Card::joker(15), Card::joker(16)]
        );
    }

    #[test]
    fn many_jokers_stay_distinct() {
        let deck = add_jokers(300)(Vec::new());
        assert_eq!(deck.len(), 300);
        assert_eq!(deck[299], Card::joker(JOKER_RANK_BASE + 299));
        assert!(
            deck.windows(2)
                .all(|w| w[0].rank.ordinal() + 1 == w[1].rank.ordinal())
        );
    }

    #[test]
    fn zero_jokers_leave_deck_unchanged() {
        let deck = vec![card(Suit::Spade, Rank::ACE)];
        assert_eq!(add_jokers(0)(deck.clone()), deck);
    }

    #[test]
    fn filter_everything_yields_empty_deck() {
        let deck = vec![card(Suit::Spade, Rank::ACE), Card::joker(14)];
        assert!(filter_cards(|_| true)(deck).is_empty());
    }

    #[test]
    fn add_deck_preserves_copy_order() {
        let deck = vec![card(Suit::Spade, Rank::ACE), card(Suit::Heart, Rank::KING)];
        let doubled = add_deck(2)(deck.clone());
        assert_eq!(&doubled[..2], deck.as_slice());
        assert_eq!(&doubled[2..], deck.as_slice());
        assert_eq!(add_deck(1)(deck.clone()), deck);
    }
}
