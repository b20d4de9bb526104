//! Deck construction options.

use core::fmt;

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;
use crate::ranking::IndexLess;
use crate::transform;

/// A recorded step in a deck pipeline.
type Step = Box<dyn FnOnce(Vec<Card>) -> Result<Vec<Card>, DeckError>>;

/// Builds the standard 52-card deck.
///
/// Cards are ordered suit-major (Spades, Diamonds, Clubs, Hearts), each
/// suit running Ace through King.
///
/// # Example
///
/// ```
/// use deckrs::{Card, DECK_SIZE, Rank, Suit, new_deck};
///
/// let deck = new_deck();
/// assert_eq!(deck.len(), DECK_SIZE);
/// assert_eq!(deck[0], Card::new(Suit::Spade, Rank::ACE));
/// assert_eq!(deck[13], Card::new(Suit::Diamond, Rank::ACE));
/// ```
#[must_use]
pub fn new_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::STANDARD {
        for rank in Rank::standard() {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// An ordered list of transformations applied to a freshly built deck.
///
/// Use the builder pattern to compose a deck:
///
/// ```
/// use deckrs::{DeckOptions, Rank, Suit};
///
/// let deck = DeckOptions::new()
///     .with_filter(|card| card.rank == Rank::ACE)
///     .with_jokers(2)
///     .with_decks(2)
///     .build()
///     .unwrap();
///
/// assert_eq!(deck.len(), (52 - 4 + 2) * 2);
/// assert_eq!(deck.iter().filter(|c| c.suit == Suit::Joker).count(), 4);
/// ```
///
/// Transformations run in the order they were added.
#[derive(Default)]
#[must_use]
pub struct DeckOptions {
    steps: Vec<Step>,
}

impl fmt::Debug for DeckOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckOptions")
            .field("steps", &self.steps.len())
            .finish()
    }
}

impl DeckOptions {
    /// Creates an empty set of options. Building it yields [`new_deck`].
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Number of recorded transformations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if no transformation has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Adds an infallible transformation.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let deck = DeckOptions::new()
    ///     .with(|mut deck| {
    ///         deck.truncate(5);
    ///         deck
    ///     })
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(deck.len(), 5);
    /// ```
    pub fn with<F>(self, step: F) -> Self
    where
        F: FnOnce(Vec<Card>) -> Vec<Card> + 'static,
    {
        self.try_with(move |deck| Ok(step(deck)))
    }

    /// Adds a transformation that may fail. The first error stops the build.
    pub fn try_with<F>(mut self, step: F) -> Self
    where
        F: FnOnce(Vec<Card>) -> Result<Vec<Card>, DeckError> + 'static,
    {
        self.steps.push(Box::new(step));
        self
    }

    /// Sorts by [`absolute_rank`](crate::absolute_rank).
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, DeckOptions, Rank, Suit};
    ///
    /// let deck = DeckOptions::new().with_shuffle().with_default_sort().build().unwrap();
    /// assert_eq!(deck[0], Card::new(Suit::Spade, Rank::ACE));
    /// ```
    pub fn with_default_sort(self) -> Self {
        self.with(transform::default_sort)
    }

    /// Stable-sorts with a comparator factory; see [`sort`](crate::sort).
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, DeckOptions, Rank, Suit, less};
    ///
    /// let deck = DeckOptions::new()
    ///     .with_shuffle()
    ///     .with_sort(less)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(deck[51], Card::new(Suit::Heart, Rank::KING));
    /// ```
    pub fn with_sort<M>(self, make_less: M) -> Self
    where
        M: for<'a> FnMut(&'a [Card]) -> IndexLess<'a> + 'static,
    {
        self.with(transform::sort(make_less))
    }

    /// Stable-sorts with a strict less-than predicate over two cards.
    pub fn with_sort_by<F>(self, less: F) -> Self
    where
        F: FnMut(&Card, &Card) -> bool + 'static,
    {
        self.with(transform::sort_by(less))
    }

    /// Stable-sorts by a key.
    pub fn with_sort_by_key<K, F>(self, key: F) -> Self
    where
        K: Ord + 'static,
        F: FnMut(&Card) -> K + 'static,
    {
        self.with(transform::sort_by_key(key))
    }

    /// Shuffles with a generator seeded from the deck's first card.
    ///
    /// Building fails with [`DeckError::EmptyDeck`] if the deck is empty at
    /// this point.
    pub fn with_shuffle(self) -> Self {
        self.try_with(transform::shuffle)
    }

    /// Shuffles with a caller-chosen seed.
    pub fn with_shuffle_seed(self, seed: u64) -> Self {
        self.with(transform::shuffle_with_seed(seed))
    }

    /// Appends `count` distinguishable jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let deck = DeckOptions::new().with_jokers(15).build().unwrap();
    /// assert_eq!(deck.len(), 67);
    /// assert_eq!(deck.iter().filter(|c| c.is_joker()).count(), 15);
    /// ```
    pub fn with_jokers(self, count: u16) -> Self {
        self.with(transform::add_jokers(count))
    }

    /// Removes every card for which `predicate` returns `true`.
    pub fn with_filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&Card) -> bool + 'static,
    {
        self.with(transform::filter_cards(predicate))
    }

    /// Replaces the deck with `n` copies of itself.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let deck = DeckOptions::new().with_decks(4).build().unwrap();
    /// assert_eq!(deck.len(), 13 * 4 * 4);
    /// ```
    pub fn with_decks(self, n: usize) -> Self {
        self.with(transform::add_deck(n))
    }

    /// Applies every transformation, in order, to [`new_deck`].
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a transformation.
    pub fn build(self) -> Result<Vec<Card>, DeckError> {
        self.apply(new_deck())
    }

    /// Applies every transformation, in order, to `deck`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a transformation.
    pub fn apply(self, deck: Vec<Card>) -> Result<Vec<Card>, DeckError> {
        #[cfg(feature = "tracing")]
        let steps = self.steps.len();

        let deck = self.steps.into_iter().try_fold(deck, |deck, step| step(deck))?;

        #[cfg(feature = "tracing")]
        tracing::event!(tracing::Level::DEBUG, steps, len = deck.len(), "deck built");

        Ok(deck)
    }
}
