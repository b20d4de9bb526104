//! A playing-card deck library with optional `no_std` support.
//!
//! Decks are plain `Vec<Card>` values threaded through transformations:
//! sorting, seeded shuffling, adding jokers, filtering, and duplication.
//! [`DeckOptions`] records a chain of them and applies it to a fresh deck.
//!
//! # Example
//!
//! ```
//! use deckrs::{DeckOptions, Suit};
//!
//! let deck = DeckOptions::new()
//!     .with_jokers(2)
//!     .with_shuffle()
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(deck.len(), 54);
//! assert_eq!(deck.iter().filter(|c| c.suit == Suit::Joker).count(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod options;
pub mod ranking;
pub mod transform;

// Re-export main types
pub use card::{Card, DECK_SIZE, JOKER_RANK_BASE, MAX_RANK, MIN_RANK, Rank, Suit};
pub use error::DeckError;
pub use options::{DeckOptions, new_deck};
pub use ranking::{IndexLess, absolute_rank, card_less, less};
pub use transform::{
    add_deck, add_jokers, default_sort, filter_cards, shuffle, shuffle_with_seed, sort, sort_by,
    sort_by_key,
};
