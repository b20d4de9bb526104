//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur while transforming a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DeckError {
    /// Shuffle needs a first card to seed its generator.
    #[error("cannot shuffle an empty deck")]
    EmptyDeck,
}
