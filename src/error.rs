//! Error types for card and deck operations.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank ordinal outside the rank model's range.
    #[error("rank ordinal {0} is out of range for this rank model")]
    RankOutOfRange(u8),
    /// Suit ordinal outside 0..=3.
    #[error("suit ordinal {0} is out of range")]
    SuitOutOfRange(u8),
    /// Rank name not recognized.
    #[error("unrecognized rank name")]
    UnknownRankName,
    /// Suit name not recognized.
    #[error("unrecognized suit name")]
    UnknownSuitName,
}

/// Errors that can occur during deck operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Indexed access beyond the current deck bounds.
    #[error("index {index} is out of range for a deck of {len} cards")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The deck length at the time of the access.
        len: usize,
    },
    /// Cut amount beyond the current deck length.
    #[error("cannot cut {requested} cards off a deck of {len} cards")]
    CutOutOfRange {
        /// The requested number of cards off the top.
        requested: usize,
        /// The deck length at the time of the cut.
        len: usize,
    },
}

/// Error returned when parsing a new-deck-order region tag fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("region must be \"US\" or \"European\"")]
pub struct ParseRegionError;
