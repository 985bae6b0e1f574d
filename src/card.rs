//! Card types: suits, rank models, and playing cards.

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt;

use crate::error::CardError;

/// Rank names indexed by ordinal (0 = Joker, 1 = Ace, 13 = King).
const RANK_NAMES: [&str; 14] = [
    "Joker", "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack",
    "Queen", "King",
];

/// Card suit, in CHaSeD order (Clubs, Hearts, Spades, Diamonds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs (ordinal 0).
    Clubs,
    /// Hearts (ordinal 1).
    Hearts,
    /// Spades (ordinal 2).
    Spades,
    /// Diamonds (ordinal 3).
    Diamonds,
}

impl Suit {
    /// All four suits in CHaSeD order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Hearts, Self::Spades, Self::Diamonds];

    /// Creates a suit from its CHaSeD ordinal (0 = Clubs, 3 = Diamonds).
    ///
    /// # Errors
    ///
    /// Returns an error if the ordinal is outside 0..=3.
    pub const fn from_index(index: u8) -> Result<Self, CardError> {
        match index {
            0 => Ok(Self::Clubs),
            1 => Ok(Self::Hearts),
            2 => Ok(Self::Spades),
            3 => Ok(Self::Diamonds),
            _ => Err(CardError::SuitOutOfRange(index)),
        }
    }

    /// Parses a suit from its name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the name does not match a suit.
    pub fn from_name(name: &str) -> Result<Self, CardError> {
        for suit in Self::ALL {
            if name.eq_ignore_ascii_case(suit.name()) {
                return Ok(suit);
            }
        }
        Err(CardError::UnknownSuitName)
    }

    /// Returns the suit's CHaSeD ordinal.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the suit's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which ranks a card table recognizes.
///
/// Decks come in two variants: with or without a Joker. The model is passed
/// to the validated [`Card`] constructors so both variants share one
/// implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RankModel {
    /// Ranks 1 (Ace) through 13 (King); no Joker.
    #[default]
    Standard,
    /// Ranks 0 through 13, where 0 is the Joker.
    WithJoker,
}

impl RankModel {
    /// Returns whether `rank` is a valid ordinal under this model.
    #[must_use]
    pub const fn contains(self, rank: u8) -> bool {
        match self {
            Self::Standard => rank >= 1 && rank <= 13,
            Self::WithJoker => rank <= 13,
        }
    }
}

/// A playing card.
///
/// Two cards are equal iff their rank and suit match; names are derived, not
/// independent state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (0 = Joker, 1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Use
    /// [`Card::from_ordinals`] or [`Card::from_names`] for checked
    /// construction against a [`RankModel`].
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Creates a card from rank and suit ordinals, validated against `model`.
    ///
    /// # Errors
    ///
    /// Returns an error if the rank is outside the model's range or the suit
    /// ordinal is outside 0..=3.
    pub const fn from_ordinals(rank: u8, suit: u8, model: RankModel) -> Result<Self, CardError> {
        if !model.contains(rank) {
            return Err(CardError::RankOutOfRange(rank));
        }
        match Suit::from_index(suit) {
            Ok(suit) => Ok(Self { suit, rank }),
            Err(err) => Err(err),
        }
    }

    /// Creates a card from case-insensitive rank and suit names.
    ///
    /// `"Joker"` is accepted only under [`RankModel::WithJoker`]. The suit is
    /// required and validated even for a Joker; it carries whatever suit it
    /// was built with but is named plain "Joker".
    ///
    /// # Errors
    ///
    /// Returns an error if either name is unrecognized or the rank is outside
    /// the model's range.
    pub fn from_names(rank: &str, suit: &str, model: RankModel) -> Result<Self, CardError> {
        let mut ordinal = None;
        for (i, name) in RANK_NAMES.iter().enumerate() {
            if rank.eq_ignore_ascii_case(name) {
                ordinal = Some(i as u8);
                break;
            }
        }
        let rank = ordinal.ok_or(CardError::UnknownRankName)?;
        if !model.contains(rank) {
            return Err(CardError::RankOutOfRange(rank));
        }
        let suit = Suit::from_name(suit)?;
        Ok(Self { suit, rank })
    }

    /// Returns the rank's name ("Ace", "King", "Joker").
    ///
    /// Ranks outside 0..=13 (possible via [`Card::new`]) name as "Unknown".
    #[must_use]
    pub const fn rank_name(self) -> &'static str {
        if (self.rank as usize) < RANK_NAMES.len() {
            RANK_NAMES[self.rank as usize]
        } else {
            "Unknown"
        }
    }

    /// Returns the suit's name.
    #[must_use]
    pub const fn suit_name(self) -> &'static str {
        self.suit.name()
    }

    /// Returns the card's display name, e.g. "Ace of Spades".
    ///
    /// A Joker is named simply "Joker".
    #[must_use]
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rank == 0 {
            f.write_str("Joker")
        } else {
            write!(f, "{} of {}", self.rank_name(), self.suit_name())
        }
    }
}

/// Number of cards in a standard deck without Jokers.
pub const DECK_SIZE: usize = 52;
