//! Deck factories for common starting orders.

extern crate alloc;

use alloc::vec::Vec;
use core::str::FromStr;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::deck::Deck;
use crate::error::ParseRegionError;

/// Ranks used by Euchre and Pinochle decks: Nine through King, then Ace.
const EUCHRE_RANKS: [u8; 6] = [9, 10, 11, 12, 13, 1];

/// New-deck-order region.
///
/// U.S. decks (e.g. the U.S. Playing Card Company) and European decks (e.g.
/// Cartamundi) ship with different suit groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    /// U.S. order: Hearts and Clubs ascending, Diamonds and Spades
    /// descending.
    #[default]
    Us,
    /// European order: Spades and Hearts ascending, Diamonds and Clubs
    /// descending.
    European,
}

impl Region {
    /// Suit grouping of a sealed deck; the first two suits run Ace up to
    /// King, the last two King down to Ace.
    const fn suit_order(self) -> [Suit; 4] {
        match self {
            Self::Us => [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades],
            Self::European => [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs],
        }
    }
}

impl FromStr for Region {
    type Err = ParseRegionError;

    /// Parses `"US"` or `"European"`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("us") {
            Ok(Self::Us)
        } else if s.eq_ignore_ascii_case("european") {
            Ok(Self::European)
        } else {
            Err(ParseRegionError)
        }
    }
}

/// Builds a 52-card deck (no Jokers) in factory-sealed new deck order for
/// `region`.
#[must_use]
pub fn new_deck_order(region: Region) -> Deck {
    let order = region.suit_order();
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for &suit in &order[..2] {
        for rank in 1..=13 {
            cards.push(Card::new(suit, rank));
        }
    }
    for &suit in &order[2..] {
        for rank in (1..=13).rev() {
            cards.push(Card::new(suit, rank));
        }
    }
    Deck::new(cards)
}

/// Builds a 24-card Euchre deck.
///
/// Euchre uses every suit from Nine to King plus Ace high, suit-major in
/// CHaSeD order.
#[must_use]
pub fn euchre_deck() -> Deck {
    let mut cards = Vec::with_capacity(EUCHRE_RANKS.len() * 4);
    for suit in Suit::ALL {
        for rank in EUCHRE_RANKS {
            cards.push(Card::new(suit, rank));
        }
    }
    Deck::new(cards)
}

/// Builds a 48-card Pinochle deck.
///
/// Pinochle uses two copies of every Euchre card, each pair adjacent.
#[must_use]
pub fn pinochle_deck() -> Deck {
    let mut cards = Vec::with_capacity(EUCHRE_RANKS.len() * 8);
    for suit in Suit::ALL {
        for rank in EUCHRE_RANKS {
            for _ in 0..2 {
                cards.push(Card::new(suit, rank));
            }
        }
    }
    Deck::new(cards)
}
