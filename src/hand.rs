//! A player's hand: a labeled holding area over a deck.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::RangeBounds;

use rand::Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;

/// A player's hand of cards.
///
/// A hand starts empty, carries an optional display label, and supports the
/// same permutation and query operations as a [`Deck`]. It holds a deck
/// rather than being one; anything not delegated here is reachable through
/// [`Hand::deck`] and [`Hand::deck_mut`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    /// The cards held, top first.
    deck: Deck,
    /// Display label; may be empty.
    label: String,
}

impl Hand {
    /// Creates an empty hand with a display label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            deck: Deck::empty(),
            label: label.into(),
        }
    }

    /// Creates an empty hand with no label.
    #[must_use]
    pub fn unlabeled() -> Self {
        Self::new("")
    }

    /// Returns the hand's label, which may be empty.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the hand's cards as a deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns mutable access to the hand's cards as a deck.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Returns the cards in the hand, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.deck.cards()
    }

    /// Returns the card at `index`, counting from the top of the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not below the hand's length.
    pub fn card_at(&self, index: usize) -> Result<Card, DeckError> {
        self.deck.card_at(index)
    }

    /// Returns the display names of the cards in `range`.
    ///
    /// See [`Deck::names`].
    #[must_use]
    pub fn names(&self, range: impl RangeBounds<usize>) -> Vec<String> {
        self.deck.names(range)
    }

    /// Adds a card to the bottom of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.deck.add_card(card);
    }

    /// Deals the top card, or `None` if the hand is empty.
    pub fn deal_top(&mut self) -> Option<Card> {
        self.deck.deal_top()
    }

    /// Deals the bottom card, or `None` if the hand is empty.
    pub fn deal_bottom(&mut self) -> Option<Card> {
        self.deck.deal_bottom()
    }

    /// Deals the second card from the top, or `None` with fewer than two
    /// cards.
    pub fn deal_second(&mut self) -> Option<Card> {
        self.deck.deal_second()
    }

    /// Stable-sorts the hand by rank ordinal, ascending.
    pub fn sort(&mut self) {
        self.deck.sort();
    }

    /// Stable-sorts the hand by a caller-supplied key.
    ///
    /// See [`Deck::sort_by_key`].
    pub fn sort_by_key<K, F>(&mut self, key: F, reverse: bool)
    where
        K: Ord,
        F: Fn(&Card) -> K,
    {
        self.deck.sort_by_key(key, reverse);
    }

    /// Cuts the hand in half.
    pub fn cut(&mut self) {
        self.deck.cut();
    }

    /// Cuts `cards_off_top` cards off the top of the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if `cards_off_top` exceeds the hand's length.
    pub fn cut_at(&mut self, cards_off_top: usize) -> Result<(), DeckError> {
        self.deck.cut_at(cards_off_top)
    }

    /// Shuffles the hand once with fresh randomness.
    #[cfg(feature = "std")]
    pub fn shuffle(&mut self) {
        self.deck.shuffle();
    }

    /// Shuffles the hand once using the given RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.deck.shuffle_with(rng);
    }

    /// Performs a balanced out-faro on the hand.
    pub fn out_faro(&mut self) {
        self.deck.out_faro();
    }

    /// Performs a balanced in-faro on the hand.
    pub fn in_faro(&mut self) {
        self.deck.in_faro();
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label.is_empty() {
            write!(f, "Hand of {} cards", self.deck.len())
        } else {
            write!(f, "{} Hand ({} cards)", self.label, self.deck.len())
        }
    }
}
