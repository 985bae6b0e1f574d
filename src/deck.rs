//! An ordered deck of cards and its permutation operations.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::{Bound, RangeBounds};

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::error::DeckError;

/// Which balanced weave to perform.
#[derive(Clone, Copy)]
enum FaroKind {
    /// Top and bottom cards stay in place.
    Out,
    /// Top and bottom cards move inward by one.
    In,
}

/// An ordered deck of playing cards.
///
/// Index 0 is the top of the deck and index `len - 1` the bottom. A deck has
/// no uniqueness constraint; Pinochle decks intentionally hold duplicates,
/// and a deck may be empty.
///
/// Two decks are equal iff they hold the same cards in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    /// Cards in the deck, top first.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck from an ordered sequence of cards, top first.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Creates an empty deck.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in the deck, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns mutable access to the cards in the deck.
    ///
    /// The slice can reorder or replace cards but not change the deck's
    /// length; use the deal operations and [`Deck::add_card`] for that.
    #[must_use]
    pub fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Returns the card at `index`, counting from the top of the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not below the deck length.
    pub fn card_at(&self, index: usize) -> Result<Card, DeckError> {
        self.cards
            .get(index)
            .copied()
            .ok_or(DeckError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            })
    }

    /// Returns the display names of the cards in `range`, in current order.
    ///
    /// `deck.names(..)` lists the whole deck; half-open ranges list from the
    /// top or to the bottom. Bounds past the end of the deck clamp to the
    /// deck length.
    #[must_use]
    pub fn names(&self, range: impl RangeBounds<usize>) -> Vec<String> {
        let len = self.cards.len();
        let start = match range.start_bound() {
            Bound::Included(&bound) => bound,
            Bound::Excluded(&bound) => bound.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&bound) => bound.saturating_add(1),
            Bound::Excluded(&bound) => bound,
            Bound::Unbounded => len,
        };
        let start = start.min(len);
        let end = end.min(len).max(start);
        self.cards[start..end].iter().map(Card::name).collect()
    }

    /// Shuffles the deck once with fresh randomness.
    ///
    /// There is no reproducibility contract; use [`Deck::shuffle_with`] with
    /// a seeded RNG when a repeatable order is needed.
    #[cfg(feature = "std")]
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Shuffles the deck `n` times with fresh randomness.
    ///
    /// Each pass is an independent uniform permutation. A no-op on an empty
    /// deck.
    #[cfg(feature = "std")]
    pub fn shuffle_n(&mut self, n: usize) {
        let mut rng = rand::rng();
        self.shuffle_n_with(n, &mut rng);
    }

    /// Shuffles the deck once using the given RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Shuffles the deck `n` times using the given RNG.
    pub fn shuffle_n_with<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) {
        for _ in 0..n {
            self.cards.shuffle(rng);
        }
    }

    /// Cuts the deck in half: the top `len / 2` cards move to the bottom.
    ///
    /// Both halves keep their relative order.
    pub fn cut(&mut self) {
        let half = self.cards.len() / 2;
        self.cards.rotate_left(half);
    }

    /// Cuts `cards_off_top` cards off the top and places them on the bottom.
    ///
    /// Both halves keep their relative order. `0` and the full deck length
    /// are accepted and leave the deck unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if `cards_off_top` exceeds the deck length. The cut
    /// never wraps around; a silently wrapping cut would mask caller bugs.
    pub fn cut_at(&mut self, cards_off_top: usize) -> Result<(), DeckError> {
        let len = self.cards.len();
        if cards_off_top > len {
            return Err(DeckError::CutOutOfRange {
                requested: cards_off_top,
                len,
            });
        }
        self.cards.rotate_left(cards_off_top);
        Ok(())
    }

    /// Deals the top card, or `None` if the deck is empty.
    ///
    /// Running out of cards is an expected condition, not an error.
    pub fn deal_top(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Deals the card on the bottom of the deck, or `None` if the deck is
    /// empty.
    pub fn deal_bottom(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals the second card from the top, keeping the top card in place.
    ///
    /// Returns `None` if the deck holds fewer than two cards.
    pub fn deal_second(&mut self) -> Option<Card> {
        if self.cards.len() < 2 {
            None
        } else {
            Some(self.cards.remove(1))
        }
    }

    /// Adds a card to the bottom of the deck.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Stable-sorts the deck by rank ordinal, ascending.
    pub fn sort(&mut self) {
        self.cards.sort_by_key(|card| card.rank);
    }

    /// Stable-sorts the deck by a caller-supplied key.
    ///
    /// With `reverse` set the sort is descending; cards with equal keys keep
    /// their original relative order either way.
    pub fn sort_by_key<K, F>(&mut self, key: F, reverse: bool)
    where
        K: Ord,
        F: Fn(&Card) -> K,
    {
        if reverse {
            self.cards.sort_by(|a, b| key(b).cmp(&key(a)));
        } else {
            self.cards.sort_by(|a, b| key(a).cmp(&key(b)));
        }
    }

    /// Performs a balanced out-faro shuffle.
    ///
    /// An out-faro is a perfect weave of the two halves of the deck,
    /// alternating one card at a time, with the original top and bottom
    /// cards staying on the top and bottom. On an odd-length deck one half
    /// carries one more card than the other and the weave follows the same
    /// index rule, which leaves one card doubled adjacent in the result.
    pub fn out_faro(&mut self) {
        self.weave_balanced(FaroKind::Out);
    }

    /// Performs a balanced in-faro shuffle.
    ///
    /// An in-faro is a perfect weave of the two halves of the deck with the
    /// original top and bottom cards each moving inward by one position.
    pub fn in_faro(&mut self) {
        self.weave_balanced(FaroKind::In);
    }

    /// Performs an out-faro with an explicit split; the top packet leads the
    /// weave.
    ///
    /// `cards_on_top` cards are taken from the current top of the deck and
    /// `cards_on_bottom` from the current bottom. A zero argument is
    /// computed as the rest of the deck, and both zero falls back to the
    /// balanced weave. The packets may overlap in original positions when
    /// they sum past the deck length; that is intentional, modeling a riffle
    /// where the performer can cut the same middle cards into either packet.
    /// The deck afterwards holds one card per packet element, which may
    /// differ from the original length.
    pub fn out_faro_split(&mut self, cards_on_top: usize, cards_on_bottom: usize) {
        self.weave_split(cards_on_top, cards_on_bottom, FaroKind::Out);
    }

    /// Performs an in-faro with an explicit split; the bottom packet leads
    /// the weave.
    ///
    /// See [`Deck::out_faro_split`] for the packet rules.
    pub fn in_faro_split(&mut self, cards_on_top: usize, cards_on_bottom: usize) {
        self.weave_split(cards_on_top, cards_on_bottom, FaroKind::In);
    }

    /// Weaves the deck per the balanced faro index rule: a card at `i` moves
    /// to `2i` (out) or `2i + 1` (in), adjusted by +1 (out) or -1 (in) and
    /// reduced modulo the length once the doubled index reaches the length.
    fn weave_balanced(&mut self, kind: FaroKind) {
        let len = self.cards.len();
        if len < 2 {
            return;
        }

        // Start from a copy of the current order: on even lengths every
        // position is written exactly once; on odd lengths the unwritten
        // positions keep their original cards.
        let mut woven = self.cards.clone();
        for (i, &card) in self.cards.iter().enumerate() {
            let mut position = match kind {
                FaroKind::Out => 2 * i,
                FaroKind::In => 2 * i + 1,
            };
            if position >= len {
                match kind {
                    FaroKind::Out => position += 1,
                    FaroKind::In => position -= 1,
                }
                position %= len;
            }
            woven[position] = card;
        }
        self.cards = woven;
    }

    fn weave_split(&mut self, cards_on_top: usize, cards_on_bottom: usize, kind: FaroKind) {
        if (cards_on_top, cards_on_bottom) == (0, 0) {
            self.weave_balanced(kind);
            return;
        }

        let len = self.cards.len();
        let mut on_top = cards_on_top;
        let mut on_bottom = cards_on_bottom;
        if on_bottom == 0 {
            on_bottom = len.saturating_sub(on_top);
        } else if on_top == 0 {
            on_top = len.saturating_sub(on_bottom);
        }
        let on_top = on_top.min(len);
        let on_bottom = on_bottom.min(len);

        let top_packet = &self.cards[..on_top];
        let bottom_packet = &self.cards[len - on_bottom..];
        let (lead, trail) = match kind {
            FaroKind::Out => (top_packet, bottom_packet),
            FaroKind::In => (bottom_packet, top_packet),
        };

        let rounds = lead.len().max(trail.len());
        let mut woven = Vec::with_capacity(on_top + on_bottom);
        for i in 0..rounds {
            // Explicit exhaustion checks: a shorter packet simply stops
            // contributing once its cards run out.
            if let Some(&card) = lead.get(i) {
                woven.push(card);
            }
            if let Some(&card) = trail.get(i) {
                woven.push(card);
            }
        }
        self.cards = woven;
    }

    /// Prints each card's index and display name, one per line.
    ///
    /// A debugging and demo aid, not a stable format.
    #[cfg(feature = "std")]
    pub fn print_cards(&self) {
        for (i, card) in self.cards.iter().enumerate() {
            println!("{i} {card}");
        }
    }
}
