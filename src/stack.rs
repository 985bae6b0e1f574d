//! Magician stack recipes.

use crate::deck::Deck;
use crate::factory::{Region, new_deck_order};

/// Builds a 52-card deck in the Mnemonica stack.
///
/// The recipe is fixed: start from European new deck order, apply four
/// balanced out-faros, reverse the top 26 cards in place, weave with a
/// partial out-faro that cuts 18 cards for the top packet, and finish with a
/// 9-card cut. Faro shuffles do not commute, so the step order matters.
///
/// The result is deterministic; two calls yield equal decks. The top card is
/// the Four of Clubs and the bottom card the Nine of Diamonds.
#[must_use]
#[expect(
    clippy::missing_panics_doc,
    reason = "the deck holds 52 cards at every step, so the reversal and final cut cannot fail"
)]
pub fn mnemonica_stack() -> Deck {
    let mut deck = new_deck_order(Region::European);
    for _ in 0..4 {
        deck.out_faro();
    }
    deck.cards_mut()[..26].reverse();
    deck.out_faro_split(18, 0);
    deck.cut_at(9).expect("9 is within a 52-card deck");
    deck
}
