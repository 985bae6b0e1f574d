//! A playing card deck engine built around faro-shuffle and cut algebra.
//!
//! The crate models a [`Deck`] of [`Card`]s with the permutation operations
//! used to construct specific orderings: cuts, balanced and explicit-split
//! faro weaves, random shuffles, and deals. Factories build common starting
//! orders (new deck order, Euchre, Pinochle), and [`mnemonica_stack`] builds
//! a full magician's stack by composing them.
//!
//! # Example
//!
//! ```
//! use farodeck::{Region, new_deck_order};
//!
//! // Eight perfect out-faros return a 52-card deck to its original order.
//! let mut deck = new_deck_order(Region::Us);
//! for _ in 0..8 {
//!     deck.out_faro();
//! }
//! assert_eq!(deck, new_deck_order(Region::Us));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod factory;
pub mod hand;
pub mod stack;

// Re-export main types
pub use card::{Card, DECK_SIZE, RankModel, Suit};
pub use deck::Deck;
pub use error::{CardError, DeckError, ParseRegionError};
pub use factory::{Region, euchre_deck, new_deck_order, pinochle_deck};
pub use hand::Hand;
pub use stack::mnemonica_stack;
