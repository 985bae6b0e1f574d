//! CLI deck demo: prints new-deck orders, the Mnemonica stack, and a dealt
//! Euchre hand.

#![allow(clippy::missing_docs_in_private_items)]

use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use farodeck::{Hand, Region, euchre_deck, mnemonica_stack, new_deck_order};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    let region = match std::env::args().nth(1) {
        Some(arg) => match Region::from_str(&arg) {
            Ok(region) => region,
            Err(err) => {
                eprintln!("{err}");
                return;
            }
        },
        None => Region::Us,
    };

    println!("A deck of playing cards in {region:?} new deck order:\n");
    new_deck_order(region).print_cards();

    println!("\nThe Mnemonica stack:\n");
    mnemonica_stack().print_cards();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut deck = euchre_deck();
    deck.shuffle_with(&mut rng);
    deck.cut();

    let mut hand = Hand::new("South");
    for _ in 0..5 {
        if let Some(card) = deck.deal_top() {
            hand.add_card(card);
        }
    }
    hand.sort();

    println!("\n{hand}:\n");
    hand.deck().print_cards();
}
