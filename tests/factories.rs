//! Factory, stack, and hand integration tests.

use std::str::FromStr;

use farodeck::{
    Card, Deck, Hand, ParseRegionError, Region, Suit, euchre_deck, mnemonica_stack, new_deck_order,
    pinochle_deck,
};

/// Sorts a deck into a canonical suit-then-rank order for permutation
/// comparisons.
fn canonical(deck: &Deck) -> Deck {
    let mut sorted = deck.clone();
    sorted.sort_by_key(|card| (card.suit.index(), card.rank), false);
    sorted
}

#[test]
fn us_new_deck_order() {
    let deck = new_deck_order(Region::Us);
    assert_eq!(deck.len(), 52);
    assert_eq!(deck.card_at(0).unwrap().name(), "Ace of Hearts");
    assert_eq!(deck.card_at(12).unwrap().name(), "King of Hearts");
    assert_eq!(deck.card_at(13).unwrap().name(), "Ace of Clubs");
    // The back half runs descending.
    assert_eq!(deck.card_at(26).unwrap().name(), "King of Diamonds");
    assert_eq!(deck.card_at(51).unwrap().name(), "Ace of Spades");
}

#[test]
fn european_new_deck_order() {
    let deck = new_deck_order(Region::European);
    assert_eq!(deck.len(), 52);
    assert_eq!(deck.card_at(0).unwrap().name(), "Ace of Spades");
    assert_eq!(deck.card_at(13).unwrap().name(), "Ace of Hearts");
    assert_eq!(deck.card_at(26).unwrap().name(), "King of Diamonds");
    assert_eq!(deck.card_at(51).unwrap().name(), "Ace of Clubs");
}

#[test]
fn region_parses_case_insensitively() {
    assert_eq!(Region::from_str("US").unwrap(), Region::Us);
    assert_eq!(Region::from_str("us").unwrap(), Region::Us);
    assert_eq!(Region::from_str("European").unwrap(), Region::European);
    assert_eq!(Region::from_str("EUROPEAN").unwrap(), Region::European);
    assert_eq!(Region::from_str("Martian").unwrap_err(), ParseRegionError);
}

#[test]
fn euchre_deck_ranges() {
    let deck = euchre_deck();
    assert_eq!(deck.len(), 24);

    // Nine to King plus Ace; nothing between Two and Eight.
    for card in deck.cards() {
        assert!(
            card.rank == 1 || (9..=13).contains(&card.rank),
            "unexpected rank {} in a Euchre deck",
            card.rank
        );
    }
    for suit in Suit::ALL {
        assert!(deck.cards().contains(&Card::new(suit, 1)));
        assert!(deck.cards().contains(&Card::new(suit, 9)));
    }
}

#[test]
fn pinochle_deck_doubles_every_euchre_card() {
    let deck = pinochle_deck();
    assert_eq!(deck.len(), 48);

    for card in euchre_deck().cards() {
        let copies = deck.cards().iter().filter(|held| *held == card).count();
        assert_eq!(copies, 2, "{card} should appear exactly twice");
    }
    // The copies sit adjacent, straight off the press.
    for pair in deck.cards().chunks(2) {
        assert_eq!(pair[0], pair[1]);
    }
}

#[test]
fn mnemonica_stack_is_deterministic() {
    assert_eq!(mnemonica_stack(), mnemonica_stack());
}

#[test]
fn mnemonica_stack_matches_known_positions() {
    let deck = mnemonica_stack();
    assert_eq!(deck.len(), 52);
    assert_eq!(deck.card_at(0).unwrap().name(), "Four of Clubs");
    assert_eq!(deck.card_at(1).unwrap().name(), "Two of Hearts");
    assert_eq!(deck.card_at(2).unwrap().name(), "Seven of Diamonds");
    assert_eq!(deck.card_at(25).unwrap().name(), "King of Diamonds");
    assert_eq!(deck.card_at(51).unwrap().name(), "Nine of Diamonds");

    // The stack is a permutation of a full deck.
    assert_eq!(canonical(&deck), canonical(&new_deck_order(Region::Us)));
}

#[test]
fn hand_starts_empty_and_delegates_deck_operations() {
    let mut hand = Hand::new("North");
    assert!(hand.is_empty());
    assert_eq!(hand.label(), "North");
    assert_eq!(hand.deal_top(), None);

    // The whole Clubs run: Nine through King, then the Ace.
    let mut deck = euchre_deck();
    for _ in 0..6 {
        if let Some(card) = deck.deal_top() {
            hand.add_card(card);
        }
    }
    assert_eq!(hand.len(), 6);
    assert_eq!(hand.card_at(0).unwrap().name(), "Nine of Clubs");
    assert_eq!(hand.names(..4).len(), 4);

    hand.sort();
    assert_eq!(hand.card_at(0).unwrap().rank, 1);

    hand.cut_at(2).unwrap();
    assert_eq!(hand.card_at(0).unwrap().rank, 10);

    // The full deck surface stays reachable through the inner deck.
    hand.deck_mut().out_faro();
    assert_eq!(hand.len(), 6);
    assert_eq!(hand.deal_bottom().map(|card| card.rank), Some(9));
}

#[test]
fn hand_display_with_and_without_label() {
    let mut hand = Hand::new("South");
    hand.add_card(Card::new(Suit::Hearts, 1));
    hand.add_card(Card::new(Suit::Hearts, 2));
    assert_eq!(hand.to_string(), "South Hand (2 cards)");

    let hand = Hand::unlabeled();
    assert_eq!(hand.to_string(), "Hand of 0 cards");
}
