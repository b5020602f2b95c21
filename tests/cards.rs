//! Card, deck, and hand tests.

use std::collections::HashSet;

use blackjack_round::{
    Card, DECK_SIZE, DealerHand, Deck, DeckError, EmptyDeckError, Hand, Rank, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn hand_of(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new();
    for (index, &rank) in ranks.iter().enumerate() {
        hand.add_card(card(Suit::ALL[index % Suit::ALL.len()], rank));
    }
    hand
}

fn sorted(cards: &[Card]) -> Vec<Card> {
    let mut cards = cards.to_vec();
    cards.sort();
    cards
}

#[test]
fn new_deck_has_every_card_once_in_order() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    assert_eq!(deck.cards()[0], card(Suit::Spades, Rank::Ace));
    assert_eq!(deck.cards()[12], card(Suit::Spades, Rank::King));
    assert_eq!(deck.cards()[13], card(Suit::Hearts, Rank::Ace));
    assert_eq!(deck.cards()[51], card(Suit::Clubs, Rank::King));
    assert_eq!(sorted(deck.cards()), deck.cards());
}

#[test]
fn shuffle_is_a_permutation() {
    let mut deck = Deck::new();
    let before = sorted(deck.cards());

    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(3));

    assert_eq!(deck.len(), DECK_SIZE);
    assert_ne!(deck.cards(), Deck::new().cards());
    assert_eq!(sorted(deck.cards()), before);
}

#[test]
fn shuffle_is_deterministic_for_a_seed() {
    let mut first = Deck::new();
    let mut second = Deck::new();
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(11));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(11));
    assert_eq!(first, second);
}

#[test]
fn draw_takes_from_the_front() {
    let mut deck = Deck::new();
    let drawn = deck.draw().unwrap();

    assert_eq!(drawn, card(Suit::Spades, Rank::Ace));
    assert_eq!(deck.len(), DECK_SIZE - 1);
    assert!(!deck.cards().contains(&drawn));
    assert_eq!(deck.cards()[0], card(Suit::Spades, Rank::Two));
}

#[test]
fn draw_on_empty_deck_fails() {
    let mut deck = Deck::from_cards(vec![card(Suit::Hearts, Rank::Five)]).unwrap();
    assert_eq!(deck.draw().unwrap(), card(Suit::Hearts, Rank::Five));
    assert!(deck.is_empty());
    assert_eq!(deck.draw().unwrap_err(), EmptyDeckError);

    let mut full = Deck::new();
    for _ in 0..DECK_SIZE {
        full.draw().unwrap();
    }
    assert_eq!(full.draw(), Err(EmptyDeckError));
}

#[test]
fn stacked_deck_rejects_duplicates() {
    let err = Deck::from_cards(vec![
        card(Suit::Hearts, Rank::Five),
        card(Suit::Clubs, Rank::Five),
        card(Suit::Hearts, Rank::Five),
    ])
    .unwrap_err();
    assert_eq!(err, DeckError::DuplicateCard(card(Suit::Hearts, Rank::Five)));
}

#[test]
fn ace_then_king_is_21() {
    let hand = hand_of(&[Rank::Ace, Rank::King]);
    assert_eq!(hand.value(), 21);
    assert!(hand.is_soft());
    assert!(!hand.is_bust());
}

#[test]
fn late_ace_counts_as_one() {
    let hand = hand_of(&[Rank::King, Rank::Queen, Rank::Ace]);
    assert_eq!(hand.value(), 21);
    assert!(!hand.is_soft());
}

#[test]
fn two_aces_and_nine_is_21() {
    let hand = hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]);
    assert_eq!(hand.value(), 21);
    assert!(hand.is_soft());
}

#[test]
fn ace_order_does_not_change_value() {
    assert_eq!(hand_of(&[Rank::Nine, Rank::Ace, Rank::Ace]).value(), 21);
    assert_eq!(hand_of(&[Rank::Five, Rank::Ace]).value(), 16);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Five]).value(), 16);

    // Soft 16 turns hard once a big card lands.
    let hand = hand_of(&[Rank::Ace, Rank::Five, Rank::Nine]);
    assert_eq!(hand.value(), 15);
    assert!(!hand.is_soft());

    let hand = hand_of(&[Rank::Ace, Rank::Five, Rank::Six]);
    assert_eq!(hand.value(), 12);
    assert!(!hand.is_bust());
}

#[test]
fn ten_nine_five_is_bust() {
    let hand = hand_of(&[Rank::Ten, Rank::Nine, Rank::Five]);
    assert_eq!(hand.value(), 24);
    assert!(hand.is_bust());
}

#[test]
fn face_cards_are_worth_ten() {
    assert_eq!(hand_of(&[Rank::Jack, Rank::Queen]).value(), 20);
    assert_eq!(hand_of(&[Rank::King, Rank::Two]).value(), 12);
    assert_eq!(Hand::new().value(), 0);
}

#[test]
fn dealer_hole_card_is_hidden_until_revealed() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Suit::Hearts, Rank::Ace));
    dealer.add_card(card(Suit::Clubs, Rank::Six));

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_cards(), &[card(Suit::Clubs, Rank::Six)]);
    assert_eq!(dealer.up_card(), Some(&card(Suit::Clubs, Rank::Six)));
    assert_eq!(dealer.visible_value(), 6);
    assert_eq!(dealer.value(), 17);

    dealer.reveal_hole();
    assert_eq!(dealer.visible_cards().len(), 2);
    assert_eq!(dealer.visible_value(), 17);
    assert!(dealer.is_soft());
}

#[test]
fn card_display() {
    let ace = card(Suit::Spades, Rank::Ace);
    assert_eq!(ace.to_string(), "Ace of Spades");
    assert_eq!(ace.short().to_string(), "AS");
    assert_eq!(card(Suit::Diamonds, Rank::Queen).short().to_string(), "QD");
}
