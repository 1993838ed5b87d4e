//! Deck, hand, and player tests.

use std::collections::{HashMap, HashSet};

use exchange_cards::{Card, Deck, DeckError, Hand, Player};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn sorted(cards: &[Card]) -> Vec<Card> {
    let mut cards = cards.to_vec();
    cards.sort_unstable();
    cards
}

#[test]
fn new_deck_is_suit_major_and_unique() {
    let deck = Deck::new(4, 13);
    assert_eq!(deck.len(), 52);
    assert_eq!(deck.remaining(), 52);
    assert!(!deck.is_empty());

    assert_eq!(deck.cards()[0], Card::new(0, 0));
    assert_eq!(deck.cards()[12], Card::new(0, 12));
    assert_eq!(deck.cards()[13], Card::new(1, 0));
    assert_eq!(deck.cards()[51], Card::new(3, 12));

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), 52);
}

#[test]
fn deal_walks_deck_then_fails() {
    let mut deck = Deck::new(2, 3);
    let expected = deck.cards().to_vec();

    let dealt: Vec<Card> = (0..6).map(|_| deck.deal().unwrap()).collect();
    assert_eq!(dealt, expected);
    assert!(deck.is_empty());
    assert_eq!(deck.remaining(), 0);
    assert_eq!(deck.len(), 6);

    assert_eq!(deck.deal().unwrap_err(), DeckError::Exhausted);
    assert_eq!(deck.deal().unwrap_err(), DeckError::Exhausted);
}

#[test]
fn shuffle_keeps_cards_and_rewinds() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::new(4, 13);
    let original = sorted(deck.cards());

    for _ in 0..10 {
        deck.deal().unwrap();
    }
    assert_eq!(deck.remaining(), 42);

    deck.shuffle(&mut rng);
    assert_eq!(deck.len(), 52);
    assert_eq!(deck.remaining(), 52);
    assert_eq!(sorted(deck.cards()), original);

    let shuffled = deck.cards().to_vec();
    let dealt: Vec<Card> = (0..52).map(|_| deck.deal().unwrap()).collect();
    assert_eq!(dealt, shuffled);
}

#[test]
fn shuffle_is_deterministic_for_a_seed() {
    let mut first = Deck::new(4, 13);
    let mut second = Deck::new(4, 13);
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(11));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(11));
    assert_eq!(first, second);
    assert_ne!(first.cards(), Deck::new(4, 13).cards());
}

#[test]
fn shuffle_covers_every_ordering_evenly() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut counts: HashMap<Vec<Card>, usize> = HashMap::new();

    for _ in 0..6000 {
        let mut deck = Deck::new(1, 3);
        deck.shuffle(&mut rng);
        *counts.entry(deck.cards().to_vec()).or_default() += 1;
    }

    assert_eq!(counts.len(), 6);
    for count in counts.values() {
        assert!((800..=1200).contains(count), "skewed count {count}");
    }
}

#[test]
fn single_card_deck_shuffles_in_place() {
    let mut deck = Deck::new(1, 1);
    deck.deal().unwrap();
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(0));
    assert_eq!(deck.cards(), &[Card::new(0, 0)]);
    assert_eq!(deck.remaining(), 1);
}

#[test]
fn aces_and_top_ranks_count_ten() {
    let mut hand = Hand::new();
    for (suit, rank) in [(0, 0), (1, 9), (2, 10), (3, 11), (0, 12)] {
        hand.add_card(Card::new(suit, rank));
    }
    assert_eq!(hand.value(), 50);
}

#[test]
fn low_ranks_count_rank_plus_one() {
    let mut hand = Hand::new();
    for rank in 1..=8 {
        hand.add_card(Card::new(rank % 4, rank));
    }
    assert_eq!(hand.value(), 44);
    assert_eq!(Card::new(0, 1).value(), 2);
    assert_eq!(Card::new(0, 8).value(), 9);
}

#[test]
fn empty_hand_is_worth_nothing() {
    let hand = Hand::new();
    assert!(hand.is_empty());
    assert_eq!(hand.value(), 0);
}

#[test]
fn player_discards_a_held_card() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut player = Player::new("Mary");
    let cards = [Card::new(0, 1), Card::new(1, 2), Card::new(2, 3)];
    for card in cards {
        player.receive_card(card);
    }
    assert_eq!(player.hand_value(), 2 + 3 + 4);

    let discarded = player.discard_random(&mut rng).unwrap();
    assert!(cards.contains(&discarded));
    assert_eq!(player.hand().len(), 2);
    assert!(!player.hand().cards().contains(&discarded));

    player.clear_hand();
    assert!(player.hand().is_empty());
    assert_eq!(player.discard_random(&mut rng), None);
}

#[test]
fn player_score_accumulates() {
    let mut player = Player::new("Joe");
    assert_eq!(player.name(), "Joe");
    assert_eq!(player.score(), 0);

    player.increment_score();
    player.increment_score();
    player.clear_hand();
    assert_eq!(player.score(), 2);
}
