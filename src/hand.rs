//! Hand representation and evaluation.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;

/// The cards a player holds during a round.
///
/// Order does not affect the value of the hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes a uniformly chosen card and returns it.
    ///
    /// Returns `None` if the hand is empty.
    pub fn remove_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }

        let index = rng.random_range(0..self.cards.len());
        Some(self.cards.remove(index))
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// ```
    /// use exchange_cards::{Card, Hand};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(0, 0));
    /// hand.add_card(Card::new(1, 5));
    /// assert_eq!(hand.value(), 16);
    /// ```
    #[must_use]
    pub fn value(&self) -> u32 {
        self.cards.iter().map(Card::value).sum()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
