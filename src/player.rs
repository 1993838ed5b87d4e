//! Player state carried across rounds.

use alloc::string::String;

use rand::Rng;

use crate::card::Card;
use crate::hand::Hand;

/// A named player with a hand and a cumulative score.
///
/// The hand is replaced every round; the score persists until the game ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Hand,
    score: u32,
}

impl Player {
    /// Creates a player with an empty hand and a score of zero.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            score: 0,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's current hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the player's cumulative score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Empties the hand at the start of a round.
    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    /// Adds a card to the hand.
    pub fn receive_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Discards a uniformly chosen card from the hand.
    ///
    /// Returns the discarded card, or `None` if the hand is empty.
    pub fn discard_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        self.hand.remove_random(rng)
    }

    /// Returns the value of the current hand.
    #[must_use]
    pub fn hand_value(&self) -> u32 {
        self.hand.value()
    }

    /// Awards one point.
    pub const fn increment_score(&mut self) {
        self.score += 1;
    }
}
