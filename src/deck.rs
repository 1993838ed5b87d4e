//! The shared deck dealt from each round.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::error::DeckError;

/// An ordered deck of cards with a cursor pointing at the next card to deal.
///
/// Dealing never removes cards; it only advances the cursor. Shuffling
/// permutes the full sequence and rewinds the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in deck order.
    cards: Vec<Card>,
    /// Index of the next card to deal.
    cursor: usize,
}

impl Deck {
    /// Creates a deck holding one card for every suit and rank combination.
    ///
    /// Cards are laid out suit-major: all ranks of suit 0, then suit 1, and so on.
    ///
    /// # Example
    ///
    /// ```
    /// use exchange_cards::{Card, Deck};
    ///
    /// let deck = Deck::new(4, 13);
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.cards()[13], Card::new(1, 0));
    /// ```
    #[must_use]
    pub fn new(suits: u8, ranks: u8) -> Self {
        let mut cards = Vec::with_capacity(usize::from(suits) * usize::from(ranks));

        for suit in 0..suits {
            for rank in 0..ranks {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards, cursor: 0 }
    }

    /// Shuffles every card in the deck and rewinds the cursor.
    ///
    /// Cards already dealt are shuffled back in. Each position `i` from 1 upwards
    /// is swapped with a uniformly chosen position in `0..=i`, which yields every
    /// ordering with equal probability.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in 1..self.cards.len() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }

        self.cursor = 0;
    }

    /// Deals the card under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if every card has been dealt.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        let card = *self.cards.get(self.cursor).ok_or(DeckError::Exhausted)?;
        self.cursor += 1;
        Ok(card)
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cursor == self.cards.len()
    }

    /// Returns the total number of cards, dealt or not.
    ///
    /// This does not shrink as cards are dealt, so a deck can report a
    /// non-zero length while [`Deck::is_empty`] is `true`. Use
    /// [`Deck::remaining`] for the undealt count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Returns the cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
