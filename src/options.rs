//! Game configuration options.

use crate::card::{STANDARD_RANKS, STANDARD_SUITS};
use crate::error::ConfigError;

/// Score a player must reach to win the game.
pub const WINNING_SCORE: u32 = 10;

/// Player names used by the standard four-player game.
pub const DEFAULT_PLAYERS: [&str; 4] = ["John", "Mary", "Joe", "Amy"];

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use exchange_cards::GameOptions;
///
/// let options = GameOptions::default()
///     .with_suits(2)
///     .with_ranks(10)
///     .with_hand_size(3);
/// assert_eq!(options.deck_size(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of suits in the deck.
    pub suits: u8,
    /// Number of ranks per suit.
    pub ranks: u8,
    /// Number of cards dealt to each player per round.
    pub hand_size: usize,
    /// Score that ends the game.
    pub winning_score: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            suits: STANDARD_SUITS,
            ranks: STANDARD_RANKS,
            hand_size: 5,
            winning_score: WINNING_SCORE,
        }
    }
}

impl GameOptions {
    /// Sets the number of suits.
    ///
    /// # Example
    ///
    /// ```
    /// use exchange_cards::GameOptions;
    ///
    /// let options = GameOptions::default().with_suits(6);
    /// assert_eq!(options.suits, 6);
    /// ```
    #[must_use]
    pub const fn with_suits(mut self, suits: u8) -> Self {
        self.suits = suits;
        self
    }

    /// Sets the number of ranks per suit.
    #[must_use]
    pub const fn with_ranks(mut self, ranks: u8) -> Self {
        self.ranks = ranks;
        self
    }

    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use exchange_cards::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(7);
    /// assert_eq!(options.hand_size, 7);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the score that ends the game.
    #[must_use]
    pub const fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score;
        self
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub const fn deck_size(&self) -> usize {
        self.suits as usize * self.ranks as usize
    }

    /// Checks the options for values that cannot produce a playable game.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyDeck`] if there are no suits or no ranks, and
    /// [`ConfigError::ZeroHandSize`] if no cards would be dealt.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.suits == 0 || self.ranks == 0 {
            return Err(ConfigError::EmptyDeck);
        }
        if self.hand_size == 0 {
            return Err(ConfigError::ZeroHandSize);
        }
        Ok(())
    }
}
