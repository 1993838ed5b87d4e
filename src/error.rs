//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while configuring a dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Fewer than two players were supplied.
    #[error("at least 2 players are needed, got {count}")]
    NotEnoughPlayers {
        /// Number of players supplied.
        count: usize,
    },
    /// Hand size is zero.
    #[error("hand size is zero")]
    ZeroHandSize,
    /// Suit or rank count is zero.
    #[error("deck has no cards")]
    EmptyDeck,
}

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Every card has already been dealt.
    #[error("no cards left in the deck")]
    Exhausted,
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid game state for this phase.
    #[error("invalid game state for this phase")]
    InvalidState,
    /// A winner has already been decided.
    #[error("the game already has a winner")]
    GameOver,
    /// The deck ran out of cards during dealing or exchange.
    #[error("ran out of cards in the deck")]
    DeckExhausted,
    /// No winner emerged within the allowed number of rounds.
    #[error("no winner after {rounds} rounds")]
    RoundLimit {
        /// Rounds played.
        rounds: u32,
    },
}

impl From<DeckError> for RoundError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Exhausted => Self::DeckExhausted,
        }
    }
}
