//! A multi-round card exchange game engine with optional `no_std` support.
//!
//! A [`Dealer`] shuffles a shared [`Deck`], deals a hand to every [`Player`],
//! lets each player exchange a random number of cards, and awards a point to
//! the single player holding the highest hand. The first player to reach the
//! winning score wins the game.
//!
//! # Example
//!
//! ```
//! use exchange_cards::{DEFAULT_PLAYERS, Dealer, GameOptions};
//!
//! let mut dealer = Dealer::new(GameOptions::default(), DEFAULT_PLAYERS, 42).unwrap();
//! let outcome = dealer.play_until_winner(10_000).unwrap();
//! assert!(outcome.winner.score >= 10);
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
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, STANDARD_RANKS, STANDARD_SUITS};
pub use deck::Deck;
pub use error::{ConfigError, DeckError, RoundError};
pub use game::{Dealer, GameState, round_winner};
pub use hand::Hand;
pub use options::{DEFAULT_PLAYERS, GameOptions, WINNING_SCORE};
pub use player::Player;
pub use result::{Exchange, GameOutcome, HandSummary, RoundResult, Standing};
