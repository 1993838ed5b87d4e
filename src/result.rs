//! Read-only round and game summaries.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::player::Player;

/// A player's hand at the end of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandSummary {
    /// Index of the player in seating order.
    pub player_index: usize,
    /// The player's name.
    pub name: String,
    /// Cards held after the exchange.
    pub cards: Vec<Card>,
    /// Value of the hand.
    pub value: u32,
    /// The player's score after this round was scored.
    pub score: u32,
}

/// Result of a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u32,
    /// Final hands in seating order.
    pub hands: Vec<HandSummary>,
    /// Highest hand value of the round.
    pub high_value: u32,
    /// Index of the player who scored, or `None` if the top value was tied.
    pub round_winner: Option<usize>,
}

/// Cards exchanged by one player during a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    /// Index of the player in seating order.
    pub player_index: usize,
    /// Cards discarded, in discard order.
    pub discarded: Vec<Card>,
    /// Replacement cards, in draw order.
    pub drawn: Vec<Card>,
}

/// A player's name and score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// The player's name.
    pub name: String,
    /// The player's cumulative score.
    pub score: u32,
}

impl From<&Player> for Standing {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().into(),
            score: player.score(),
        }
    }
}

/// Outcome of a completed game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    /// Index of the winning player.
    pub winner_index: usize,
    /// The winner's name and final score.
    pub winner: Standing,
    /// Number of rounds played.
    pub rounds: u32,
}
