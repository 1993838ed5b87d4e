use alloc::vec::Vec;

use rand::Rng;
use tracing::{debug, info};

use crate::error::RoundError;
use crate::player::Player;
use crate::result::{HandSummary, RoundResult};

use super::{Dealer, GameState};

/// Returns the index of the single highest value.
///
/// Returns `None` if `values` is empty or two or more entries share the
/// highest value.
///
/// ```
/// use exchange_cards::round_winner;
///
/// assert_eq!(round_winner(&[12, 18, 15, 10]), Some(1));
/// assert_eq!(round_winner(&[12, 15, 15, 10]), None);
/// ```
#[must_use]
pub fn round_winner(values: &[u32]) -> Option<usize> {
    let high = *values.iter().max()?;
    let mut leaders = values
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value == high)
        .map(|(index, _)| index);

    let first = leaders.next()?;
    leaders.next().is_none().then_some(first)
}

impl<R: Rng> Dealer<R> {
    /// Scores the round.
    ///
    /// The player holding the single highest hand gains one point. If the top
    /// value is shared, nobody scores.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] outside [`GameState::Scoring`].
    pub fn score_round(&mut self) -> Result<RoundResult, RoundError> {
        self.require_state(GameState::Scoring)?;

        let values: Vec<u32> = self.players.iter().map(Player::hand_value).collect();
        let high_value = values.iter().copied().max().unwrap_or(0);
        let winner = round_winner(&values);

        match winner.and_then(|index| self.players.get_mut(index)) {
            Some(player) => {
                player.increment_score();
                info!(
                    round = self.round,
                    player = player.name(),
                    value = high_value,
                    score = player.score(),
                    "round won"
                );
            }
            None => debug!(round = self.round, value = high_value, "round tied"),
        }

        let hands = self
            .players
            .iter()
            .zip(values)
            .enumerate()
            .map(|(player_index, (player, value))| HandSummary {
                player_index,
                name: player.name().into(),
                cards: player.hand().cards().to_vec(),
                value,
                score: player.score(),
            })
            .collect();

        self.state = GameState::RoundComplete;

        Ok(RoundResult {
            round: self.round,
            hands,
            high_value,
            round_winner: winner,
        })
    }
}
