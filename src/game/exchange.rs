use alloc::vec::Vec;

use rand::Rng;
use tracing::{trace, warn};

use crate::error::RoundError;
use crate::result::Exchange;

use super::{Dealer, GameState};

impl<R: Rng> Dealer<R> {
    /// Lets each player replace a random number of cards.
    ///
    /// Every player, in seating order, draws an exchange count uniformly from
    /// `0..=hand_size`, discards that many random cards, and only then draws the
    /// same number of replacements. A replacement can therefore never be
    /// discarded in the same exchange.
    ///
    /// Returns what each player discarded and drew.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] outside [`GameState::Exchanging`]
    /// and [`RoundError::DeckExhausted`] if the deck runs out of replacements.
    /// Running out ends the game; the dealer is left mid-exchange.
    pub fn exchange_cards(&mut self) -> Result<Vec<Exchange>, RoundError> {
        self.require_state(GameState::Exchanging)?;

        let hand_size = self.options.hand_size;
        let mut exchanges = Vec::with_capacity(self.players.len());

        for (player_index, player) in self.players.iter_mut().enumerate() {
            let count = self.rng.random_range(0..=hand_size);

            let mut discarded = Vec::with_capacity(count);
            for _ in 0..count {
                if let Some(card) = player.discard_random(&mut self.rng) {
                    discarded.push(card);
                }
            }

            let mut drawn = Vec::with_capacity(count);
            for _ in 0..discarded.len() {
                let card = self.deck.deal().inspect_err(|_| {
                    warn!(
                        round = self.round,
                        player = player.name(),
                        "deck exhausted while exchanging"
                    );
                })?;
                player.receive_card(card);
                drawn.push(card);
            }

            trace!(player = player.name(), count, "cards exchanged");
            exchanges.push(Exchange {
                player_index,
                discarded,
                drawn,
            });
        }

        self.state = GameState::Scoring;
        Ok(exchanges)
    }
}
