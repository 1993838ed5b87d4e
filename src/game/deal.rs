use rand::Rng;
use tracing::warn;

use crate::error::RoundError;

use super::{Dealer, GameState};

impl<R: Rng> Dealer<R> {
    /// Deals `hand_size` cards to each player in seating order.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] outside [`GameState::Dealing`] and
    /// [`RoundError::DeckExhausted`] if the deck runs out. Running out ends the
    /// game; the dealer is left mid-deal.
    pub fn deal_cards(&mut self) -> Result<(), RoundError> {
        self.require_state(GameState::Dealing)?;

        let hand_size = self.options.hand_size;
        for player in &mut self.players {
            for _ in 0..hand_size {
                let card = self.deck.deal().inspect_err(|_| {
                    warn!(
                        round = self.round,
                        player = player.name(),
                        "deck exhausted while dealing"
                    );
                })?;
                player.receive_card(card);
            }
        }

        self.state = GameState::Exchanging;
        Ok(())
    }
}
