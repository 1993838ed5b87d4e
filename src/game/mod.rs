//! Dealer state machine driving rounds of the exchange game.

use alloc::string::String;
use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::deck::Deck;
use crate::error::{ConfigError, RoundError};
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{GameOutcome, RoundResult, Standing};

mod deal;
mod exchange;
mod scoring;
pub mod state;

pub use scoring::round_winner;
pub use state::GameState;

/// Drives players and a shared deck through rounds until someone wins.
///
/// Each round clears every hand, shuffles the deck, deals a fixed number of
/// cards to every player, lets each player exchange some of them, and awards
/// a point to the single player holding the highest hand. The game ends once a
/// player reaches [`GameOptions::winning_score`].
///
/// The dealer owns its random source. [`Dealer::new`] seeds a [`ChaCha8Rng`];
/// [`Dealer::with_rng`] accepts any [`Rng`].
#[derive(Debug, Clone)]
pub struct Dealer<R = ChaCha8Rng> {
    /// The shared deck.
    deck: Deck,
    /// Players in seating order.
    players: Vec<Player>,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Index of the winning player once the game is won.
    winner: Option<usize>,
    /// Number of rounds started.
    round: u32,
    /// Random number generator.
    rng: R,
}

impl Dealer {
    /// Creates a new dealer with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use exchange_cards::{DEFAULT_PLAYERS, Dealer, GameOptions};
    ///
    /// let dealer = Dealer::new(GameOptions::default(), DEFAULT_PLAYERS, 42).unwrap();
    /// assert_eq!(dealer.players().len(), 4);
    /// ```
    ///
    /// # Errors
    ///
    /// See [`Dealer::with_rng`].
    pub fn new<I, S>(options: GameOptions, names: I, seed: u64) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_rng(options, names, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Dealer<R> {
    /// Creates a new dealer that draws randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotEnoughPlayers`] if fewer than two names are
    /// given, or the error reported by [`GameOptions::validate`].
    pub fn with_rng<I, S>(options: GameOptions, names: I, rng: R) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vec<Player> = names.into_iter().map(Player::new).collect();
        if players.len() < 2 {
            return Err(ConfigError::NotEnoughPlayers {
                count: players.len(),
            });
        }
        options.validate()?;

        Ok(Self {
            deck: Deck::new(options.suits, options.ranks),
            players,
            options,
            state: GameState::AwaitingRound,
            winner: None,
            round: 0,
            rng,
        })
    }

    /// Plays one full round and then checks for a game winner.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::GameOver`] once a winner exists,
    /// [`RoundError::InvalidState`] if a round is already in progress, and
    /// [`RoundError::DeckExhausted`] if the deck cannot supply the round.
    pub fn play(&mut self) -> Result<RoundResult, RoundError> {
        self.start_round()?;
        self.deal_cards()?;
        self.exchange_cards()?;
        let result = self.score_round()?;
        self.check_winner();
        Ok(result)
    }

    /// Plays rounds until a player reaches the winning score.
    ///
    /// At most `max_rounds` rounds are played by this call.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::RoundLimit`] if nobody has won after `max_rounds`
    /// rounds, or any error raised by [`Dealer::play`].
    pub fn play_until_winner(&mut self, max_rounds: u32) -> Result<GameOutcome, RoundError> {
        let mut played = 0;
        loop {
            if let Some(winner_index) = self.check_winner() {
                let winner = Standing::from(&self.players[winner_index]);
                return Ok(GameOutcome {
                    winner_index,
                    winner,
                    rounds: self.round,
                });
            }
            if played == max_rounds {
                return Err(RoundError::RoundLimit { rounds: played });
            }
            self.play()?;
            played += 1;
        }
    }

    /// Clears every hand and shuffles the deck, moving to [`GameState::Dealing`].
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::GameOver`] once a winner exists, or
    /// [`RoundError::InvalidState`] if a round is already in progress.
    pub fn start_round(&mut self) -> Result<(), RoundError> {
        match self.state {
            GameState::AwaitingRound | GameState::RoundComplete => {}
            GameState::GameWon => return Err(RoundError::GameOver),
            _ => return Err(RoundError::InvalidState),
        }

        for player in &mut self.players {
            player.clear_hand();
        }
        self.deck.shuffle(&mut self.rng);
        self.round += 1;
        self.state = GameState::Dealing;

        debug!(round = self.round, cards = self.deck.len(), "deck shuffled");
        Ok(())
    }

    /// Returns the first player, in seating order, whose score has reached the
    /// winning score.
    ///
    /// The first match is recorded as the game winner and the game moves to
    /// [`GameState::GameWon`].
    pub fn check_winner(&mut self) -> Option<usize> {
        if self.winner.is_some() {
            return self.winner;
        }

        let target = self.options.winning_score;
        let index = self.players.iter().position(|p| p.score() >= target)?;

        self.winner = Some(index);
        self.state = GameState::GameWon;
        info!(
            winner = self.players[index].name(),
            score = self.players[index].score(),
            rounds = self.round,
            "game won"
        );

        Some(index)
    }

    /// Fails unless the game is in `expected`.
    fn require_state(&self, expected: GameState) -> Result<(), RoundError> {
        match self.state {
            state if state == expected => Ok(()),
            GameState::GameWon => Err(RoundError::GameOver),
            _ => Err(RoundError::InvalidState),
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of rounds started so far.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns the players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns every player's name and score in seating order.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        self.players.iter().map(Standing::from).collect()
    }

    /// Returns the index of the game winner, if decided.
    #[must_use]
    pub const fn winner_index(&self) -> Option<usize> {
        self.winner
    }

    /// Returns the game winner's name and score, if decided.
    #[must_use]
    pub fn winner(&self) -> Option<Standing> {
        self.winner
            .and_then(|index| self.players.get(index))
            .map(Standing::from)
    }
}
