//! Game state types.

/// Phase of the round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the first round to start.
    AwaitingRound,
    /// Hands are cleared and the deck is shuffled; cards are about to be dealt.
    Dealing,
    /// Players are exchanging cards.
    Exchanging,
    /// Hands are being compared.
    Scoring,
    /// The round has been scored and the next one may start.
    RoundComplete,
    /// A player reached the winning score.
    GameWon,
}
