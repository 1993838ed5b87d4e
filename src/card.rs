//! Card type and deck dimensions.

/// Number of suits in a standard deck.
pub const STANDARD_SUITS: u8 = 4;

/// Number of ranks per suit in a standard deck.
pub const STANDARD_RANKS: u8 = 13;

/// A playing card.
///
/// Suits and ranks are opaque zero-based indices so that decks with any
/// number of suits and ranks can be built. In a standard deck rank 0 is the
/// ace and ranks 10 through 12 are the jack, queen and king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    /// The suit index of the card.
    pub suit: u8,
    /// The rank index of the card.
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: u8, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the scoring value of the card.
    ///
    /// Rank 0 and every rank from 9 upwards count 10; the remaining ranks
    /// count `rank + 1`.
    ///
    /// ```
    /// use exchange_cards::Card;
    ///
    /// assert_eq!(Card::new(0, 0).value(), 10);
    /// assert_eq!(Card::new(2, 4).value(), 5);
    /// assert_eq!(Card::new(3, 9).value(), 10);
    /// ```
    #[must_use]
    pub const fn value(&self) -> u32 {
        match self.rank {
            0 | 9.. => 10,
            rank => rank as u32 + 1,
        }
    }
}
