//! Card types.

use core::fmt;

/// Lowest rank that can be drawn (Ace).
pub const MIN_RANK: u8 = 1;

/// Highest rank that can be drawn (King).
pub const MAX_RANK: u8 = 13;

/// A playing card.
///
/// Cards are drawn with replacement, so only the rank matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted and count as zero towards a hand.
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        Self { rank }
    }

    /// Returns the value this card adds to a hand.
    ///
    /// Aces always count as 1 and face cards as 10.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self.rank {
            1..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }

    /// Returns the name of face cards and aces, `None` for number cards.
    #[must_use]
    pub const fn face_name(self) -> Option<&'static str> {
        match self.rank {
            1 => Some("Ace"),
            11 => Some("Jack"),
            12 => Some("Queen"),
            13 => Some("King"),
            _ => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.face_name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.rank),
        }
    }
}
