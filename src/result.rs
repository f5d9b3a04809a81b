//! Draw and round result types.

use crate::card::Card;
use crate::hand::HandStatus;

/// Result of drawing a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    /// The card that was drawn.
    pub card: Card,
    /// Hand total after adding the card, before any end-of-round reset.
    pub total: u32,
    /// Status of the hand after the card.
    pub status: HandStatus,
}

/// How a hold was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Dealer went over the target; player wins.
    DealerBust,
    /// Dealer and player totals are equal.
    Tie,
    /// Dealer total is higher.
    DealerWins,
    /// Player total is higher.
    PlayerWins,
}

impl Resolution {
    /// Returns whether the player won.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWins)
    }
}

/// Result of a hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Showdown {
    /// Player's total at the time of the hold.
    pub player_total: u32,
    /// Dealer's total.
    pub dealer_total: u8,
    /// How the round was settled.
    pub resolution: Resolution,
}

/// What the menu decided for the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player asked for another card.
    Continue,
    /// Player held and won.
    Won,
    /// Player held and lost.
    Lost,
    /// Player held and tied.
    Tied,
    /// Player left the table.
    Exited,
}

impl From<Resolution> for RoundOutcome {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::DealerBust | Resolution::PlayerWins => Self::Won,
            Resolution::DealerWins => Self::Lost,
            Resolution::Tie => Self::Tied,
        }
    }
}
