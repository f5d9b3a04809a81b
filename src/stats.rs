//! Running session statistics.

use core::fmt;

#[cfg(feature = "std")]
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_tenth(value: f64) -> f64 {
    libm::round(value * 10.0) / 10.0
}

/// Win/loss counters accumulated across rounds.
///
/// Counters are never reset while the session lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Number of the round in progress. Starts at 1.
    pub games: u32,
    /// Rounds the player won (blackjack or hold).
    pub player_wins: u32,
    /// Rounds the dealer won on a hold.
    pub dealer_wins: u32,
    /// Rounds that ended in a tie.
    pub ties: u32,
    /// Rounds the player lost by going over the target.
    ///
    /// Busts are not counted as dealer wins.
    pub busts: u32,
}

impl Stats {
    /// Creates counters for a fresh session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            games: 1,
            player_wins: 0,
            dealer_wins: 0,
            ties: 0,
            busts: 0,
        }
    }

    /// Returns `100 * player_wins / games`.
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        100.0 * f64::from(self.player_wins) / f64::from(self.games)
    }

    /// Returns the win percentage rounded to one decimal place.
    #[must_use]
    pub fn rounded_win_percentage(&self) -> f64 {
        round_tenth(self.win_percentage())
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of Player wins: {}", self.player_wins)?;
        writeln!(f, "Number of Dealer wins: {}", self.dealer_wins)?;
        writeln!(f, "Number of tie games: {}", self.ties)?;
        writeln!(f, "Number of busts: {}", self.busts)?;
        writeln!(f, "Total # of games played is: {}", self.games)?;
        write!(
            f,
            "Percentage of Player wins: {:.1}%",
            self.rounded_win_percentage()
        )
    }
}
