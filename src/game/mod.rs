//! Game engine and session state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::OptionsError;
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::stats::Stats;

mod actions;
mod dealer;
pub mod state;

pub use state::Phase;

/// A hold-or-draw blackjack session for a single player.
///
/// The session owns the player's hand, the running statistics and the card
/// generator. Every operation takes `&mut self`; there is no shared state.
#[derive(Debug, Clone)]
pub struct Session {
    /// Table options.
    options: TableOptions,
    /// Player's hand for the current round.
    hand: Hand,
    /// Running statistics.
    stats: Stats,
    /// Current phase.
    phase: Phase,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Session {
    /// Creates a new session with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjhold::{Session, TableOptions};
    ///
    /// let session = Session::new(TableOptions::default(), 42).unwrap();
    /// assert_eq!(session.stats().games, 1);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`TableOptions::validate`].
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, OptionsError> {
        options.validate()?;

        Ok(Self {
            options,
            hand: Hand::new(),
            stats: Stats::new(),
            phase: Phase::Drawing,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the player's hand for the current round.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the running statistics.
    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether the player has left the table.
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        matches!(self.phase, Phase::Terminated)
    }

    /// Leaves the table. Further draws and holds are rejected.
    pub fn exit(&mut self) {
        tracing::event!(tracing::Level::DEBUG, games = self.stats.games, "session exited");
        self.phase = Phase::Terminated;
    }

    /// Closes the current round and starts the next one.
    fn finish_round(&mut self) {
        self.stats.games += 1;
        self.hand.clear();
        self.phase = Phase::Drawing;
    }
}
