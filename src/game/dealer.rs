use rand::Rng;
use tracing::{Level, event};

use crate::error::ActionError;
use crate::result::{Resolution, Showdown};

use super::{Phase, Session};

/// Settles a hold. The dealer busting is checked before anything else.
fn resolve(player_total: u32, dealer_total: u8, target: u8) -> Resolution {
    let dealer = u32::from(dealer_total);
    if dealer > u32::from(target) {
        Resolution::DealerBust
    } else if dealer == player_total {
        Resolution::Tie
    } else if dealer > player_total {
        Resolution::DealerWins
    } else {
        Resolution::PlayerWins
    }
}

impl Session {
    /// Player action: hold and let the dealer play.
    ///
    /// The dealer total is drawn uniformly from the configured dealer range
    /// (16..=26 by default).
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not deciding on a hand.
    pub fn hold(&mut self) -> Result<Showdown, ActionError> {
        self.ensure_deciding()?;
        let dealer_total = self
            .rng
            .random_range(self.options.dealer_min..=self.options.dealer_max);
        self.hold_against(dealer_total)
    }

    /// Player action: hold against a known dealer total.
    ///
    /// Updates the matching counter and starts the next round.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not deciding on a hand.
    pub fn hold_against(&mut self, dealer_total: u8) -> Result<Showdown, ActionError> {
        self.ensure_deciding()?;

        let player_total = self.hand.total();
        let resolution = resolve(player_total, dealer_total, self.options.target);

        match resolution {
            Resolution::DealerBust | Resolution::PlayerWins => self.stats.player_wins += 1,
            Resolution::DealerWins => self.stats.dealer_wins += 1,
            Resolution::Tie => self.stats.ties += 1,
        }

        event!(
            Level::DEBUG,
            game = self.stats.games,
            player_total,
            dealer_total,
            ?resolution,
            "round resolved"
        );
        self.finish_round();

        Ok(Showdown {
            player_total,
            dealer_total,
            resolution,
        })
    }

    fn ensure_deciding(&self) -> Result<(), ActionError> {
        if self.phase != Phase::Deciding {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }
}
