use rand::Rng;
use tracing::{Level, event};

use crate::card::{Card, MAX_RANK, MIN_RANK};
use crate::error::ActionError;
use crate::hand::HandStatus;
use crate::result::Draw;

use super::{Phase, Session};

impl Session {
    /// Player action: draw a card from the generator.
    ///
    /// Ranks are drawn uniformly from 1..=13 with replacement.
    ///
    /// # Errors
    ///
    /// Returns an error if the player has left the table.
    pub fn draw_card(&mut self) -> Result<Draw, ActionError> {
        self.ensure_can_draw()?;
        let card = Card::new(self.rng.random_range(MIN_RANK..=MAX_RANK));
        self.take_card(card)
    }

    /// Player action: add a specific card to the hand.
    ///
    /// Reaching the target exactly wins the round, going over it loses the
    /// round. Either way the next round starts with an empty hand. A bust does
    /// not count as a dealer win.
    ///
    /// # Errors
    ///
    /// Returns an error if the player has left the table.
    pub fn take_card(&mut self, card: Card) -> Result<Draw, ActionError> {
        self.ensure_can_draw()?;

        let status = self.hand.add_card(card, self.options.target);
        let total = self.hand.total();
        event!(Level::DEBUG, rank = card.rank, total, ?status, "card drawn");

        match status {
            HandStatus::Active => self.phase = Phase::Deciding,
            HandStatus::Blackjack => {
                self.stats.player_wins += 1;
                self.finish_round();
            }
            HandStatus::Bust => {
                self.stats.busts += 1;
                self.finish_round();
            }
        }

        Ok(Draw {
            card,
            total,
            status,
        })
    }

    fn ensure_can_draw(&self) -> Result<(), ActionError> {
        if self.is_terminated() {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }
}
