//! The player's running hand.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Hand status after a card is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Total is below the target; the player may draw or hold.
    Active,
    /// Total hit the target exactly.
    Blackjack,
    /// Total went over the target.
    Bust,
}

/// A player's hand for the current round.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards drawn this round.
    cards: Vec<Card>,
    /// Sum of the card values.
    total: u32,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
        }
    }

    /// Adds a card and returns the status against `target`.
    pub fn add_card(&mut self, card: Card, target: u8) -> HandStatus {
        self.cards.push(card);
        self.total += u32::from(card.value());
        self.status(target)
    }

    /// Returns the status of the hand against `target`.
    #[must_use]
    pub fn status(&self, target: u8) -> HandStatus {
        let target = u32::from(target);
        if self.total == target {
            HandStatus::Blackjack
        } else if self.total > target {
            HandStatus::Bust
        } else {
            HandStatus::Active
        }
    }

    /// Returns the cards drawn this round.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the running total.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.total = 0;
    }
}
