//! Table configuration options.

use crate::error::OptionsError;

/// Configuration options for a session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjhold::TableOptions;
///
/// let options = TableOptions::default()
///     .with_target(21)
///     .with_dealer_range(17, 25);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Total that wins the round outright. Anything above it is a bust.
    pub target: u8,
    /// Lowest total the dealer can hold.
    pub dealer_min: u8,
    /// Highest total the dealer can hold.
    pub dealer_max: u8,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            target: 21,
            dealer_min: 16,
            dealer_max: 26,
        }
    }
}

impl TableOptions {
    /// Sets the blackjack total.
    ///
    /// # Example
    ///
    /// ```
    /// use bjhold::TableOptions;
    ///
    /// let options = TableOptions::default().with_target(31);
    /// assert_eq!(options.target, 31);
    /// ```
    #[must_use]
    pub const fn with_target(mut self, target: u8) -> Self {
        self.target = target;
        self
    }

    /// Sets the inclusive range the dealer total is drawn from.
    ///
    /// # Example
    ///
    /// ```
    /// use bjhold::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_range(17, 23);
    /// assert_eq!((options.dealer_min, options.dealer_max), (17, 23));
    /// ```
    #[must_use]
    pub const fn with_dealer_range(mut self, min: u8, max: u8) -> Self {
        self.dealer_min = min;
        self.dealer_max = max;
        self
    }

    /// Checks that the options describe a playable table.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is zero or the dealer range is empty.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.target == 0 {
            return Err(OptionsError::ZeroTarget);
        }
        if self.dealer_min > self.dealer_max {
            return Err(OptionsError::EmptyDealerRange {
                min: self.dealer_min,
                max: self.dealer_max,
            });
        }
        Ok(())
    }
}
