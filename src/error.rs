//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when parsing a menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MenuError {
    /// Input was not a number.
    #[error("input is not a number")]
    NotANumber,
    /// Number does not name a menu option.
    #[error("option {0} is not between 1 and 4")]
    OutOfRange(i64),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid session phase for this action.
    #[error("invalid session phase for this action")]
    InvalidState,
}

/// Errors that can occur when validating table options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Target total is zero.
    #[error("target total must be greater than zero")]
    ZeroTarget,
    /// Dealer range has its minimum above its maximum.
    #[error("dealer range {min}..={max} is empty")]
    EmptyDealerRange {
        /// Lowest dealer total.
        min: u8,
        /// Highest dealer total.
        max: u8,
    },
}

/// Errors that can end a console game.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum PlayError {
    /// Reading or writing the console failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The session rejected an action.
    #[error(transparent)]
    Action(#[from] ActionError),
}
