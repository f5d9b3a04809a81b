//! Menu options offered between draws.

use core::fmt;
use core::str::FromStr;

use crate::error::MenuError;

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOption {
    /// Draw another card.
    Draw = 1,
    /// Stop drawing and let the dealer play.
    Hold = 2,
    /// Print the running statistics.
    Stats = 3,
    /// Leave the table.
    Exit = 4,
}

impl MenuOption {
    /// All options in menu order.
    pub const ALL: [Self; 4] = [Self::Draw, Self::Hold, Self::Stats, Self::Exit];

    /// Returns the text shown next to the option number.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draw => "Get another card",
            Self::Hold => "Hold hand",
            Self::Stats => "Print statistics",
            Self::Exit => "Exit",
        }
    }
}

impl TryFrom<i64> for MenuOption {
    type Error = MenuError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Draw),
            2 => Ok(Self::Hold),
            3 => Ok(Self::Stats),
            4 => Ok(Self::Exit),
            other => Err(MenuError::OutOfRange(other)),
        }
    }
}

impl FromStr for MenuOption {
    type Err = MenuError;

    /// Parses a line such as `"2"`, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<i64>().map_err(|_| MenuError::NotANumber)?;
        Self::try_from(value)
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", *self as u8, self.label())
    }
}
