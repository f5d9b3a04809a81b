//! Session phase types.

/// Where the session is in the round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// A round is ready for its next card.
    #[default]
    Drawing,
    /// The hand is below the target; the player picks draw or hold.
    Deciding,
    /// The player left the table.
    Terminated,
}
