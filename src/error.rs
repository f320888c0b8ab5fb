use super::HAND_SIZE;

/// Contract violations raised by the card engine.
///
/// Both variants mean the caller broke an invariant of a fixed-size round,
/// so a round that hits one is abandoned rather than repaired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("cannot deal {wanted} cards from a deck of {remaining}")]
    InsufficientCards { wanted: usize, remaining: usize },
    #[error("expected a {size}-card hand, found {0} cards", size = HAND_SIZE)]
    InvalidHandSize(usize),
}
