//! Domain error types.

use thiserror::Error;

/// Why a pin count was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PinCountViolation {
    /// More pins than are standing on the rack.
    #[error("Pin count exceeds pins on the lane")]
    ExceedsLane,

    /// A negative number of pins.
    #[error("Negative roll is invalid")]
    Negative,
}

/// Top-level domain error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BowlingError {
    /// The roll knocks down an impossible number of pins.
    #[error("{0}")]
    InvalidPinCount(PinCountViolation),

    /// A roll was attempted after the tenth frame was complete.
    #[error("Cannot roll after game is over")]
    GameOver,

    /// The score was requested before the tenth frame was complete.
    #[error("Score cannot be taken until the end of the game")]
    GameNotComplete,
}

impl From<PinCountViolation> for BowlingError {
    fn from(violation: PinCountViolation) -> Self {
        Self::InvalidPinCount(violation)
    }
}
