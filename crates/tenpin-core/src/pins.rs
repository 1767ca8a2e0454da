//! Pin counts and the rack rules that bound them.
//!
//! A [`Pins`] can only be built through the validating conversion from a
//! signed integer, so any value that reaches frame placement is already
//! within `0..=PINS_PER_RACK`.

use std::fmt;

use serde::Serialize;

use crate::error::{BowlingError, PinCountViolation};

/// Pins standing on a freshly set rack.
pub const PINS_PER_RACK: u8 = 10;

/// Frames in one game.
pub const FRAMES_PER_GAME: usize = 10;

/// Pins knocked down by a single delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Pins(u8);

impl Pins {
    /// A gutter ball.
    pub const GUTTER: Self = Self(0);

    /// Every pin on the rack.
    pub const ALL: Self = Self(PINS_PER_RACK);

    /// Returns the number of pins as a plain integer.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Whether this delivery cleared a full rack.
    #[must_use]
    pub const fn is_strike(self) -> bool {
        self.0 == PINS_PER_RACK
    }

    /// Whether no pins fell.
    #[must_use]
    pub const fn is_gutter(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<i32> for Pins {
    type Error = BowlingError;

    fn try_from(pins: i32) -> Result<Self, Self::Error> {
        if pins < 0 {
            return Err(PinCountViolation::Negative.into());
        }
        match u8::try_from(pins) {
            Ok(count) if count <= PINS_PER_RACK => Ok(Self(count)),
            _ => Err(PinCountViolation::ExceedsLane.into()),
        }
    }
}

impl From<Pins> for u32 {
    fn from(pins: Pins) -> Self {
        Self::from(pins.0)
    }
}

impl fmt::Display for Pins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Total of two deliveries thrown at the same rack.
///
/// # Errors
///
/// Returns `BowlingError::InvalidPinCount` if together they knock down more
/// pins than the rack holds.
pub fn rack_total(first: Pins, second: Pins) -> Result<u8, BowlingError> {
    let total = first.0 + second.0;
    if total > PINS_PER_RACK {
        return Err(PinCountViolation::ExceedsLane.into());
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_every_count_on_the_rack() {
        for count in 0..=10 {
            let pins = Pins::try_from(count).unwrap();
            assert_eq!(i32::from(pins.get()), count);
        }
    }

    #[test]
    fn test_rejects_counts_above_the_rack() {
        for count in [11, 12, 255, 256, i32::MAX] {
            assert_eq!(
                Pins::try_from(count),
                Err(BowlingError::InvalidPinCount(PinCountViolation::ExceedsLane)),
                "count {count}"
            );
        }
    }

    #[test]
    fn test_rejects_negative_counts() {
        for count in [-1, -10, i32::MIN] {
            assert_eq!(
                Pins::try_from(count),
                Err(BowlingError::InvalidPinCount(PinCountViolation::Negative)),
                "count {count}"
            );
        }
    }

    #[test]
    fn test_strike_and_gutter() {
        assert!(Pins::ALL.is_strike());
        assert!(!Pins::ALL.is_gutter());
        assert!(Pins::GUTTER.is_gutter());
        assert!(!Pins::try_from(9).unwrap().is_strike());
    }

    #[test]
    fn test_rack_total_allows_up_to_a_full_rack() {
        let four = Pins::try_from(4).unwrap();
        let six = Pins::try_from(6).unwrap();
        assert_eq!(rack_total(four, six), Ok(10));
        assert_eq!(rack_total(four, Pins::GUTTER), Ok(4));
    }

    #[test]
    fn test_rack_total_rejects_overflow() {
        let six = Pins::try_from(6).unwrap();
        let five = Pins::try_from(5).unwrap();
        assert_eq!(
            rack_total(six, five),
            Err(BowlingError::InvalidPinCount(PinCountViolation::ExceedsLane))
        );
    }
}
