//! Frames and the placement rules for rolls within a frame.

use std::fmt::{self, Write as _};
use std::iter;

use serde::Serialize;
use tenpin_core::error::BowlingError;
use tenpin_core::pins::{PINS_PER_RACK, Pins, rack_total};

/// Tag identifying a frame variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
    /// Fewer than ten pins over the frame's rolls.
    Open,
    /// Ten pins on the first ball.
    Strike,
    /// Ten pins over two balls.
    Spare,
    /// Tenth frame without a mark.
    FinalOpen,
    /// Tenth frame opened with a strike.
    FinalStrike,
    /// Tenth frame closed with a spare.
    FinalSpare,
}

/// One of the ten turns in a game, carrying the rolls thrown in it.
///
/// `Open`, `Strike` and `Spare` only appear in frames one to nine; the
/// `Final*` variants only in the tenth, where bonus balls are thrown inside
/// the frame itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// One ball thrown, or two balls leaving pins standing.
    Open {
        /// First ball.
        first: Pins,
        /// Second ball, once thrown.
        second: Option<Pins>,
    },
    /// All ten pins on the first ball.
    Strike,
    /// All ten pins over two balls.
    Spare {
        /// First ball.
        first: Pins,
        /// Ball that cleared the rack.
        second: Pins,
    },
    /// Tenth frame with no mark.
    FinalOpen {
        /// First ball.
        first: Pins,
        /// Second ball, once thrown.
        second: Option<Pins>,
    },
    /// Tenth frame opened with a strike; two fill balls follow.
    FinalStrike {
        /// First fill ball.
        second: Option<Pins>,
        /// Second fill ball.
        third: Option<Pins>,
    },
    /// Tenth frame closed with a spare; one fill ball follows.
    FinalSpare {
        /// First ball.
        first: Pins,
        /// Ball that cleared the rack.
        second: Pins,
        /// Fill ball.
        bonus: Option<Pins>,
    },
}

impl Frame {
    /// Opens a frame with its first roll.
    #[must_use]
    pub fn first_roll(pins: Pins, is_final: bool) -> Self {
        match (pins.is_strike(), is_final) {
            (true, false) => Self::Strike,
            (false, false) => Self::Open {
                first: pins,
                second: None,
            },
            (true, true) => Self::FinalStrike {
                second: None,
                third: None,
            },
            (false, true) => Self::FinalOpen {
                first: pins,
                second: None,
            },
        }
    }

    /// Places another roll in this frame.
    ///
    /// Returns `None` when the frame is complete and the roll belongs to the
    /// next frame (or to nobody, after the tenth).
    ///
    /// # Errors
    ///
    /// The inner result is `BowlingError::InvalidPinCount` when the roll
    /// knocks down more pins than are standing.
    #[must_use]
    pub fn with_roll(&self, pins: Pins) -> Option<Result<Self, BowlingError>> {
        let placed = match *self {
            Self::Open {
                first,
                second: None,
            } => clears_rack(first, pins).map(|spare| {
                if spare {
                    Self::Spare {
                        first,
                        second: pins,
                    }
                } else {
                    Self::Open {
                        first,
                        second: Some(pins),
                    }
                }
            }),
            Self::FinalOpen {
                first,
                second: None,
            } => clears_rack(first, pins).map(|spare| {
                if spare {
                    Self::FinalSpare {
                        first,
                        second: pins,
                        bonus: None,
                    }
                } else {
                    Self::FinalOpen {
                        first,
                        second: Some(pins),
                    }
                }
            }),
            Self::FinalStrike {
                second: None,
                third: None,
            } => Ok(Self::FinalStrike {
                second: Some(pins),
                third: None,
            }),
            Self::FinalStrike {
                second: Some(second),
                third: None,
            } => {
                // Only a second strike resets the rack for the last ball.
                let fill = if second.is_strike() {
                    Ok(pins)
                } else {
                    rack_total(second, pins).map(|_| pins)
                };
                fill.map(|third| Self::FinalStrike {
                    second: Some(second),
                    third: Some(third),
                })
            }
            Self::FinalSpare {
                first,
                second,
                bonus: None,
            } => Ok(Self::FinalSpare {
                first,
                second,
                bonus: Some(pins),
            }),
            Self::Open { second: Some(_), .. }
            | Self::Strike
            | Self::Spare { .. }
            | Self::FinalOpen { second: Some(_), .. }
            | Self::FinalStrike { third: Some(_), .. }
            | Self::FinalSpare { bonus: Some(_), .. } => return None,
        };
        Some(placed)
    }

    /// Returns the variant tag.
    #[must_use]
    pub const fn kind(&self) -> FrameKind {
        match self {
            Self::Open { .. } => FrameKind::Open,
            Self::Strike => FrameKind::Strike,
            Self::Spare { .. } => FrameKind::Spare,
            Self::FinalOpen { .. } => FrameKind::FinalOpen,
            Self::FinalStrike { .. } => FrameKind::FinalStrike,
            Self::FinalSpare { .. } => FrameKind::FinalSpare,
        }
    }

    /// Whether this is a tenth-frame variant.
    #[must_use]
    pub const fn is_final(&self) -> bool {
        matches!(
            self,
            Self::FinalOpen { .. } | Self::FinalStrike { .. } | Self::FinalSpare { .. }
        )
    }

    /// Whether the frame accepts no more rolls.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        match self {
            Self::Strike | Self::Spare { .. } => true,
            Self::Open { second, .. } | Self::FinalOpen { second, .. } => second.is_some(),
            Self::FinalStrike { third, .. } => third.is_some(),
            Self::FinalSpare { bonus, .. } => bonus.is_some(),
        }
    }

    /// Returns the rolls thrown in this frame, in delivery order.
    #[must_use]
    pub fn rolls(&self) -> Vec<Pins> {
        match *self {
            Self::Open { first, second } | Self::FinalOpen { first, second } => {
                iter::once(first).chain(second).collect()
            }
            Self::Strike => vec![Pins::ALL],
            Self::Spare { first, second } => vec![first, second],
            Self::FinalStrike { second, third } => {
                iter::once(Pins::ALL).chain(second).chain(third).collect()
            }
            Self::FinalSpare {
                first,
                second,
                bonus,
            } => [first, second].into_iter().chain(bonus).collect(),
        }
    }

    /// Total pins knocked down in this frame, without bonuses.
    #[must_use]
    pub fn pinfall(&self) -> u32 {
        self.rolls().into_iter().map(u32::from).sum()
    }
}

fn clears_rack(first: Pins, second: Pins) -> Result<bool, BowlingError> {
    Ok(rack_total(first, second)? == PINS_PER_RACK)
}

/// Scoresheet mark for a ball thrown at a full rack.
fn mark(pins: Pins) -> char {
    match pins.get() {
        0 => '-',
        PINS_PER_RACK => 'X',
        count => char::from(b'0' + count),
    }
}

/// Scoresheet mark for a ball thrown at the pins left by `previous`.
fn follow_up_mark(previous: Pins, pins: Pins) -> char {
    if previous.get() + pins.get() == PINS_PER_RACK {
        '/'
    } else {
        mark(pins)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Open { first, second } | Self::FinalOpen { first, second } => {
                f.write_char(mark(first))?;
                if let Some(second) = second {
                    f.write_char(mark(second))?;
                }
                Ok(())
            }
            Self::Strike => f.write_char('X'),
            Self::Spare { first, .. } => write!(f, "{}/", mark(first)),
            Self::FinalStrike { second, third } => {
                f.write_char('X')?;
                if let Some(second) = second {
                    f.write_char(mark(second))?;
                    if let Some(third) = third {
                        let third = if second.is_strike() {
                            mark(third)
                        } else {
                            follow_up_mark(second, third)
                        };
                        f.write_char(third)?;
                    }
                }
                Ok(())
            }
            Self::FinalSpare { first, bonus, .. } => {
                write!(f, "{}/", mark(first))?;
                if let Some(bonus) = bonus {
                    f.write_char(mark(bonus))?;
                }
                Ok(())
            }
        }
    }
}
