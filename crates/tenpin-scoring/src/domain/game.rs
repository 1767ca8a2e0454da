//! The game: an immutable sequence of frames and the roll state machine.

use serde::Serialize;
use tenpin_core::error::BowlingError;
use tenpin_core::pins::{FRAMES_PER_GAME, Pins};

use super::frame::Frame;

/// Where a game stands in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// No roll has been thrown.
    Empty,
    /// Somewhere in frames one to nine.
    InProgress,
    /// The tenth frame has started but still owes rolls.
    FinalFrame,
    /// The tenth frame is complete; no further rolls are accepted.
    Complete,
}

/// A single player's game.
///
/// Every roll produces a new `Game`; a rejected roll leaves the receiver
/// untouched, so the caller keeps using its last good value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    /// Frames in play order.
    frames: Vec<Frame>,
}

impl Game {
    /// Creates a game with no rolls.
    #[must_use]
    pub fn start() -> Self {
        Self::default()
    }

    /// Records a roll, returning the resulting game.
    ///
    /// # Errors
    ///
    /// Returns `BowlingError::InvalidPinCount` if `pins` is negative, above
    /// ten, or more than the pins left standing in the current frame.
    /// Returns `BowlingError::GameOver` if the tenth frame is already
    /// complete.
    pub fn roll(&self, pins: i32) -> Result<Self, BowlingError> {
        let pins = Pins::try_from(pins)?;

        if let Some((latest, settled)) = self.frames.split_last() {
            if let Some(placed) = latest.with_roll(pins) {
                let mut frames = settled.to_vec();
                frames.push(placed?);
                return Ok(Self { frames });
            }
            if self.frames.len() == FRAMES_PER_GAME {
                return Err(BowlingError::GameOver);
            }
        }

        let is_final = self.frames.len() + 1 == FRAMES_PER_GAME;
        let mut frames = self.frames.clone();
        frames.push(Frame::first_roll(pins, is_final));
        Ok(Self { frames })
    }

    /// Returns the frames in play order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns the lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        match self.frames.len() {
            0 => GamePhase::Empty,
            played if played < FRAMES_PER_GAME => GamePhase::InProgress,
            _ if self.frames.last().is_some_and(Frame::is_complete) => GamePhase::Complete,
            _ => GamePhase::FinalFrame,
        }
    }

    /// Whether the tenth frame is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase() == GamePhase::Complete
    }

    /// The 1-based number of the frame the next roll lands in, or `None`
    /// once the game is complete.
    #[must_use]
    pub fn current_frame(&self) -> Option<usize> {
        match self.frames.last() {
            Some(latest) if !latest.is_complete() => Some(self.frames.len()),
            _ if self.frames.len() == FRAMES_PER_GAME => None,
            _ => Some(self.frames.len() + 1),
        }
    }

    /// Number of rolls accepted so far.
    #[must_use]
    pub fn roll_count(&self) -> usize {
        self.frames.iter().map(|frame| frame.rolls().len()).sum()
    }
}

/// Returns the empty game.
#[must_use]
pub fn start() -> Game {
    Game::start()
}

/// Records a roll on `game`, returning the resulting game.
///
/// # Errors
///
/// See [`Game::roll`].
pub fn roll(game: &Game, pins: i32) -> Result<Game, BowlingError> {
    game.roll(pins)
}

#[cfg(test)]
mod tests {
    use tenpin_core::error::PinCountViolation;
    use tenpin_test_support::fixtures::{ALL_FIVES, LEAGUE_GAME, PERFECT_GAME};

    use super::*;
    use crate::domain::frame::FrameKind;

    fn play(rolls: &[i32]) -> Game {
        rolls
            .iter()
            .fold(Game::start(), |game, &pins| game.roll(pins).unwrap())
    }

    fn kinds(game: &Game) -> Vec<FrameKind> {
        game.frames().iter().map(Frame::kind).collect()
    }

    #[test]
    fn test_start_is_empty() {
        let game = start();
        assert!(game.frames().is_empty());
        assert_eq!(game.phase(), GamePhase::Empty);
        assert_eq!(game.current_frame(), Some(1));
        assert_eq!(game.roll_count(), 0);
    }

    #[test]
    fn test_roll_does_not_touch_the_previous_game() {
        let before = start();
        let after = roll(&before, 4).unwrap();

        assert!(before.frames().is_empty());
        assert_eq!(after.frames().len(), 1);
        assert_eq!(after.phase(), GamePhase::InProgress);
    }

    #[test]
    fn test_strike_takes_the_whole_frame() {
        let game = play(&[10, 3]);
        assert_eq!(kinds(&game), vec![FrameKind::Strike, FrameKind::Open]);
        assert_eq!(game.current_frame(), Some(2));
    }

    #[test]
    fn test_two_rolls_close_an_open_frame() {
        let game = play(&[3, 4, 5]);
        assert_eq!(kinds(&game), vec![FrameKind::Open, FrameKind::Open]);
        assert_eq!(game.frames()[0].rolls().len(), 2);
        assert_eq!(game.frames()[1].rolls().len(), 1);
    }

    #[test]
    fn test_spare_then_new_frame() {
        let game = play(&[6, 4, 10]);
        assert_eq!(kinds(&game), vec![FrameKind::Spare, FrameKind::Strike]);
        assert_eq!(game.current_frame(), Some(3));
    }

    #[test]
    fn test_out_of_range_pins_rejected_in_every_phase() {
        let games = [
            start(),
            play(&[5]),
            play(&[0; 18]),
            play(PERFECT_GAME.rolls),
        ];
        for game in &games {
            assert_eq!(
                game.roll(11),
                Err(BowlingError::InvalidPinCount(PinCountViolation::ExceedsLane))
            );
            assert_eq!(
                game.roll(-1),
                Err(BowlingError::InvalidPinCount(PinCountViolation::Negative))
            );
        }
    }

    #[test]
    fn test_rejected_roll_keeps_the_previous_game_usable() {
        let game = play(&[6]);
        assert_eq!(
            game.roll(5),
            Err(BowlingError::InvalidPinCount(PinCountViolation::ExceedsLane))
        );

        let game = game.roll(4).unwrap();
        assert_eq!(kinds(&game), vec![FrameKind::Spare]);
    }

    #[test]
    fn test_tenth_frame_starts_as_final_variant() {
        let open = play(&[0; 19]);
        assert_eq!(open.frames().len(), 10);
        assert_eq!(open.frames()[9].kind(), FrameKind::FinalOpen);
        assert_eq!(open.phase(), GamePhase::FinalFrame);
        assert_eq!(open.current_frame(), Some(10));

        let mut rolls = vec![0; 18];
        rolls.push(10);
        let strike = play(&rolls);
        assert_eq!(strike.frames()[9].kind(), FrameKind::FinalStrike);
        assert_eq!(strike.phase(), GamePhase::FinalFrame);
    }

    #[test]
    fn test_final_open_frame_ends_the_game() {
        let game = play(&[0; 20]);
        assert!(game.is_complete());
        assert_eq!(game.current_frame(), None);
        assert_eq!(game.roll(0), Err(BowlingError::GameOver));
    }

    #[test]
    fn test_final_spare_waits_for_its_fill_ball() {
        let game = play(&ALL_FIVES.rolls[..20]);
        assert_eq!(game.phase(), GamePhase::FinalFrame);
        assert_eq!(game.frames()[9].kind(), FrameKind::FinalSpare);

        let game = game.roll(5).unwrap();
        assert!(game.is_complete());
        assert_eq!(game.roll(0), Err(BowlingError::GameOver));
    }

    #[test]
    fn test_final_strike_with_open_fill_rejects_overflow() {
        let mut rolls = vec![0; 18];
        rolls.extend([10, 6]);
        let game = play(&rolls);

        assert_eq!(
            game.roll(5),
            Err(BowlingError::InvalidPinCount(PinCountViolation::ExceedsLane))
        );
        assert!(game.roll(4).unwrap().is_complete());
    }

    #[test]
    fn test_perfect_game_is_ten_frames() {
        let game = play(PERFECT_GAME.rolls);
        assert_eq!(game.frames().len(), 10);
        assert!(game.is_complete());
        assert_eq!(game.frames()[9].rolls().len(), 3);
        assert_eq!(game.roll(10), Err(BowlingError::GameOver));
    }

    #[test]
    fn test_roll_count_matches_rolls_thrown() {
        let game = play(LEAGUE_GAME.rolls);
        assert_eq!(game.roll_count(), LEAGUE_GAME.rolls.len());
    }
}
