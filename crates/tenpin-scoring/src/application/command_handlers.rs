//! Command handlers for the bowling context.
//!
//! Handlers wrap the pure domain transitions with tracing spans. Rejected
//! rolls are returned to the caller untouched and are not logged here.

use tenpin_core::command::Command;
use tenpin_core::error::BowlingError;
use tracing::{debug, instrument};

use crate::domain::commands::RecordRoll;
use crate::domain::game::Game;

/// Handles the `RecordRoll` command: places the roll and returns the
/// resulting game.
///
/// # Errors
///
/// Returns `BowlingError::InvalidPinCount` or `BowlingError::GameOver` if the
/// roll is not allowed; `game` stays valid either way.
#[instrument(skip_all, fields(pins = command.pins, frame = game.current_frame()))]
pub fn handle_record_roll(command: &RecordRoll, game: &Game) -> Result<Game, BowlingError> {
    let next = game.roll(command.pins)?;

    if let Some(frame) = next.frames().last() {
        debug!(
            command = command.command_type(),
            frame_number = next.frames().len(),
            kind = ?frame.kind(),
            notation = %frame,
            game_complete = next.is_complete(),
            "roll recorded"
        );
    }

    Ok(next)
}

/// Replays a whole roll sequence from an empty game.
///
/// # Errors
///
/// Returns the error of the first roll that is not allowed.
#[instrument(skip_all, fields(rolls = rolls.len()))]
pub fn replay(rolls: &[i32]) -> Result<Game, BowlingError> {
    rolls.iter().try_fold(Game::start(), |game, &pins| {
        handle_record_roll(&RecordRoll { pins }, &game)
    })
}

#[cfg(test)]
mod tests {
    use tenpin_core::error::PinCountViolation;
    use tenpin_test_support::fixtures::{COMPLETE_GAMES, LEAGUE_GAME};
    use tenpin_test_support::logging;

    use super::*;
    use crate::domain::frame::FrameKind;
    use crate::domain::game::GamePhase;

    #[test]
    fn test_handle_record_roll_returns_the_next_game() {
        logging::init();
        let game = Game::start();

        let next = handle_record_roll(&RecordRoll { pins: 10 }, &game).unwrap();

        assert_eq!(next.frames().len(), 1);
        assert_eq!(next.frames()[0].kind(), FrameKind::Strike);
        assert!(game.frames().is_empty());
    }

    #[test]
    fn test_handle_record_roll_rejects_invalid_pins() {
        logging::init();
        let game = handle_record_roll(&RecordRoll { pins: 6 }, &Game::start()).unwrap();

        let result = handle_record_roll(&RecordRoll { pins: 5 }, &game);

        assert_eq!(
            result,
            Err(BowlingError::InvalidPinCount(PinCountViolation::ExceedsLane))
        );
        assert_eq!(game.roll_count(), 1);
    }

    #[test]
    fn test_replay_builds_complete_games() {
        logging::init();
        for fixture in COMPLETE_GAMES {
            let game = replay(fixture.rolls).unwrap();
            assert_eq!(game.phase(), GamePhase::Complete, "{}", fixture.name);
            assert_eq!(game.roll_count(), fixture.rolls.len(), "{}", fixture.name);
        }
    }

    #[test]
    fn test_replay_stops_at_first_rejected_roll() {
        logging::init();
        assert_eq!(
            replay(&[3, 4, 9, 2]),
            Err(BowlingError::InvalidPinCount(PinCountViolation::ExceedsLane))
        );
        assert_eq!(
            replay(&[1, -2]),
            Err(BowlingError::InvalidPinCount(PinCountViolation::Negative))
        );
    }

    #[test]
    fn test_replay_rejects_rolls_past_the_tenth_frame() {
        logging::init();
        let mut rolls = LEAGUE_GAME.rolls.to_vec();
        rolls.push(0);

        assert_eq!(replay(&rolls), Err(BowlingError::GameOver));
    }

    #[test]
    fn test_record_roll_command_type() {
        assert_eq!(RecordRoll { pins: 0 }.command_type(), "bowling.record_roll");
    }
}
