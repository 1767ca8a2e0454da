//! Score calculation.
//!
//! Frames one to nine score their own pins plus a bonus read ahead from the
//! rolls that follow them: two rolls for a strike, one for a spare. The
//! tenth frame already holds its fill balls and scores its pins only.

use tenpin_core::error::BowlingError;

use super::frame::Frame;
use super::game::Game;

/// Number of following rolls a frame collects as its bonus.
const fn bonus_rolls(frame: &Frame) -> usize {
    match frame {
        Frame::Strike => 2,
        Frame::Spare { .. } => 1,
        Frame::Open { .. }
        | Frame::FinalOpen { .. }
        | Frame::FinalStrike { .. }
        | Frame::FinalSpare { .. } => 0,
    }
}

/// Score of a single frame given the frames thrown after it.
///
/// `None` while the frame is incomplete or its bonus rolls have not been
/// thrown yet.
fn frame_score(frame: &Frame, later: &[Frame]) -> Option<u32> {
    if !frame.is_complete() {
        return None;
    }
    let mut following = later.iter().flat_map(Frame::rolls);
    let mut total = frame.pinfall();
    for _ in 0..bonus_rolls(frame) {
        total += u32::from(following.next()?);
    }
    Some(total)
}

/// Computes the final score of a complete game.
///
/// # Errors
///
/// Returns `BowlingError::GameNotComplete` unless all ten frames, including
/// the tenth frame's fill balls, have been thrown.
pub fn score(game: &Game) -> Result<u32, BowlingError> {
    if !game.is_complete() {
        return Err(BowlingError::GameNotComplete);
    }
    let frames = game.frames();
    frames
        .iter()
        .enumerate()
        .map(|(index, frame)| frame_score(frame, &frames[index + 1..]))
        .sum::<Option<u32>>()
        .ok_or(BowlingError::GameNotComplete)
}

/// Running total after each frame, in play order.
///
/// An entry is `None` once any frame up to and including it cannot be
/// scored yet. On a complete game the last entry equals [`score`].
#[must_use]
pub fn frame_totals(game: &Game) -> Vec<Option<u32>> {
    let frames = game.frames();
    frames
        .iter()
        .enumerate()
        .scan(Some(0), |running: &mut Option<u32>, (index, frame)| {
            *running = running
                .zip(frame_score(frame, &frames[index + 1..]))
                .map(|(before, this)| before + this);
            Some(*running)
        })
        .collect()
}
