//! Query handlers for the bowling context.
//!
//! This module contains query handlers that read a game and return its
//! score or a read-only scorecard view.

use serde::Serialize;
use tenpin_core::error::BowlingError;
use tenpin_core::pins::Pins;
use tracing::{info, instrument};

use crate::domain::frame::FrameKind;
use crate::domain::game::{Game, GamePhase};
use crate::domain::scoring;

/// Read-only view of a single frame on the scorecard.
#[derive(Debug, Serialize)]
pub struct FrameView {
    /// The 1-based frame number.
    pub frame_number: usize,
    /// The frame variant.
    pub kind: FrameKind,
    /// Pins knocked down per roll.
    pub rolls: Vec<Pins>,
    /// Scoresheet marks, e.g. `X`, `7/`, `9-`.
    pub notation: String,
    /// Cumulative score through this frame, once it can be known.
    pub running_total: Option<u32>,
}

/// Read-only view of a whole game.
#[derive(Debug, Serialize)]
pub struct ScorecardView {
    /// Lifecycle phase.
    pub phase: GamePhase,
    /// Frame the next roll lands in, if the game is not over.
    pub current_frame: Option<usize>,
    /// Frames in play order.
    pub frames: Vec<FrameView>,
    /// Final score, once the game is complete.
    pub score: Option<u32>,
}

/// Retrieves the final score of a game.
///
/// # Errors
///
/// Returns `BowlingError::GameNotComplete` if the tenth frame is not
/// complete.
#[instrument(skip_all, fields(frames = game.frames().len()))]
pub fn get_score(game: &Game) -> Result<u32, BowlingError> {
    let total = scoring::score(game)?;
    info!(score = total, "game scored");
    Ok(total)
}

/// Builds the scorecard for a game at any point of play.
#[must_use]
pub fn get_scorecard(game: &Game) -> ScorecardView {
    let frames = game
        .frames()
        .iter()
        .zip(scoring::frame_totals(game))
        .enumerate()
        .map(|(index, (frame, running_total))| FrameView {
            frame_number: index + 1,
            kind: frame.kind(),
            rolls: frame.rolls(),
            notation: frame.to_string(),
            running_total,
        })
        .collect();

    ScorecardView {
        phase: game.phase(),
        current_frame: game.current_frame(),
        frames,
        score: scoring::score(game).ok(),
    }
}
