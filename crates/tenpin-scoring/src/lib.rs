//! Tenpin — Scoring bounded context.
//!
//! Responsible for placing each roll of a single ten-pin game into its
//! frame, rejecting rolls the rules do not allow, and computing the score
//! once the tenth frame is complete.
//!
//! ```
//! use tenpin_scoring::{roll, score, start};
//!
//! let mut game = start();
//! for _ in 0..12 {
//!     game = roll(&game, 10)?;
//! }
//! assert_eq!(score(&game)?, 300);
//! # Ok::<(), tenpin_core::error::BowlingError>(())
//! ```

pub mod application;
pub mod domain;

pub use domain::frame::{Frame, FrameKind};
pub use domain::game::{Game, GamePhase, roll, start};
pub use domain::scoring::{frame_totals, score};
