//! Shared test fixtures and utilities for the ten-pin bowling scorer.

pub mod fixtures;
pub mod logging;

pub use fixtures::{COMPLETE_GAMES, GameFixture};
