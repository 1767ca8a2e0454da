//! Domain layer for the bowling context: frames, the game state machine,
//! scoring and commands.

pub mod commands;
pub mod frame;
pub mod game;
pub mod scoring;
