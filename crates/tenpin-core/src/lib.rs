//! Tenpin Core — shared domain vocabulary.
//!
//! This crate defines the pin count type, the rule constants and the error
//! taxonomy that the scoring context depends on. It contains no game logic.

pub mod command;
pub mod error;
pub mod pins;
