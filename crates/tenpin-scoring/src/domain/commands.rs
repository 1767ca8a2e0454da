//! Commands for the bowling context.

use tenpin_core::command::Command;

/// Command to record a single roll.
#[derive(Debug, Clone, Copy)]
pub struct RecordRoll {
    /// Pins knocked down, as reported by the caller.
    pub pins: i32,
}

impl Command for RecordRoll {
    fn command_type(&self) -> &'static str {
        "bowling.record_roll"
    }
}
