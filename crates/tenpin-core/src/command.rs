//! Command abstractions.

/// Trait that all commands implement.
pub trait Command: std::fmt::Debug {
    /// The type name for this command (for logging/routing).
    fn command_type(&self) -> &'static str;
}
