//! Error types for the mechanics engine.

use crate::ability::AbilityClass;

/// Errors that can occur during mechanics operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// A die count or die size was out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An ability score would have dropped below zero.
    #[error("ability scores cannot be negative ({ability} = {value})")]
    Validation {
        /// The ability that failed validation.
        ability: AbilityClass,
        /// The rejected value.
        value: i32,
    },

    /// No generation strategy is registered under this name.
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    /// A race variant offered no usable bonus candidates.
    #[error("invalid race '{race}': {reason}")]
    InvalidRace {
        /// Name of the race.
        race: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A generation config or dice expression is malformed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
