//! Error types for recurrence-rule validation.

use thiserror::Error;

/// Reasons a recurrence rule is rejected before expansion begins.
///
/// Every variant is a rejected input: nothing is retried, and no partial
/// occurrence list ever accompanies an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleError {
    /// The end bound falls before the start date.
    #[error("end date precedes start date")]
    EndBeforeStart,

    /// The interval is zero; every frequency must step by at least one unit.
    #[error("interval must be at least 1")]
    IntervalTooSmall,

    /// The nth-weekday occurrence index is outside 1..=5.
    #[error("occurrence index {0} is outside 1..=5")]
    InvalidOccurrenceIndex(u8),
}

/// Convenience alias used throughout cadence-engine.
pub type Result<T> = std::result::Result<T, RuleError>;
