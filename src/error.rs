//! Error types for the scheduling engine.
//!
//! All failures are deterministic input-validation errors raised before
//! or during a computation. None are transient or retryable, and no
//! operation returns a partial result: a call either yields a complete
//! plan/estimate or one of these errors.

use chrono::NaiveDate;

/// Result type alias using our error type.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors produced by the scheduling engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    /// The study-weekday set is empty, so no date can ever qualify.
    #[error("no study weekday configured")]
    EmptyStudyWeekdays,

    /// A weekday index was outside the 0-6 domain (Monday=0, Sunday=6).
    #[error("weekday index {index} is out of range (expected 0-6, Monday=0)")]
    WeekdayIndexOutOfRange {
        /// The rejected index.
        index: u8,
    },

    /// Completion estimation requires a positive daily budget.
    #[error("daily budget must be positive, got {minutes} minutes")]
    NonPositiveDailyBudget {
        /// The rejected budget value.
        minutes: f64,
    },

    /// The search ceiling was hit before the target was met.
    #[error("no completion date within {horizon_days} calendar days of {start}")]
    Unreachable {
        /// First day of the search.
        start: NaiveDate,
        /// The ceiling that was exhausted.
        horizon_days: i64,
    },

    /// A date cursor advanced past the representable calendar range.
    #[error("walked past the end of the supported calendar range")]
    DateOverflow,
}
