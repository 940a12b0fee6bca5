//! Error types for the calendar engine.

use thiserror::Error;

use crate::calendar::CalendarDay;

/// Comprehensive error type for all engine operations.
///
/// Every failure the engine can raise is caused by malformed input rather
/// than a transient condition, so none of these are ever retried
/// internally. Errors from the storage collaborator are not wrapped here;
/// they propagate to the caller unchanged.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Input did not parse to a real calendar date
    #[error("Invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: jiff::Error,
    },
    /// A date range whose start falls after its end was passed in.
    /// This is a caller bug, not a recoverable condition.
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange {
        start: CalendarDay,
        end: CalendarDay,
    },
    /// Reschedule target could not be resolved to a valid calendar day
    #[error("Invalid reschedule target '{value}': {reason}")]
    InvalidTarget { value: String, reason: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

impl EngineError {
    /// Creates an invalid-date error from a parse failure.
    pub fn invalid_date(value: impl Into<String>, source: jiff::Error) -> Self {
        Self::InvalidDate {
            value: value.into(),
            source,
        }
    }

    /// Creates an invalid-target error for a reschedule operation.
    pub fn invalid_target(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Creates an input validation error for a named field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
