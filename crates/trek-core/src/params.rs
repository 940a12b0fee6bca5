//! Parameter structures for Trek operations.
//!
//! Shared parameter structures usable across interfaces (CLI today, other
//! front ends later) without framework-specific derives. Interface layers
//! wrap these with their own derive-carrying types and convert via
//! `into_params()`-style methods, keeping clap and friends out of the core.
//!
//! Raw user input (date strings in particular) stays raw in these structs;
//! `validate()` methods parse and check it, raising the engine's error
//! kinds at the point of the offending call.

use serde::{Deserialize, Serialize};

use crate::{
    calendar::{parse_day, CalendarDay},
    error::{EngineError, Result},
};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the record to operate on
    pub id: u64,
}

/// Parameters for creating a new trip.
///
/// Dates arrive as raw `YYYY-MM-DD` strings and are validated before any
/// record is constructed. Creation is the one path that consults the
/// conflict detector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTrip {
    /// Destination label (required)
    pub destination: String,
    /// First day of the trip, `YYYY-MM-DD`
    pub start_date: String,
    /// Last day of the trip, `YYYY-MM-DD`
    pub end_date: String,
    /// Optional budget (non-negative)
    pub budget: Option<f64>,
    /// Optional free-form notes
    pub notes: Option<String>,
}

impl CreateTrip {
    /// Parses and validates the proposed date range.
    ///
    /// # Errors
    ///
    /// * `EngineError::InvalidDate` - When either date string is unparseable
    /// * `EngineError::InvalidRange` - When the start falls after the end
    /// * `EngineError::InvalidInput` - When the destination is empty or the
    ///   budget is negative
    pub fn validate(&self) -> Result<(CalendarDay, CalendarDay)> {
        if self.destination.trim().is_empty() {
            return Err(EngineError::invalid_input(
                "destination",
                "Destination must not be empty",
            ));
        }
        let start = parse_day(&self.start_date)?;
        let end = parse_day(&self.end_date)?;
        if start > end {
            return Err(EngineError::InvalidRange { start, end });
        }
        if let Some(budget) = self.budget {
            if budget < 0.0 {
                return Err(EngineError::invalid_input(
                    "budget",
                    format!("Budget must be non-negative, got {budget}"),
                ));
            }
        }
        Ok((start, end))
    }
}

/// Parameters for creating a new task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTask {
    /// Title of the task (required)
    pub title: String,
    /// Optional due day, `YYYY-MM-DD`; without one the task never shows
    /// on the calendar
    pub due_date: Option<String>,
    /// Optional trip to link the task to
    pub trip_id: Option<u64>,
    /// Whether the task starts out completed
    #[serde(default)]
    pub completed: bool,
}

impl CreateTask {
    /// Parses and validates the optional due date and title.
    ///
    /// # Errors
    ///
    /// * `EngineError::InvalidInput` - When the title is empty
    /// * `EngineError::InvalidDate` - When the due date is unparseable
    pub fn validate(&self) -> Result<Option<CalendarDay>> {
        if self.title.trim().is_empty() {
            return Err(EngineError::invalid_input(
                "title",
                "Task title must not be empty",
            ));
        }
        self.due_date.as_deref().map(parse_day).transpose()
    }
}

/// Parameters for moving a trip or task to a new day.
///
/// Used by the drag-and-drop reschedule path; deliberately carries no
/// conflict-check flag because moves are exempt from conflict checking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveEvent {
    /// ID of the record to move
    pub id: u64,
    /// Target day, `YYYY-MM-DD`
    pub target: String,
}
