//! Trip model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::TripStatus;
use crate::{
    calendar::CalendarDay,
    error::{EngineError, Result},
};

/// Represents a trip occupying an inclusive range of calendar days.
///
/// Invariant: `start_date <= end_date` holds after construction and after
/// every engine mutation. The engine never deletes trips; deletion is a
/// storage-collaborator operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    /// Unique identifier for the trip
    pub id: u64,

    /// ID of the owning user
    pub user_id: u64,

    /// Destination label
    pub destination: String,

    /// First day of the trip (inclusive)
    pub start_date: CalendarDay,

    /// Last day of the trip (inclusive)
    pub end_date: CalendarDay,

    /// Current status of the trip
    #[serde(default)]
    pub status: TripStatus,

    /// Optional budget in the user's currency (non-negative)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,

    /// Free-form notes about the trip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Timestamp when the trip was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the trip was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Trip {
    /// Creates a new upcoming trip, validating the date range.
    ///
    /// # Errors
    ///
    /// * `EngineError::InvalidRange` - When `start_date` is after `end_date`
    pub fn new(
        id: u64,
        user_id: u64,
        destination: impl Into<String>,
        start_date: CalendarDay,
        end_date: CalendarDay,
    ) -> Result<Self> {
        let now = Timestamp::now();
        let trip = Self {
            id,
            user_id,
            destination: destination.into(),
            start_date,
            end_date,
            status: TripStatus::Upcoming,
            budget: None,
            notes: None,
            created_at: now,
            updated_at: now,
        };
        trip.validate()?;
        Ok(trip)
    }

    /// Sets the budget, validating that it is non-negative.
    pub fn with_budget(mut self, budget: f64) -> Result<Self> {
        if budget < 0.0 {
            return Err(EngineError::invalid_input(
                "budget",
                format!("Budget must be non-negative, got {budget}"),
            ));
        }
        self.budget = Some(budget);
        Ok(self)
    }

    /// Sets the notes field.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Re-checks the record invariants.
    ///
    /// Useful for records deserialized from the storage collaborator,
    /// which may predate construction-time validation.
    pub fn validate(&self) -> Result<()> {
        if self.destination.trim().is_empty() {
            return Err(EngineError::invalid_input(
                "destination",
                "Destination must not be empty",
            ));
        }
        if self.start_date > self.end_date {
            return Err(EngineError::InvalidRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if let Some(budget) = self.budget {
            if budget < 0.0 {
                return Err(EngineError::invalid_input(
                    "budget",
                    format!("Budget must be non-negative, got {budget}"),
                ));
            }
        }
        Ok(())
    }

    /// Inclusive length of the trip in days.
    pub fn len_days(&self) -> i64 {
        // start <= end is a struct invariant, so the difference is valid
        let nights = self.end_date.since(self.start_date).map(|s| s.get_days());
        i64::from(nights.unwrap_or(0)) + 1
    }
}
