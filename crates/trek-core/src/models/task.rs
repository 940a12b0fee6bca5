//! Task model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    calendar::CalendarDay,
    error::{EngineError, Result},
};

/// Represents a single to-do item, optionally linked to a trip.
///
/// A task with no due date is invisible to the calendar. The only fields
/// the engine ever mutates are `due_date` (via the rescheduler) and
/// `completed` (via the toggle action); everything else belongs to the
/// storage collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: u64,

    /// ID of the owning user
    pub user_id: u64,

    /// Optional reference to the trip this task belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<u64>,

    /// Brief title of the task
    pub title: String,

    /// Detailed multi-line description of the task
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Day the task is due; tasks without one never appear on the calendar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<CalendarDay>,

    /// Whether the task has been completed
    #[serde(default)]
    pub completed: bool,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the task was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Task {
    /// Creates a new pending task, validating the title.
    ///
    /// # Errors
    ///
    /// * `EngineError::InvalidInput` - When the title is empty
    pub fn new(
        id: u64,
        user_id: u64,
        title: impl Into<String>,
        due_date: Option<CalendarDay>,
    ) -> Result<Self> {
        let now = Timestamp::now();
        let task = Self {
            id,
            user_id,
            trip_id: None,
            title: title.into(),
            description: None,
            due_date,
            completed: false,
            created_at: now,
            updated_at: now,
        };
        task.validate()?;
        Ok(task)
    }

    /// Links the task to a trip.
    pub fn with_trip(mut self, trip_id: u64) -> Self {
        self.trip_id = Some(trip_id);
        self
    }

    /// Re-checks the record invariants.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(EngineError::invalid_input(
                "title",
                "Task title must not be empty",
            ));
        }
        Ok(())
    }
}
