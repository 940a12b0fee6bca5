//! Drag-and-drop rescheduling of tasks and trip spans.
//!
//! Reschedulers return updated copies for the caller to hand to the
//! storage collaborator; nothing is persisted here, and no conflict check
//! runs on a move (the same exemption trip edits have).

use jiff::Timestamp;

use super::{day::parse_day, CalendarDay};
use crate::{
    error::{EngineError, Result},
    models::{Task, Trip},
};

/// Returns a copy of the task due on `target`, all other fields unchanged.
pub fn reschedule_task(task: &Task, target: CalendarDay) -> Task {
    Task {
        due_date: Some(target),
        updated_at: Timestamp::now(),
        ..task.clone()
    }
}

/// Returns a copy of the trip shifted to start on `new_start`.
///
/// The duration in whole days is preserved exactly: the new end is
/// `new_start` plus the original inclusive-range length minus one. The
/// user is never asked to confirm a duration change during a drag.
///
/// # Errors
///
/// * `EngineError::InvalidRange` - When the trip record carries an
///   inverted date range
/// * `EngineError::InvalidTarget` - When the shifted end date falls
///   outside the representable calendar
pub fn reschedule_trip(trip: &Trip, new_start: CalendarDay) -> Result<Trip> {
    if trip.start_date > trip.end_date {
        return Err(EngineError::InvalidRange {
            start: trip.start_date,
            end: trip.end_date,
        });
    }
    let duration = trip
        .start_date
        .until(trip.end_date)
        .map_err(|e| EngineError::invalid_target(new_start.to_string(), e.to_string()))?;
    let new_end = new_start
        .checked_add(duration)
        .map_err(|e| EngineError::invalid_target(new_start.to_string(), e.to_string()))?;
    Ok(Trip {
        start_date: new_start,
        end_date: new_end,
        updated_at: Timestamp::now(),
        ..trip.clone()
    })
}

/// Returns a copy of the task with the completed flag flipped.
pub fn toggle_task(task: &Task) -> Task {
    Task {
        completed: !task.completed,
        updated_at: Timestamp::now(),
        ..task.clone()
    }
}

/// Resolves a raw drop-target string to a calendar day.
///
/// # Errors
///
/// * `EngineError::InvalidTarget` - When the target does not normalize to
///   a valid calendar day
pub fn parse_target(input: &str) -> Result<CalendarDay> {
    parse_day(input).map_err(|e| EngineError::invalid_target(input, e.to_string()))
}
