//! Per-day event projection under filters.

use super::{day_in_range, grid::build_month, CalendarDay};
use crate::{
    error::Result,
    models::{EventFilter, Task, Trip, TripStatus},
};

/// The events occupying one calendar day.
///
/// A derived, ephemeral view holding references into the caller's records.
/// It is recomputed on every aggregation call and never cached, since the
/// underlying data can change between calls.
#[derive(Debug)]
pub struct DayEvents<'a> {
    /// The day these events fall on
    pub date: CalendarDay,

    /// Trips whose date range contains the day
    pub trips: Vec<&'a Trip>,

    /// Tasks due on the day
    pub tasks: Vec<&'a Task>,
}

impl DayEvents<'_> {
    /// Total number of events on this day.
    pub fn len(&self) -> usize {
        self.trips.len() + self.tasks.len()
    }

    /// Whether the day has no visible events.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty() && self.tasks.is_empty()
    }
}

/// Projects the trip and task records onto a single calendar day.
///
/// Structural rules, applied before any filtering:
///
/// - A trip appears iff the day falls in its inclusive date range AND its
///   status is not [`TripStatus::Completed`]. Completed trips are
///   suppressed on every day regardless of filter state.
/// - A task appears iff it has a due date equal to the day. Tasks without
///   a due date are invisible to the calendar.
///
/// The filter set is applied afterwards: the `trips` flag drops all trips,
/// and task visibility follows the [`EventFilter`] truth table.
///
/// Pure function of its inputs; calling it twice with identical inputs
/// yields structurally identical output. O(trips + tasks) per call, which
/// is fine for the record counts this system sees (tens, not thousands).
///
/// # Errors
///
/// * `EngineError::InvalidRange` - When a trip record carries an inverted
///   date range, which construction-time validation should have rejected
pub fn events_for_day<'a>(
    day: CalendarDay,
    trips: &'a [Trip],
    tasks: &'a [Task],
    filter: &EventFilter,
) -> Result<DayEvents<'a>> {
    let mut day_trips = Vec::new();
    for trip in trips {
        if trip.status == TripStatus::Completed {
            continue;
        }
        if day_in_range(day, trip.start_date, trip.end_date)? {
            day_trips.push(trip);
        }
    }

    let mut day_tasks: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.due_date == Some(day))
        .collect();

    // Filters run after the structural rules, never before
    if !filter.allows_trips() {
        day_trips.clear();
    }
    day_tasks.retain(|task| filter.allows_task(task.completed));

    Ok(DayEvents {
        date: day,
        trips: day_trips,
        tasks: day_tasks,
    })
}

/// Aggregates events for every cell of a month grid.
///
/// Drives [`events_for_day`] once per day cell of [`build_month`]; leading
/// blank cells stay `None`.
pub fn month_events<'a>(
    year: i16,
    month: i8,
    trips: &'a [Trip],
    tasks: &'a [Task],
    filter: &EventFilter,
) -> Result<Vec<Option<DayEvents<'a>>>> {
    build_month(year, month)?
        .into_iter()
        .map(|cell| match cell {
            Some(day) => events_for_day(day, trips, tasks, filter).map(Some),
            None => Ok(None),
        })
        .collect()
}
