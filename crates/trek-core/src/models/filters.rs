//! Filter types controlling which events the aggregator emits.

use serde::{Deserialize, Serialize};

/// Caller-held selection of which event kinds are visible on the calendar.
///
/// This is transient UI state threaded as an explicit parameter into every
/// aggregation call. It governs aggregator output only and never mutates
/// the underlying records.
///
/// Task visibility is a three-state combination over the `pending` and
/// `completed` flags forming an explicit 2x2 truth table:
///
/// | pending | completed | tasks shown        |
/// |---------|-----------|--------------------|
/// | false   | false     | none               |
/// | true    | false     | pending only       |
/// | false   | true      | completed only     |
/// | true    | true      | all                |
///
/// The "neither selected" case hides tasks entirely rather than defaulting
/// to show-all.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventFilter {
    /// Show trips on the calendar
    pub trips: bool,

    /// Show tasks that are not yet completed
    pub pending: bool,

    /// Show tasks that have been completed
    pub completed: bool,
}

impl Default for EventFilter {
    /// Everything visible, matching the calendar's initial state.
    fn default() -> Self {
        Self {
            trips: true,
            pending: true,
            completed: true,
        }
    }
}

impl EventFilter {
    /// A filter that hides every event kind.
    pub fn none() -> Self {
        Self {
            trips: false,
            pending: false,
            completed: false,
        }
    }

    /// Whether trips pass this filter.
    pub fn allows_trips(&self) -> bool {
        self.trips
    }

    /// Whether a task with the given completion state passes this filter.
    pub fn allows_task(&self, completed: bool) -> bool {
        match (self.pending, self.completed) {
            (false, false) => false,
            (true, false) => !completed,
            (false, true) => completed,
            (true, true) => true,
        }
    }
}
