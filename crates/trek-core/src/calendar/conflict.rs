//! Date-range conflict detection for proposed trips.

use super::{ranges_overlap, CalendarDay};
use crate::{error::Result, models::Trip};

/// Scans existing trips for one overlapping the proposed date range.
///
/// Returns the first overlapping trip in the caller's iteration order
/// (typically most-recently-created-first, matching how the storage
/// collaborator lists trips), or `None` if the range is clean. The slice
/// must already be scoped to the requesting user; the detector does not
/// filter by user itself.
///
/// The result is advisory: the detector never blocks creation, the caller
/// decides whether to reject. This check runs only for trip creation.
/// Editing an existing trip's dates and drag-rescheduling are exempt from
/// conflict checking; that asymmetry is long-standing behavior kept as-is
/// pending a product decision.
///
/// # Errors
///
/// * `EngineError::InvalidRange` - When the proposed range or a stored
///   trip's range has start after end
pub fn find_conflict<'a>(
    proposed_start: CalendarDay,
    proposed_end: CalendarDay,
    existing_trips: &'a [Trip],
) -> Result<Option<&'a Trip>> {
    for trip in existing_trips {
        if ranges_overlap(proposed_start, proposed_end, trip.start_date, trip.end_date)? {
            return Ok(Some(trip));
        }
    }
    Ok(None)
}
