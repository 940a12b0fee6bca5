//! Inclusive date-range overlap checking.
//!
//! One predicate serves both conflict detection (trip range vs. trip
//! range) and day-membership testing (a single day treated as a range
//! where start equals end).

use super::CalendarDay;
use crate::error::{EngineError, Result};

/// Determines whether two inclusive date ranges overlap.
///
/// Overlap rule: `a_start <= b_end && b_start <= a_end`. Adjacent ranges
/// (one ending the day before the other starts) do not overlap.
///
/// # Errors
///
/// * `EngineError::InvalidRange` - When either pair has start after end.
///   That precondition violation is a caller bug, not a recoverable state.
pub fn ranges_overlap(
    a_start: CalendarDay,
    a_end: CalendarDay,
    b_start: CalendarDay,
    b_end: CalendarDay,
) -> Result<bool> {
    check_range(a_start, a_end)?;
    check_range(b_start, b_end)?;
    Ok(a_start <= b_end && b_start <= a_end)
}

/// Tests whether a single day falls within an inclusive range.
pub fn day_in_range(day: CalendarDay, start: CalendarDay, end: CalendarDay) -> Result<bool> {
    ranges_overlap(day, day, start, end)
}

fn check_range(start: CalendarDay, end: CalendarDay) -> Result<()> {
    if start > end {
        return Err(EngineError::InvalidRange { start, end });
    }
    Ok(())
}
