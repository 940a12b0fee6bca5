//! Calendar-day normalization.
//!
//! Every component of the engine compares [`CalendarDay`] values, never raw
//! timestamps. Normalization extracts the calendar fields of a timestamp
//! in the system timezone rather than doing epoch arithmetic, so a trip
//! starting "June 1" stays on June 1 regardless of UTC offset or daylight
//! saving.

use jiff::{tz::TimeZone, Timestamp, Zoned};

use crate::error::{EngineError, Result};

/// A date with no time-of-day component.
///
/// `jiff::civil::Date` compares by exact (year, month, day) field equality,
/// which is exactly the comparison contract the engine requires.
pub type CalendarDay = jiff::civil::Date;

/// Canonicalizes a timestamp to the calendar day it falls on in the
/// system timezone.
pub fn normalize(timestamp: &Timestamp) -> CalendarDay {
    timestamp.to_zoned(TimeZone::system()).date()
}

/// Parses a `YYYY-MM-DD` string into a [`CalendarDay`].
///
/// # Errors
///
/// * `EngineError::InvalidDate` - When the input is unparseable or names an
///   impossible date (e.g. `2025-02-30`)
pub fn parse_day(input: &str) -> Result<CalendarDay> {
    input
        .trim()
        .parse::<CalendarDay>()
        .map_err(|e| EngineError::invalid_date(input, e))
}

/// The current calendar day in the system timezone.
pub fn today() -> CalendarDay {
    Zoned::now().date()
}
