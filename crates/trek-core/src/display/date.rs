//! Date and time display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use crate::calendar::CalendarDay;

/// A wrapper around [`Timestamp`] that formats it in the system timezone
/// via the `Display` trait.
///
/// The display format follows the pattern `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Formats a calendar day in long form, e.g. `Thursday, February 29, 2024`.
pub struct LongDay(pub CalendarDay);

impl fmt::Display for LongDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%A, %B %d, %Y"))
    }
}

/// Formats the month a calendar day falls in, e.g. `February 2024`.
pub struct MonthTitle(pub CalendarDay);

impl fmt::Display for MonthTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%B %Y"))
    }
}
