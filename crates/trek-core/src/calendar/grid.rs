//! Month grid construction.

use super::CalendarDay;
use crate::error::{EngineError, Result};

/// Builds the ordered cell sequence for a month view.
///
/// The sequence is `leading_blanks + days_in_month` long: one `None` per
/// blank cell before the 1st (the weekday index of the month's first day,
/// Sunday = 0), then `Some(day)` for each calendar day in order. Pure
/// function of `(year, month)`.
///
/// # Errors
///
/// * `EngineError::InvalidDate` - When `(year, month)` does not name a
///   real month (month outside 1..=12 or year outside jiff's range)
pub fn build_month(year: i16, month: i8) -> Result<Vec<Option<CalendarDay>>> {
    let first = CalendarDay::new(year, month, 1)
        .map_err(|e| EngineError::invalid_date(format!("{year:04}-{month:02}"), e))?;

    let leading_blanks = first.weekday().to_sunday_zero_offset() as usize;
    let days_in_month = first.days_in_month();

    let mut cells: Vec<Option<CalendarDay>> =
        Vec::with_capacity(leading_blanks + days_in_month as usize);
    cells.resize(leading_blanks, None);
    for day in 1..=days_in_month {
        let date = CalendarDay::new(year, month, day)
            .map_err(|e| EngineError::invalid_date(format!("{year:04}-{month:02}-{day:02}"), e))?;
        cells.push(Some(date));
    }
    Ok(cells)
}
