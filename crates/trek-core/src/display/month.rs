//! Month-grid and day-listing display wrappers.

use std::fmt;

use super::date::{LongDay, MonthTitle};
use crate::calendar::{CalendarDay, DayEvents};

const WEEKDAY_HEADER: &str = "| Sun | Mon | Tue | Wed | Thu | Fri | Sat |";
const WEEKDAY_RULE: &str = "|-----|-----|-----|-----|-----|-----|-----|";

/// Renders a month's aggregated cells as a 7-column markdown table.
///
/// Each day cell shows the day number followed by one marker per visible
/// event: `*` for a trip, `.` for a pending task, `x` for a completed
/// task. Blank leading cells and trailing cells stay empty.
pub struct MonthView<'a> {
    first: CalendarDay,
    cells: &'a [Option<DayEvents<'a>>],
}

impl<'a> MonthView<'a> {
    /// Wraps the cells produced by [`crate::calendar::month_events`].
    /// `first` is any day inside the displayed month (used for the title).
    pub fn new(first: CalendarDay, cells: &'a [Option<DayEvents<'a>>]) -> Self {
        Self { first, cells }
    }

    fn write_cell(f: &mut fmt::Formatter<'_>, cell: &Option<DayEvents<'_>>) -> fmt::Result {
        match cell {
            None => write!(f, "     |"),
            Some(events) => {
                let mut markers = String::new();
                markers.push_str(&"*".repeat(events.trips.len()));
                for task in &events.tasks {
                    markers.push(if task.completed { 'x' } else { '.' });
                }
                if markers.is_empty() {
                    write!(f, " {:>2}  |", events.date.day())
                } else {
                    write!(f, " {:>2}{} |", events.date.day(), markers)
                }
            }
        }
    }
}

impl fmt::Display for MonthView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", MonthTitle(self.first))?;
        writeln!(f)?;
        writeln!(f, "{WEEKDAY_HEADER}")?;
        writeln!(f, "{WEEKDAY_RULE}")?;

        for week in self.cells.chunks(7) {
            write!(f, "|")?;
            for cell in week {
                Self::write_cell(f, cell)?;
            }
            // Pad the last week out to seven columns
            for _ in week.len()..7 {
                write!(f, "     |")?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "Markers: * trip, . pending task, x completed task")?;
        Ok(())
    }
}

/// Listing form of one day's events, used for day detail output.
impl fmt::Display for DayEvents<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", LongDay(self.date))?;
        writeln!(f)?;

        if self.is_empty() {
            writeln!(f, "No events on this day.")?;
            return Ok(());
        }

        if !self.trips.is_empty() {
            writeln!(f, "## Trips ({})", self.trips.len())?;
            writeln!(f)?;
            for trip in &self.trips {
                writeln!(
                    f,
                    "- {} ({} to {}, {})",
                    trip.destination, trip.start_date, trip.end_date, trip.status
                )?;
            }
            writeln!(f)?;
        }

        if !self.tasks.is_empty() {
            writeln!(f, "## Tasks ({})", self.tasks.len())?;
            writeln!(f)?;
            for task in &self.tasks {
                write!(f, "{task}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::{
        calendar::month_events,
        display::MonthView,
        models::{EventFilter, Trip},
    };

    #[test]
    fn test_month_view_renders_table() {
        let trips =
            vec![Trip::new(1, 1, "Lisbon", date(2024, 2, 10), date(2024, 2, 12)).unwrap()];
        let cells = month_events(2024, 2, &trips, &[], &EventFilter::default()).unwrap();
        let view = MonthView::new(date(2024, 2, 1), &cells);
        let output = format!("{view}");

        assert!(output.contains("# February 2024"));
        assert!(output.contains("| Sun |"));
        assert!(output.contains("10*"));
        assert!(output.contains("29"));
    }

    #[test]
    fn test_day_events_listing() {
        let trips =
            vec![Trip::new(1, 1, "Lisbon", date(2024, 2, 10), date(2024, 2, 12)).unwrap()];
        let events = crate::calendar::events_for_day(
            date(2024, 2, 11),
            &trips,
            &[],
            &EventFilter::default(),
        )
        .unwrap();
        let output = format!("{events}");
        assert!(output.contains("Sunday, February 11, 2024"));
        assert!(output.contains("## Trips (1)"));
        assert!(output.contains("Lisbon"));
    }

    #[test]
    fn test_day_events_empty_listing() {
        let events =
            crate::calendar::events_for_day(date(2024, 2, 1), &[], &[], &EventFilter::default())
                .unwrap();
        assert!(format!("{events}").contains("No events on this day."));
    }
}
