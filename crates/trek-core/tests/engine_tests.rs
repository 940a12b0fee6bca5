//! End-to-end tests for the calendar engine's behavioral guarantees.

use jiff::civil::date;

use trek_core::{
    calendar::{self, CalendarDay},
    models::{EventFilter, Task, Trip, TripStatus},
};

fn trip(id: u64, start: CalendarDay, end: CalendarDay) -> Trip {
    Trip::new(id, 1, format!("Destination {id}"), start, end).expect("valid trip")
}

fn task(id: u64, due: CalendarDay, completed: bool) -> Task {
    let mut t = Task::new(id, 1, format!("Task {id}"), Some(due)).expect("valid task");
    t.completed = completed;
    t
}

#[test]
fn range_invariant_holds_across_rescheduling() {
    let original = trip(1, date(2026, 3, 10), date(2026, 3, 17));
    assert!(original.start_date <= original.end_date);

    for target in [
        date(2025, 12, 31),
        date(2026, 2, 28),
        date(2026, 3, 10),
        date(2028, 2, 29),
    ] {
        let moved = calendar::reschedule_trip(&original, target).expect("reschedule");
        assert!(moved.start_date <= moved.end_date);
        moved.validate().expect("moved trip keeps its invariants");
    }
}

#[test]
fn single_day_overlap_is_equality() {
    let days = [
        date(2026, 1, 1),
        date(2026, 1, 2),
        date(2026, 12, 31),
        date(2024, 2, 29),
    ];
    for a in days {
        for b in days {
            let overlap = calendar::ranges_overlap(a, a, b, b).expect("valid ranges");
            assert_eq!(overlap, a == b, "overlaps({a},{a},{b},{b})");
        }
    }
}

#[test]
fn reschedule_preserves_duration_exactly() {
    for (start, end) in [
        (date(2026, 6, 1), date(2026, 6, 1)),
        (date(2026, 6, 1), date(2026, 6, 10)),
        (date(2026, 12, 28), date(2027, 1, 3)),
        (date(2024, 2, 26), date(2024, 3, 1)),
    ] {
        let original = trip(1, start, end);
        let duration = original.len_days();
        for target in [date(2026, 1, 15), date(2026, 7, 4), date(2027, 2, 28)] {
            let moved = calendar::reschedule_trip(&original, target).expect("reschedule");
            assert_eq!(moved.start_date, target);
            assert_eq!(moved.len_days(), duration);
        }
    }
}

#[test]
fn filter_truth_table_independent_of_trips_flag() {
    let day = date(2026, 6, 5);
    let trips = vec![trip(1, date(2026, 6, 1), date(2026, 6, 10))];
    let tasks = vec![task(10, day, false), task(11, day, true)];

    for trips_flag in [false, true] {
        let combos = [
            (false, false, 0usize),
            (true, false, 1),
            (false, true, 1),
            (true, true, 2),
        ];
        for (pending, completed, expected_tasks) in combos {
            let filter = EventFilter {
                trips: trips_flag,
                pending,
                completed,
            };
            let events = calendar::events_for_day(day, &trips, &tasks, &filter).expect("events");
            assert_eq!(events.tasks.len(), expected_tasks);
            assert_eq!(events.trips.len(), usize::from(trips_flag));
        }
    }
}

#[test]
fn conflict_detection_inclusive_and_adjacent_boundary() {
    let existing = vec![trip(1, date(2026, 6, 1), date(2026, 6, 10))];

    // Overlapping proposal reports trip A
    let conflict = calendar::find_conflict(date(2026, 6, 5), date(2026, 6, 15), &existing)
        .expect("valid ranges");
    assert_eq!(conflict.map(|t| t.id), Some(1));

    // Adjacent proposal starting the day after A ends is clean
    let clean = calendar::find_conflict(date(2026, 6, 11), date(2026, 6, 20), &existing)
        .expect("valid ranges");
    assert!(clean.is_none());
}

#[test]
fn conflict_detection_respects_caller_iteration_order() {
    // Most-recently-created-first ordering: the newer trip wins the scan
    let newer = trip(2, date(2026, 6, 6), date(2026, 6, 8));
    let older = trip(1, date(2026, 6, 1), date(2026, 6, 10));
    let existing = vec![newer, older];

    let conflict = calendar::find_conflict(date(2026, 6, 7), date(2026, 6, 7), &existing)
        .expect("valid ranges")
        .expect("overlap");
    assert_eq!(conflict.id, 2);
}

#[test]
fn leap_year_february_grid() {
    let cells = calendar::build_month(2024, 2).expect("valid month");
    let day_cells: Vec<_> = cells.iter().flatten().collect();
    let blanks = cells.iter().filter(|c| c.is_none()).count();

    assert_eq!(day_cells.len(), 29);
    assert_eq!(blanks, 4); // Feb 1, 2024 is a Thursday
    assert_eq!(cells[4], Some(date(2024, 2, 1)));
}

#[test]
fn aggregation_is_idempotent() {
    let day = date(2026, 6, 5);
    let trips = vec![
        trip(1, date(2026, 6, 1), date(2026, 6, 10)),
        trip(2, date(2026, 6, 5), date(2026, 6, 5)),
    ];
    let tasks = vec![task(10, day, false), task(11, day, true)];
    let filter = EventFilter::default();

    let first = calendar::events_for_day(day, &trips, &tasks, &filter).expect("events");
    let second = calendar::events_for_day(day, &trips, &tasks, &filter).expect("events");

    assert_eq!(first.date, second.date);
    let ids = |events: &trek_core::DayEvents<'_>| {
        (
            events.trips.iter().map(|t| t.id).collect::<Vec<_>>(),
            events.tasks.iter().map(|t| t.id).collect::<Vec<_>>(),
        )
    };
    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn completed_trip_never_appears_even_spanning_today() {
    let today = calendar::today();
    let mut completed = trip(
        1,
        today.yesterday().unwrap_or(today),
        today.tomorrow().unwrap_or(today),
    );
    completed.status = TripStatus::Completed;
    let trips = vec![completed];

    let filters = [
        EventFilter::default(),
        EventFilter {
            trips: true,
            pending: false,
            completed: false,
        },
        EventFilter::none(),
    ];
    for filter in filters {
        for day in [
            today.yesterday().unwrap_or(today),
            today,
            today.tomorrow().unwrap_or(today),
        ] {
            let events = calendar::events_for_day(day, &trips, &[], &filter).expect("events");
            assert!(events.trips.is_empty());
        }
    }
}

#[test]
fn tasks_without_due_dates_stay_invisible_across_month() {
    let homeless = Task::new(1, 1, "No due date", None).expect("valid task");
    let tasks = vec![homeless];
    let cells = calendar::month_events(2026, 6, &[], &tasks, &EventFilter::default())
        .expect("valid month");
    for cell in cells.into_iter().flatten() {
        assert!(cell.tasks.is_empty());
    }
}
