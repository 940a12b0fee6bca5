//! Core library for the Trek travel planning application.
//!
//! This crate provides the calendar aggregation and scheduling engine:
//! it merges trip and task records into a unified per-day event view
//! under caller-selected filters, detects date-range conflicts for
//! proposed trips, and supports duration-preserving rescheduling of
//! tasks and entire trip spans.
//!
//! The engine is a pure library. It consumes plain records owned by a
//! storage collaborator and returns derived view structures; it performs
//! no I/O, holds no caches, and never blocks. All date reasoning operates
//! on [`calendar::CalendarDay`] values (civil dates with no time-of-day
//! component) so that comparisons are exact field equality rather than
//! epoch arithmetic.
//!
//! # Quick Start
//!
//! ```rust
//! use trek_core::{
//!     calendar::{self, events_for_day},
//!     models::{EventFilter, Trip},
//! };
//!
//! # fn example() -> trek_core::Result<()> {
//! let trip = Trip::new(
//!     1,
//!     1,
//!     "Kyoto",
//!     calendar::parse_day("2026-04-01")?,
//!     calendar::parse_day("2026-04-07")?,
//! )?;
//!
//! let day = calendar::parse_day("2026-04-03")?;
//! let events = events_for_day(day, std::slice::from_ref(&trip), &[], &EventFilter::default())?;
//! assert_eq!(events.trips.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod display;
pub mod error;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use calendar::{
    build_month, events_for_day, find_conflict, month_events, ranges_overlap, reschedule_task,
    reschedule_trip, toggle_task, CalendarDay, DayEvents,
};
pub use error::{EngineError, Result};
pub use models::{EventFilter, Task, Trip, TripStatus};
pub use params::{CreateTask, CreateTrip, Id, MoveEvent};
