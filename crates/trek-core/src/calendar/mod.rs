//! Calendar aggregation and scheduling engine.
//!
//! This module merges the trip and task record streams into per-day event
//! views, detects date-range conflicts for proposed trips, and reschedules
//! tasks or whole trip spans while preserving duration.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────┐   per day   ┌──────────────┐   cells   ┌──────────┐
//! │ Grid Builder │────────────▶│  Aggregator  │──────────▶│ Renderer │
//! │   (grid)     │             │ (aggregate)  │           │ (caller) │
//! └──────────────┘             └──────────────┘           └──────────┘
//!
//! trip form ──▶ Conflict Detector (conflict) ──▶ accept / reject
//! drag drop ──▶ Rescheduler (reschedule) ──▶ caller persists, re-aggregates
//! ```
//!
//! ## Submodules
//!
//! - [`day`]: calendar-day normalization shared by every other component
//! - [`overlap`]: the single inclusive-range overlap predicate
//! - [`aggregate`]: per-day and per-month event projection under filters
//! - [`conflict`]: first-overlap scan for proposed trips
//! - [`reschedule`]: duration-preserving moves and the completed toggle
//! - [`grid`]: leading blanks plus day cells for a month
//!
//! ## Design Principles
//!
//! 1. **Synchronous and pure**: every operation is a single terminating
//!    computation over immutable inputs; there is no shared mutable state,
//!    no cache, and no suspension point.
//! 2. **Civil dates only**: all comparisons operate on [`CalendarDay`]
//!    values compared field by field, never on raw timestamps.
//! 3. **Advisory results**: the conflict detector reports, the caller
//!    decides; reschedulers return new values for the caller to persist.

pub mod aggregate;
pub mod conflict;
pub mod day;
pub mod grid;
pub mod overlap;
pub mod reschedule;


// Re-export the engine surface
pub use aggregate::{events_for_day, month_events, DayEvents};
pub use conflict::find_conflict;
pub use day::{normalize, parse_day, today, CalendarDay};
pub use grid::build_month;
pub use overlap::{day_in_range, ranges_overlap};
pub use reschedule::{parse_target, reschedule_task, reschedule_trip, toggle_task};
