//! Data models for trips and tasks.
//!
//! This module contains the domain records that flow through the calendar
//! engine. Both record kinds are owned by exactly one user and are held by
//! reference inside derived views, never copied with an independent
//! lifecycle. Display implementations live in [`crate::display::models`]
//! to keep data structures separate from presentation.
//!
//! Required-field invariants (`start_date <= end_date`, non-negative
//! budget, non-empty task title) are enforced at construction time via
//! [`Trip::new`] / [`Task::new`] and can be re-checked on records arriving
//! from storage via the `validate` methods.

pub mod filters;
pub mod status;
pub mod task;
pub mod trip;


// Re-export all public types at the models level
pub use filters::EventFilter;
pub use status::TripStatus;
pub use task::Task;
pub use trip::Trip;
