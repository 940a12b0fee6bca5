//! Display formatting for calendar views and domain models.
//!
//! All formatters produce markdown for rich terminal display, following a
//! newtype-wrapper approach: domain models implement [`std::fmt::Display`]
//! directly for standalone formatting, and wrapper types provide
//! contextual formatting (a month grid, a day's event listing, localized
//! timestamps). Presentation only; no engine logic lives here.
//!
//! ## Module Organization
//!
//! - [`date`]: date/time formatting wrappers
//! - [`models`]: Display implementations for [`crate::models`] types
//! - [`month`]: month-grid and day-listing wrappers

pub mod date;
pub mod models;
pub mod month;

// Re-export commonly used types for convenience
pub use date::{LocalDateTime, LongDay, MonthTitle};
pub use month::MonthView;
