//! Status enumeration for trips.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of trip statuses.
///
/// A trip marked [`TripStatus::Completed`] is suppressed from every
/// calendar day regardless of whether the day still falls inside its date
/// range, so past trips do not clutter ongoing views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    /// Trip has not started yet
    #[default]
    Upcoming,

    /// Trip is currently in progress
    Ongoing,

    /// Trip has finished and is hidden from the calendar
    Completed,
}

impl FromStr for TripStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upcoming" => Ok(TripStatus::Upcoming),
            "ongoing" => Ok(TripStatus::Ongoing),
            "completed" => Ok(TripStatus::Completed),
            _ => Err(format!("Invalid trip status: {s}")),
        }
    }
}

impl TripStatus {
    /// Convert to the storage string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Upcoming => "upcoming",
            TripStatus::Ongoing => "ongoing",
            TripStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            TripStatus::Upcoming => "○ Upcoming",
            TripStatus::Ongoing => "➤ Ongoing",
            TripStatus::Completed => "✓ Completed",
        }
    }
}
