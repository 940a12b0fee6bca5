//! Display implementations for domain models.
//!
//! Separated from the model definitions to keep data structures and
//! presentation apart. Output is markdown suitable for the terminal
//! renderer.

use std::fmt;

use super::date::LocalDateTime;
use crate::models::{Task, Trip, TripStatus};

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) ({})",
            self.destination,
            self.id,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        writeln!(f, "- **Dates**: {} to {}", self.start_date, self.end_date)?;
        if let Some(budget) = self.budget {
            writeln!(f, "- **Budget**: ${budget:.2}")?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let checkbox = if self.completed { "[x]" } else { "[ ]" };
        write!(f, "- {checkbox} {} (ID: {})", self.title, self.id)?;
        if let Some(due) = self.due_date {
            write!(f, " due {due}")?;
        }
        if let Some(trip_id) = self.trip_id {
            write!(f, " (trip {trip_id})")?;
        }
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "  {desc}")?;
        }

        Ok(())
    }
}
