use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{FilterArgs, MonthArgs, TaskCommands, TripCommands};

/// Main command-line interface for the Trek travel planner
///
/// Trek keeps trips and their tasks on a single calendar: add trips
/// (rejecting date conflicts), attach tasks, filter what the month view
/// shows, and drag-style move either a task's due date or a whole trip
/// span without changing its length.
#[derive(Parser)]
#[command(version, about, name = "trek")]
pub struct Args {
    /// Path to the JSON data file. Defaults to
    /// $XDG_DATA_HOME/trek/trek.json
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Trek CLI
///
/// The CLI is organized into four command categories:
/// - `month`: render the calendar grid for a month
/// - `day`: list the events on one day
/// - `trip`: manage trips (add with conflict checking, move, status, ...)
/// - `task`: manage tasks (add, move, toggle, ...)
#[derive(Subcommand)]
pub enum Commands {
    /// Show the month calendar (default: current month)
    #[command(alias = "m")]
    Month(MonthArgs),
    /// Show the events on a single day
    #[command(alias = "d")]
    Day {
        /// Day to show, YYYY-MM-DD
        date: String,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Manage trips
    #[command(alias = "tr")]
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
    /// Manage tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
}
