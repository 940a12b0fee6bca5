//! Command handling and clap argument wrappers.
//!
//! Implements the parameter wrapper pattern: clap-derived argument structs
//! convert into trek-core's framework-free `params` types via
//! `into_params()`, keeping CLI concerns out of the engine. Handlers load
//! the JSON store, run the engine, persist mutations, and render the
//! markdown the core's display layer produces.

use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Subcommand};
use jiff::Timestamp;
use log::{debug, info};
use trek_core::{
    calendar::{self, parse_day, parse_target},
    display::MonthView,
    models::{EventFilter, Task, Trip, TripStatus},
    params::{CreateTask, CreateTrip, MoveEvent},
};

use crate::{renderer::TerminalRenderer, store::JsonStore};

/// The store is single-user; every record is owned by this id.
const DEFAULT_USER_ID: u64 = 1;

/// Filter flags shared by the month and day views.
///
/// Visibility defaults to everything; each flag removes one event kind,
/// mirroring unchecking a filter box on the calendar.
#[derive(Args)]
pub struct FilterArgs {
    /// Hide trips
    #[arg(long)]
    pub no_trips: bool,

    /// Hide pending tasks
    #[arg(long)]
    pub no_pending: bool,

    /// Hide completed tasks
    #[arg(long)]
    pub no_completed: bool,
}

impl FilterArgs {
    pub fn into_filter(self) -> EventFilter {
        EventFilter {
            trips: !self.no_trips,
            pending: !self.no_pending,
            completed: !self.no_completed,
        }
    }
}

/// Arguments for the month view.
#[derive(Args)]
pub struct MonthArgs {
    /// Year to show (defaults to the current year)
    #[arg(long, short)]
    pub year: Option<i16>,

    /// Month to show, 1-12 (defaults to the current month)
    #[arg(long, short)]
    pub month: Option<i8>,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Trip management commands
#[derive(Subcommand)]
pub enum TripCommands {
    /// Add a trip, rejecting date ranges that conflict with existing trips
    Add(TripAddArgs),
    /// List all trips
    List,
    /// Move a trip to start on a new day, preserving its duration
    Move {
        /// Trip ID
        id: u64,
        /// New first day, YYYY-MM-DD
        date: String,
    },
    /// Set a trip's status (upcoming, ongoing, completed)
    Status {
        /// Trip ID
        id: u64,
        /// New status
        status: String,
    },
    /// Remove a trip
    Remove {
        /// Trip ID
        id: u64,
    },
}

/// Arguments for adding a trip
#[derive(Args)]
pub struct TripAddArgs {
    /// Destination label
    pub destination: String,

    /// First day of the trip, YYYY-MM-DD
    #[arg(long)]
    pub start: String,

    /// Last day of the trip, YYYY-MM-DD
    #[arg(long)]
    pub end: String,

    /// Budget for the trip
    #[arg(long)]
    pub budget: Option<f64>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl TripAddArgs {
    pub fn into_params(self) -> CreateTrip {
        CreateTrip {
            destination: self.destination,
            start_date: self.start,
            end_date: self.end,
            budget: self.budget,
            notes: self.notes,
        }
    }
}

/// Task management commands
#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task
    Add(TaskAddArgs),
    /// List all tasks
    List,
    /// Move a task to a new due day
    Move {
        /// Task ID
        id: u64,
        /// New due day, YYYY-MM-DD
        date: String,
    },
    /// Toggle a task between pending and completed
    Toggle {
        /// Task ID
        id: u64,
    },
    /// Remove a task
    Remove {
        /// Task ID
        id: u64,
    },
}

/// Arguments for adding a task
#[derive(Args)]
pub struct TaskAddArgs {
    /// Title of the task
    pub title: String,

    /// Due day, YYYY-MM-DD; without one the task never shows on the calendar
    #[arg(long)]
    pub due: Option<String>,

    /// Trip to link the task to
    #[arg(long = "trip")]
    pub trip_id: Option<u64>,

    /// Create the task already completed
    #[arg(long)]
    pub completed: bool,
}

impl TaskAddArgs {
    pub fn into_params(self) -> CreateTask {
        CreateTask {
            title: self.title,
            due_date: self.due,
            trip_id: self.trip_id,
            completed: self.completed,
        }
    }
}

/// Command executor tying the store, the engine, and the renderer together.
pub struct Cli {
    store: JsonStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: JsonStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    /// Render the month grid with aggregated events.
    pub fn show_month(&self, args: MonthArgs) -> Result<()> {
        let today = calendar::today();
        let year = args.year.unwrap_or_else(|| today.year());
        let month = args.month.unwrap_or_else(|| today.month());
        let filter = args.filters.into_filter();

        let cells =
            calendar::month_events(year, month, self.store.trips(), self.store.tasks(), &filter)?;
        let first = cells
            .iter()
            .flatten()
            .next()
            .map(|events| events.date)
            .ok_or_else(|| anyhow!("Month {year}-{month:02} has no days"))?;

        self.renderer.render(&MonthView::new(first, &cells).to_string());
        Ok(())
    }

    /// Render one day's events.
    pub fn show_day(&self, date: &str, filters: FilterArgs) -> Result<()> {
        let day = parse_day(date)?;
        let filter = filters.into_filter();
        let events = calendar::events_for_day(day, self.store.trips(), self.store.tasks(), &filter)?;
        self.renderer.render(&events.to_string());
        Ok(())
    }

    pub fn handle_trip_command(&mut self, command: TripCommands) -> Result<()> {
        match command {
            TripCommands::Add(args) => self.add_trip(args.into_params()),
            TripCommands::List => self.list_trips(),
            TripCommands::Move { id, date } => self.move_trip(&MoveEvent { id, target: date }),
            TripCommands::Status { id, status } => self.set_trip_status(id, &status),
            TripCommands::Remove { id } => self.remove_trip(id),
        }
    }

    pub fn handle_task_command(&mut self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => self.add_task(args.into_params()),
            TaskCommands::List => self.list_tasks(),
            TaskCommands::Move { id, date } => self.move_task(&MoveEvent { id, target: date }),
            TaskCommands::Toggle { id } => self.toggle_task(id),
            TaskCommands::Remove { id } => self.remove_task(id),
        }
    }

    /// Create a trip after running the conflict detector.
    ///
    /// Creation is the only path that checks conflicts; moves and edits
    /// are exempt.
    fn add_trip(&mut self, params: CreateTrip) -> Result<()> {
        let (start, end) = params.validate()?;

        let existing: Vec<Trip> = self
            .store
            .trips_recent_first()
            .into_iter()
            .cloned()
            .collect();
        if let Some(conflict) = calendar::find_conflict(start, end, &existing)? {
            self.renderer.render(&format!(
                "**Date conflict**: {start} to {end} overlaps \"{}\" ({} to {}).\n",
                conflict.destination, conflict.start_date, conflict.end_date
            ));
            bail!("Cannot create trip due to a date conflict");
        }

        let id = self.store.next_id();
        let mut trip = Trip::new(id, DEFAULT_USER_ID, params.destination, start, end)?;
        if let Some(budget) = params.budget {
            trip = trip.with_budget(budget)?;
        }
        if let Some(notes) = params.notes {
            trip = trip.with_notes(notes);
        }

        info!("Created trip {id} ({start} to {end})");
        self.store.add_trip(trip.clone());
        self.store.save()?;
        self.renderer.render(&trip.to_string());
        Ok(())
    }

    fn list_trips(&self) -> Result<()> {
        let trips = self.store.trips_recent_first();
        if trips.is_empty() {
            self.renderer.render("No trips found.\n");
            return Ok(());
        }
        let mut output = String::from("# Trips\n\n");
        for trip in trips {
            output.push_str(&trip.to_string());
        }
        self.renderer.render(&output);
        Ok(())
    }

    fn move_trip(&mut self, params: &MoveEvent) -> Result<()> {
        let trip = self
            .store
            .get_trip(params.id)
            .with_context(|| format!("Trip {} not found", params.id))?;
        let target = parse_target(&params.target)?;

        // Duration-preserving move; deliberately no conflict check here
        let moved = calendar::reschedule_trip(trip, target)?;
        debug!(
            "Moved trip {} to {} - {}",
            moved.id, moved.start_date, moved.end_date
        );
        self.store.update_trip(moved.clone());
        self.store.save()?;
        self.renderer.render(&moved.to_string());
        Ok(())
    }

    fn set_trip_status(&mut self, id: u64, status: &str) -> Result<()> {
        let status = TripStatus::from_str(status).map_err(|e| anyhow!(e))?;
        let trip = self
            .store
            .get_trip(id)
            .with_context(|| format!("Trip {id} not found"))?;

        let updated = Trip {
            status,
            updated_at: Timestamp::now(),
            ..trip.clone()
        };
        self.store.update_trip(updated.clone());
        self.store.save()?;
        self.renderer.render(&updated.to_string());
        Ok(())
    }

    fn remove_trip(&mut self, id: u64) -> Result<()> {
        let removed = self
            .store
            .remove_trip(id)
            .with_context(|| format!("Trip {id} not found"))?;
        self.store.save()?;
        self.renderer
            .render(&format!("Removed trip \"{}\".\n", removed.destination));
        Ok(())
    }

    fn add_task(&mut self, params: CreateTask) -> Result<()> {
        let due = params.validate()?;
        if let Some(trip_id) = params.trip_id {
            if self.store.get_trip(trip_id).is_none() {
                bail!("Trip {trip_id} not found");
            }
        }

        let id = self.store.next_id();
        let mut task = Task::new(id, DEFAULT_USER_ID, params.title, due)?;
        if let Some(trip_id) = params.trip_id {
            task = task.with_trip(trip_id);
        }
        task.completed = params.completed;

        info!("Created task {id}");
        self.store.add_task(task.clone());
        self.store.save()?;
        self.renderer.render(&task.to_string());
        Ok(())
    }

    fn list_tasks(&self) -> Result<()> {
        let tasks = self.store.tasks();
        if tasks.is_empty() {
            self.renderer.render("No tasks found.\n");
            return Ok(());
        }
        let mut output = String::from("# Tasks\n\n");
        for task in tasks {
            output.push_str(&task.to_string());
        }
        self.renderer.render(&output);
        Ok(())
    }

    fn move_task(&mut self, params: &MoveEvent) -> Result<()> {
        let task = self
            .store
            .get_task(params.id)
            .with_context(|| format!("Task {} not found", params.id))?;
        let target = parse_target(&params.target)?;

        let moved = calendar::reschedule_task(task, target);
        self.store.update_task(moved.clone());
        self.store.save()?;
        self.renderer.render(&moved.to_string());
        Ok(())
    }

    fn toggle_task(&mut self, id: u64) -> Result<()> {
        let task = self
            .store
            .get_task(id)
            .with_context(|| format!("Task {id} not found"))?;
        let toggled = calendar::toggle_task(task);
        self.store.update_task(toggled.clone());
        self.store.save()?;
        self.renderer.render(&toggled.to_string());
        Ok(())
    }

    fn remove_task(&mut self, id: u64) -> Result<()> {
        let removed = self
            .store
            .remove_task(id)
            .with_context(|| format!("Task {id} not found"))?;
        self.store.save()?;
        self.renderer
            .render(&format!("Removed task \"{}\".\n", removed.title));
        Ok(())
    }
}
