//! JSON file store: the persistence collaborator for the engine.
//!
//! The engine itself performs no storage; this module owns it. Records
//! live in a single JSON document (default
//! `$XDG_DATA_HOME/trek/trek.json`), loaded in full on startup and written
//! back after every mutation. Trips are handed to the conflict detector in
//! most-recently-created-first order, matching how the records are listed
//! everywhere else.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use trek_core::models::{Task, Trip};

/// On-disk document shape.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreData {
    /// Next id to hand out; ids are never reused
    #[serde(default = "first_id")]
    next_id: u64,
    #[serde(default)]
    trips: Vec<Trip>,
    #[serde(default)]
    tasks: Vec<Task>,
}

fn first_id() -> u64 {
    1
}

/// File-backed store for trip and task records.
pub struct JsonStore {
    path: PathBuf,
    data: StoreData,
}

impl JsonStore {
    /// Opens the store at `path`, creating an empty one if the file does
    /// not exist yet. Records are validated on load so that invariant
    /// violations surface here rather than deep inside the engine.
    pub fn open(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };

        let data = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read data file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Malformed data file {}", path.display()))?
        } else {
            StoreData {
                next_id: 1,
                ..Default::default()
            }
        };

        for trip in &data.trips {
            trip.validate()
                .with_context(|| format!("Stored trip {} is invalid", trip.id))?;
        }
        for task in &data.tasks {
            task.validate()
                .with_context(|| format!("Stored task {} is invalid", task.id))?;
        }

        debug!(
            "Opened store at {} ({} trips, {} tasks)",
            path.display(),
            data.trips.len(),
            data.tasks.len()
        );
        Ok(Self { path, data })
    }

    /// Default data file location following the XDG Base Directory
    /// specification.
    fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("trek")
            .place_data_file("trek.json")
            .context("Failed to resolve XDG data directory")
    }

    /// Writes the document back to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(&self.data).context("Failed to serialize store")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write data file {}", self.path.display()))
    }

    /// Allocates the next record id.
    pub fn next_id(&mut self) -> u64 {
        let id = self.data.next_id;
        self.data.next_id += 1;
        id
    }

    /// All trips in insertion order.
    pub fn trips(&self) -> &[Trip] {
        &self.data.trips
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.data.tasks
    }

    /// Trips ordered most-recently-created-first, the iteration order the
    /// conflict detector scans in.
    pub fn trips_recent_first(&self) -> Vec<&Trip> {
        let mut trips: Vec<&Trip> = self.data.trips.iter().collect();
        trips.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        trips
    }

    /// Looks up a trip by id.
    pub fn get_trip(&self, id: u64) -> Option<&Trip> {
        self.data.trips.iter().find(|t| t.id == id)
    }

    /// Looks up a task by id.
    pub fn get_task(&self, id: u64) -> Option<&Task> {
        self.data.tasks.iter().find(|t| t.id == id)
    }

    /// Appends a new trip.
    pub fn add_trip(&mut self, trip: Trip) {
        self.data.trips.push(trip);
    }

    /// Appends a new task.
    pub fn add_task(&mut self, task: Task) {
        self.data.tasks.push(task);
    }

    /// Replaces the trip with the same id. Returns false when no such
    /// trip exists.
    pub fn update_trip(&mut self, trip: Trip) -> bool {
        match self.data.trips.iter_mut().find(|t| t.id == trip.id) {
            Some(slot) => {
                *slot = trip;
                true
            }
            None => false,
        }
    }

    /// Replaces the task with the same id. Returns false when no such
    /// task exists.
    pub fn update_task(&mut self, task: Task) -> bool {
        match self.data.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => {
                *slot = task;
                true
            }
            None => false,
        }
    }

    /// Removes a trip by id, returning it if it existed.
    pub fn remove_trip(&mut self, id: u64) -> Option<Trip> {
        let index = self.data.trips.iter().position(|t| t.id == id)?;
        Some(self.data.trips.remove(index))
    }

    /// Removes a task by id, returning it if it existed.
    pub fn remove_task(&mut self, id: u64) -> Option<Task> {
        let index = self.data.tasks.iter().position(|t| t.id == id)?;
        Some(self.data.tasks.remove(index))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
