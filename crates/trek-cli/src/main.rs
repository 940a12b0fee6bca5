//! Trek CLI Application
//!
//! Terminal calendar for the Trek travel planner: trips and tasks on one
//! month grid, with conflict-checked trip creation and duration-preserving
//! moves.

mod args;
mod cli;
mod renderer;
mod store;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, FilterArgs, MonthArgs};
use log::info;
use renderer::TerminalRenderer;
use store::JsonStore;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args { data_file, no_color, command } = Args::parse();

    let store = JsonStore::open(data_file).context("Failed to open data store")?;
    let renderer = TerminalRenderer::new(!no_color);

    info!("Trek started");

    match command {
        Some(Month(args)) => Cli::new(store, renderer).show_month(args),
        Some(Day { date, filters }) => Cli::new(store, renderer).show_day(&date, filters),
        Some(Trip { command }) => Cli::new(store, renderer).handle_trip_command(command),
        Some(Task { command }) => Cli::new(store, renderer).handle_task_command(command),
        None => Cli::new(store, renderer).show_month(MonthArgs {
            year: None,
            month: None,
            filters: FilterArgs { no_trips: false, no_pending: false, no_completed: false },
        }),
    }
}
