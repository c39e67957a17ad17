//! Conway's Game of Life
//!
//! Parses a text grid (`*` alive, anything else dead), steps it through
//! successive generations and renders each generation back to text.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use error::GridError;
pub use game_of_life::{count_alive_neighbours, parse, render, step, Cell, Grid, Position};
pub use simulation::{Runner, Simulation};

use anyhow::Result;
use std::io::Write;

/// Load the configured initial grid and animate it to `out`
pub fn run_simulation<W: Write>(settings: &Settings, out: &mut W) -> Result<simulation::RunSummary> {
    let initial = game_of_life::load_grid_from_file(
        &settings.input.initial_state_file,
        settings.input.ragged_policy,
    )?;
    Runner::from_settings(settings).run(Simulation::new(initial), out)
}
