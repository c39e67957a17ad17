//! Game of Life core functionality

pub mod cell;
pub mod grid;
pub mod io;
pub mod rules;

pub use cell::{Cell, Position};
pub use grid::Grid;
pub use io::{
    create_example_grids, load_grid_from_file, parse, parse_padded, parse_with_policy, render,
    save_grid_to_file,
};
pub use rules::{count_alive_neighbours, is_still_life, step, step_n, GameOfLifeRules};
