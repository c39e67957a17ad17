//! The sequence of generations produced from an initial grid

use crate::game_of_life::{step, Grid};
use serde::Serialize;

/// One numbered snapshot in a simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generation {
    #[serde(rename = "generation")]
    pub number: usize,
    pub grid: Grid,
}

/// Endless iterator of generations.
///
/// The first item is generation 1, the result of stepping the initial grid
/// once. Only the latest grid is retained.
#[derive(Debug, Clone)]
pub struct Simulation {
    current: Grid,
    generation: usize,
}

impl Simulation {
    pub fn new(initial: Grid) -> Self {
        Self {
            current: initial,
            generation: 0,
        }
    }

    /// Grid of the most recently produced generation (the initial grid before
    /// the first call to `next`)
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Number of the most recently produced generation, 0 before the first
    pub fn generation(&self) -> usize {
        self.generation
    }
}

impl Iterator for Simulation {
    type Item = Generation;

    fn next(&mut self) -> Option<Self::Item> {
        self.current = step(&self.current);
        self.generation += 1;

        Some(Generation {
            number: self.generation,
            grid: self.current.clone(),
        })
    }
}
