//! Cell and position value types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Row/column coordinates of a cell within its grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One grid position and its state for a single generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    alive: bool,
}

impl Cell {
    pub const fn new(position: Position, alive: bool) -> Self {
        Self { position, alive }
    }

    pub const fn alive(row: usize, col: usize) -> Self {
        Self::new(Position::new(row, col), true)
    }

    pub const fn dead(row: usize, col: usize) -> Self {
        Self::new(Position::new(row, col), false)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// The same position carrying a new state, for the next generation
    pub fn with_state(&self, alive: bool) -> Self {
        Self::new(self.position, alive)
    }

    /// Text symbol used by the parser and renderer
    pub fn symbol(&self) -> char {
        if self.alive {
            super::io::ALIVE
        } else {
            super::io::DEAD
        }
    }
}
