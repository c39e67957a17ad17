//! Grid representation and utilities for Game of Life

use super::cell::{Cell, Position};
use super::io;
use crate::error::GridError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One generation of a Game of Life board.
///
/// Cells are stored row-major in a flat vector. A grid has no mutating
/// accessors: the next generation is always a new `Grid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GridRecord", try_from = "GridRecord")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(height: usize, width: usize) -> Self {
        Self::from_fn(height, width, |_| false)
    }

    /// Build a grid by evaluating `state` for every position, row by row
    pub fn from_fn<F>(height: usize, width: usize, mut state: F) -> Self
    where
        F: FnMut(Position) -> bool,
    {
        let mut cells = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                let position = Position::new(row, col);
                cells.push(Cell::new(position, state(position)));
            }
        }

        Self { width, height, cells }
    }

    /// Create a grid from a 2D boolean array
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    length: cells.len(),
                    expected: width,
                });
            }
        }

        Ok(Self::from_fn(height, width, |p| rows[p.row][p.col]))
    }

    /// A new grid of the same shape whose cell states are given by `state`
    pub fn map_states<F>(&self, mut state: F) -> Self
    where
        F: FnMut(&Cell) -> bool,
    {
        Self {
            width: self.width,
            height: self.height,
            cells: self
                .cells
                .iter()
                .map(|cell| cell.with_state(state(cell)))
                .collect(),
        }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(height, width)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Get the cell at coordinates, `None` outside the grid
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.height && col < self.width {
            self.cells.get(self.index(row, col))
        } else {
            None
        }
    }

    /// Out of bounds cells are considered dead
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(Cell::is_alive)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows in order, each a slice of cells in column order
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.height).map(move |row| {
            let start = self.index(row, 0);
            &self.cells[start..start + self.width]
        })
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|cell| cell.is_alive())
            .map(Cell::position)
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Check if no cell is alive
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&io::render(self))
    }
}

/// Serialized form: dimensions plus one rendered string per row
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GridRecord {
    height: usize,
    width: usize,
    rows: Vec<String>,
}

impl From<Grid> for GridRecord {
    fn from(grid: Grid) -> Self {
        Self {
            height: grid.height,
            width: grid.width,
            rows: grid
                .rows()
                .map(|row| row.iter().map(Cell::symbol).collect())
                .collect(),
        }
    }
}

impl TryFrom<GridRecord> for Grid {
    type Error = GridError;

    fn try_from(record: GridRecord) -> Result<Self, Self::Error> {
        let rows: Vec<Vec<bool>> = record
            .rows
            .iter()
            .map(|row| row.chars().map(|ch| ch == io::ALIVE).collect())
            .collect();

        if rows.len() != record.height {
            return Err(GridError::DimensionMismatch {
                expected: (record.height, record.width),
                actual: (rows.len(), rows.first().map_or(0, Vec::len)),
            });
        }
        if record.height == 0 {
            return Ok(Self::new(0, record.width));
        }

        let grid = Self::from_rows(rows)?;
        if grid.width != record.width {
            return Err(GridError::DimensionMismatch {
                expected: (record.height, record.width),
                actual: grid.dimensions(),
            });
        }
        Ok(grid)
    }
}
