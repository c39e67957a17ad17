//! Text parsing, rendering and file I/O for Game of Life grids
//!
//! Format: each line is a row, `*` marks a live cell and any other
//! character a dead one. Rendering always writes `.` for dead cells.

use super::{Cell, Grid};
use crate::config::RaggedPolicy;
use crate::error::GridError;
use anyhow::{Context, Result};
use itertools::Itertools;
use std::path::Path;

/// Symbol of a live cell
pub const ALIVE: char = '*';

/// Canonical symbol of a dead cell
pub const DEAD: char = '.';

fn split_rows(text: &str) -> Vec<Vec<bool>> {
    text.split('\n')
        .map(|line| line.chars().map(|ch| ch == ALIVE).collect())
        .collect()
}

/// Parse a grid, rejecting rows whose length differs from the first row
pub fn parse(text: &str) -> Result<Grid, GridError> {
    Grid::from_rows(split_rows(text))
}

/// Parse a grid, padding short rows with dead cells up to the longest row
pub fn parse_padded(text: &str) -> Grid {
    let rows = split_rows(text);
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);

    Grid::from_fn(rows.len(), width, |p| {
        rows[p.row].get(p.col).copied().unwrap_or(false)
    })
}

/// Parse a grid, handling ragged rows according to `policy`
pub fn parse_with_policy(text: &str, policy: RaggedPolicy) -> Result<Grid, GridError> {
    match policy {
        RaggedPolicy::Reject => parse(text),
        RaggedPolicy::Pad => Ok(parse_padded(text)),
    }
}

/// Render a grid as text, rows joined by `\n` with no trailing newline
pub fn render(grid: &Grid) -> String {
    grid.rows()
        .map(|row| row.iter().map(Cell::symbol).collect::<String>())
        .join("\n")
}

/// Load a grid from a text file.
///
/// Windows line endings and trailing newlines are stripped before parsing.
pub fn load_grid_from_file<P: AsRef<Path>>(path: P, policy: RaggedPolicy) -> Result<Grid> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read grid file: {}", path.display()))?;

    let normalized = content.replace("\r\n", "\n");
    let grid = parse_with_policy(normalized.trim_end_matches('\n'), policy)
        .with_context(|| format!("Failed to parse grid from file: {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        height = grid.height(),
        width = grid.width(),
        living = grid.living_count(),
        "loaded grid"
    );
    Ok(grid)
}

/// Save a grid to a text file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut content = render(grid);
    content.push('\n');

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write grid to file: {}", path.display()))?;

    Ok(())
}

/// Example patterns written by `setup`, as `(file stem, grid text)`
pub const EXAMPLE_PATTERNS: [(&str, &str); 4] = [
    ("glider", "..*..\n*.*..\n.**..\n.....\n....."),
    ("blinker", "...\n***\n..."),
    ("block", "....\n.**.\n.**.\n...."),
    ("beacon", "**....\n**....\n..**..\n..**..\n......"),
];

/// Create example grid files
pub fn create_example_grids<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for (name, text) in EXAMPLE_PATTERNS {
        let path = dir.join(format!("{name}.txt"));
        std::fs::write(&path, format!("{text}\n"))
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(())
}
