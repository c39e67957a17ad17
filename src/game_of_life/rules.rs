//! Game of Life rules, neighbour counting and generation stepping

use super::{Cell, Grid};

/// Conway's B3/S23 rule as flat predicates over the neighbour count
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Neighbour counts that keep a live cell alive
    pub const SURVIVAL: [u8; 2] = [2, 3];

    /// Neighbour counts that bring a dead cell to life
    pub const BIRTH: [u8; 1] = [3];

    /// Maximum 8 neighbours in the Moore neighbourhood
    pub const MAX_NEIGHBOURS: u8 = 8;

    /// A live cell with this many live neighbours stays alive
    pub fn survives(neighbours: u8) -> bool {
        Self::SURVIVAL.contains(&neighbours)
    }

    /// A dead cell with this many live neighbours becomes alive
    pub fn is_born(neighbours: u8) -> bool {
        Self::BIRTH.contains(&neighbours)
    }

    /// Check if a cell should be alive in the next generation given its
    /// current state and neighbour count
    pub fn next_state(alive: bool, neighbours: u8) -> bool {
        if alive {
            Self::survives(neighbours)
        } else {
            Self::is_born(neighbours)
        }
    }
}

/// Count the live cells in the Moore neighbourhood of `target`.
///
/// Only the 3x3 window of indices around the target is inspected and the
/// target's own position is skipped. Positions outside the grid do not
/// exist, so edge and corner cells simply have fewer candidates.
pub fn count_alive_neighbours(grid: &Grid, target: &Cell) -> u8 {
    let centre = target.position();
    let rows = centre.row.saturating_sub(1)..=centre.row.saturating_add(1);

    let mut count = 0;
    for row in rows {
        let cols = centre.col.saturating_sub(1)..=centre.col.saturating_add(1);
        for col in cols {
            let Some(cell) = grid.cell(row, col) else {
                continue;
            };
            if cell.position() != centre && cell.is_alive() {
                count += 1;
            }
        }
    }

    count
}

/// Compute the next generation.
///
/// Every cell is evaluated against `grid` alone, never against a partially
/// built successor; the result has the same dimensions and positions.
pub fn step(grid: &Grid) -> Grid {
    let next = grid.map_states(|cell| {
        let neighbours = count_alive_neighbours(grid, cell);
        GameOfLifeRules::next_state(cell.is_alive(), neighbours)
    });

    tracing::trace!(
        height = grid.height(),
        width = grid.width(),
        before = grid.living_count(),
        after = next.living_count(),
        "stepped generation"
    );
    next
}

/// Evolve the grid for multiple generations
pub fn step_n(grid: &Grid, generations: usize) -> Grid {
    let mut current = grid.clone();
    for _ in 0..generations {
        current = step(&current);
    }
    current
}

/// True if the grid is unchanged by one step
pub fn is_still_life(grid: &Grid) -> bool {
    step(grid) == *grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::io::parse;

    #[test]
    fn test_rule_logic() {
        assert!(!GameOfLifeRules::next_state(true, 0));
        assert!(!GameOfLifeRules::next_state(true, 1));
        assert!(GameOfLifeRules::next_state(true, 2));
        assert!(GameOfLifeRules::next_state(true, 3));
        for n in 4..=GameOfLifeRules::MAX_NEIGHBOURS {
            assert!(!GameOfLifeRules::next_state(true, n), "survived with {n}");
        }

        for n in 0..=GameOfLifeRules::MAX_NEIGHBOURS {
            assert_eq!(GameOfLifeRules::next_state(false, n), n == 3, "birth with {n}");
        }
    }

    #[test]
    fn test_survival_and_birth_predicates() {
        assert!(!GameOfLifeRules::survives(1));
        assert!(GameOfLifeRules::survives(2));
        assert!(GameOfLifeRules::survives(3));
        assert!(!GameOfLifeRules::survives(4));
        assert!(!GameOfLifeRules::survives(5));

        assert!(GameOfLifeRules::is_born(3));
        assert!(!GameOfLifeRules::is_born(2));
    }

    #[test]
    fn test_neighbour_counting_small_grids() {
        let grid = parse("*").unwrap();
        assert_eq!(count_alive_neighbours(&grid, &grid.cells()[0]), 0);

        let grid = parse("**").unwrap();
        assert_eq!(count_alive_neighbours(&grid, &grid.cells()[0]), 1);
        assert_eq!(count_alive_neighbours(&grid, &grid.cells()[1]), 1);

        let grid = parse("..").unwrap();
        assert_eq!(count_alive_neighbours(&grid, &grid.cells()[0]), 0);

        let grid = parse("*.").unwrap();
        assert_eq!(count_alive_neighbours(&grid, &grid.cells()[0]), 0);

        let grid = parse("*\n*").unwrap();
        assert_eq!(count_alive_neighbours(&grid, &grid.cells()[0]), 1);

        let grid = parse("*\n.").unwrap();
        assert_eq!(count_alive_neighbours(&grid, &grid.cells()[0]), 0);

        let grid = parse("*.*").unwrap();
        assert_eq!(count_alive_neighbours(&grid, &grid.cells()[0]), 0);
    }

    #[test]
    fn test_neighbour_counting_middle_column() {
        let grid = parse(".*.\n.*.\n.*.").unwrap();
        let top_middle = grid.cell(0, 1).unwrap();
        assert_eq!(count_alive_neighbours(&grid, top_middle), 1);

        let centre = grid.cell(1, 1).unwrap();
        assert_eq!(count_alive_neighbours(&grid, centre), 2);

        let top_left = grid.cell(0, 0).unwrap();
        assert_eq!(count_alive_neighbours(&grid, top_left), 2);
    }

    #[test]
    fn test_neighbour_counting_full_ring() {
        let grid = parse("***\n*.*\n***").unwrap();
        assert_eq!(count_alive_neighbours(&grid, grid.cell(1, 1).unwrap()), 8);
        assert_eq!(count_alive_neighbours(&grid, grid.cell(0, 0).unwrap()), 2);
    }

    #[test]
    fn test_target_never_counts_itself() {
        let grid = parse("***\n***\n***").unwrap();
        assert_eq!(count_alive_neighbours(&grid, grid.cell(1, 1).unwrap()), 8);
        assert_eq!(count_alive_neighbours(&grid, grid.cell(2, 2).unwrap()), 3);
    }

    #[test]
    fn test_still_life_block() {
        let grid = parse("....\n.**.\n.**.\n....").unwrap();
        let evolved = step(&grid);
        assert_eq!(evolved, grid);
        assert!(is_still_life(&grid));
    }

    #[test]
    fn test_oscillator_blinker() {
        let grid = parse("...\n***\n...").unwrap();
        let vertical = parse(".*.\n.*.\n.*.").unwrap();

        let evolved = step(&grid);
        assert_eq!(evolved, vertical);
        assert!(!is_still_life(&grid));

        assert_eq!(step(&evolved), grid);
        assert_eq!(step_n(&grid, 2), grid);
        assert_eq!(step_n(&grid, 3), vertical);
    }

    #[test]
    fn test_step_does_not_touch_input() {
        let grid = parse("*").unwrap();
        let next = step(&grid);
        assert!(grid.is_alive(0, 0));
        assert!(!next.is_alive(0, 0));
    }

    #[test]
    fn test_step_empty_grids() {
        let empty = Grid::new(0, 0);
        assert_eq!(step(&empty), empty);

        let blank_row = parse("").unwrap();
        assert_eq!(step(&blank_row).dimensions(), (1, 0));
    }

    #[test]
    fn test_step_n_zero_is_identity() {
        let grid = parse(".*.\n***").unwrap();
        assert_eq!(step_n(&grid, 0), grid);
    }
}
