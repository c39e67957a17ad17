//! Property-based tests for parsing, rendering and stepping.

use game_of_life::{parse, render, step, Grid};
use proptest::prelude::*;

/// Rectangular grid text of `*` and `.` with 1..=8 rows and 1..=8 columns
fn grid_text() -> impl Strategy<Value = String> {
    (1usize..=8, 1usize..=8).prop_flat_map(|(height, width)| {
        prop::collection::vec(
            prop::collection::vec(prop::bool::ANY, width),
            height,
        )
        .prop_map(|rows| {
            rows.iter()
                .map(|row| row.iter().map(|&alive| if alive { '*' } else { '.' }).collect::<String>())
                .collect::<Vec<_>>()
                .join("\n")
        })
    })
}

proptest! {
    /// render(parse(text)) = text
    #[test]
    fn prop_round_trip(text in grid_text()) {
        let grid = parse(&text).unwrap();
        prop_assert_eq!(render(&grid), text);
    }

    /// step preserves row count and per-row cell counts
    #[test]
    fn prop_step_preserves_dimensions(text in grid_text()) {
        let grid = parse(&text).unwrap();
        let next = step(&grid);
        prop_assert_eq!(next.dimensions(), grid.dimensions());

        for (before, after) in grid.rows().zip(next.rows()) {
            prop_assert_eq!(before.len(), after.len());
            for (a, b) in before.iter().zip(after) {
                prop_assert_eq!(a.position(), b.position());
            }
        }
    }

    /// An all-dead grid stays all dead
    #[test]
    fn prop_dead_grid_is_stable(height in 0usize..12, width in 0usize..12) {
        let grid = Grid::new(height, width);
        prop_assert_eq!(step(&grid), grid);
    }

    /// step is a pure function of its input
    #[test]
    fn prop_step_is_deterministic(text in grid_text()) {
        let grid = parse(&text).unwrap();
        prop_assert_eq!(step(&grid), step(&grid));
    }
}
