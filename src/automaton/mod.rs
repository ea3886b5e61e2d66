// src/automaton/mod.rs
//! # Cave Automaton
//!
//! A variant of Conway's Game of Life that grows cave-like structure instead of
//! gliders and blinkers:
//!
//! * a dead cell with exactly three live neighbours comes to life,
//! * a live cell survives with one to five live neighbours,
//! * every other cell is (or stays) dead.
//!
//! Neighbours are the eight Moore neighbours. Cells outside the grid do not
//! count and there is no wraparound.

pub mod stabilizer;

pub use stabilizer::{stabilize, Stabilization, StabilizerOutcome};

use crate::grid::{Grid, Point};

pub const BIRTH_NEIGHBOURS: usize = 3;
pub const MIN_SURVIVAL_NEIGHBOURS: usize = 1;
pub const MAX_SURVIVAL_NEIGHBOURS: usize = 5;

/// Computes one synchronous generation.
///
/// Every cell is evaluated against the untouched input, so all cells update
/// simultaneously. Returns the next generation and whether any cell changed.
pub fn tick(grid: &Grid) -> (Grid, bool) {
    let mut next = grid.clone();
    let mut changed = false;

    for (point, alive) in grid.cells() {
        let becomes = next_state(alive, live_neighbours(grid, point));
        if becomes != alive {
            next.set(point, becomes);
            changed = true;
        }
    }

    (next, changed)
}

/// The rule applied to a single cell.
pub fn next_state(alive: bool, neighbours: usize) -> bool {
    if alive {
        (MIN_SURVIVAL_NEIGHBOURS..=MAX_SURVIVAL_NEIGHBOURS).contains(&neighbours)
    } else {
        neighbours == BIRTH_NEIGHBOURS
    }
}

/// Counts live Moore neighbours of `point` that lie inside the grid.
pub fn live_neighbours(grid: &Grid, point: Point) -> usize {
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if grid.get(Point::new(point.x + dx, point.y + dy)) == Some(true) {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: bool = true;
    const F: bool = false;

    fn board(rows: [[bool; 3]; 3]) -> Grid {
        Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    fn state_after_tick(rows: [[bool; 3]; 3], x: i32, y: i32) -> bool {
        let (next, _) = tick(&board(rows));
        next.get(Point::new(x, y)).unwrap()
    }

    #[test]
    fn test_isolated_cell_dies() {
        assert!(!state_after_tick([[T, F, F], [F, F, F], [F, F, F]], 0, 0));
        assert!(!state_after_tick([[F, F, F], [F, T, F], [F, F, F]], 1, 1));
    }

    #[test]
    fn test_overcrowded_cell_dies() {
        assert!(!state_after_tick([[T, T, T], [T, T, T], [T, T, T]], 1, 1));
    }

    #[test]
    fn test_dead_cell_without_three_neighbours_stays_dead() {
        // one neighbour
        assert!(!state_after_tick([[F, T, F], [F, F, F], [F, F, F]], 1, 1));
        // two neighbours
        assert!(!state_after_tick([[F, T, F], [T, F, F], [F, F, F]], 0, 0));
        // four neighbours
        assert!(!state_after_tick([[F, T, F], [T, F, T], [F, T, F]], 1, 1));
        // eight neighbours
        assert!(!state_after_tick([[T, T, T], [T, F, T], [T, T, T]], 1, 1));
    }

    #[test]
    fn test_dead_cell_with_three_neighbours_is_born() {
        assert!(state_after_tick([[F, T, F], [T, F, T], [F, F, F]], 1, 1));
        assert!(state_after_tick([[T, T, T], [T, T, T], [T, T, F]], 2, 2));
        assert!(state_after_tick([[T, T, F], [F, F, F], [F, T, F]], 0, 1));
    }

    #[test]
    fn test_survival_bounds() {
        for neighbours in 0..=8 {
            let expected = (1..=5).contains(&neighbours);
            assert_eq!(next_state(true, neighbours), expected, "{neighbours} neighbours");
        }
    }

    #[test]
    fn test_neighbours_outside_the_grid_do_not_count() {
        let grid = board([[T, T, F], [T, F, F], [F, F, F]]);
        assert_eq!(live_neighbours(&grid, Point::new(0, 0)), 2);
        assert_eq!(live_neighbours(&grid, Point::new(1, 1)), 3);
        assert_eq!(live_neighbours(&grid, Point::new(2, 2)), 0);
    }

    #[test]
    fn test_tick_reports_change() {
        let (_, changed) = tick(&board([[F, F, F], [F, T, F], [F, F, F]]));
        assert!(changed);
    }

    #[test]
    fn test_tick_on_fixed_point_reports_no_change() {
        // Every live cell has 1 to 5 neighbours and no dead cell has exactly 3.
        let still = board([[T, T, F], [T, T, F], [F, F, F]]);
        let (next, changed) = tick(&still);
        assert!(!changed);
        assert_eq!(next, still);

        let empty = board([[F; 3]; 3]);
        let (_, changed) = tick(&empty);
        assert!(!changed);
    }

    #[test]
    fn test_tick_does_not_alias_input() {
        let original = board([[F, T, F], [T, F, T], [F, F, F]]);
        let snapshot = original.clone();
        let (next, _) = tick(&original);
        assert_eq!(original, snapshot);
        assert_ne!(next, original);
    }
}
