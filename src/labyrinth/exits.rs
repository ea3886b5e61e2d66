// src/labyrinth/exits.rs

use crate::error::{LabyrinthError, Result};
use crate::grid::{Grid, Point, WALL};

/// Walls the whole border back up, returning every square that was open, in
/// sweep order (top, bottom, left, right).
pub fn seal_border(grid: &mut Grid) -> Vec<Point> {
    let mut breaches = Vec::new();
    for point in grid.border_sweep() {
        if grid.get(point) == Some(false) {
            breaches.push(point);
            grid.set(point, WALL);
        }
    }
    breaches
}

/// Picks the entrance and the far exit among the breaches.
///
/// The entrance is the first breach; the far exit is the breach farthest from
/// the entrance in straight-line distance, the earliest one on a tie. This is
/// not a farthest-pair search over all breaches. With a single breach the
/// entrance doubles as the exit.
pub fn select_exits(breaches: &[Point]) -> Result<(Point, Point)> {
    let (&entrance, rest) = breaches.split_first().ok_or(LabyrinthError::NoExits)?;

    let mut far_exit = entrance;
    let mut best = 0.0;
    for candidate in rest {
        let distance = entrance.distance_to(candidate);
        if distance > best {
            best = distance;
            far_exit = *candidate;
        }
    }

    Ok((entrance, far_exit))
}
