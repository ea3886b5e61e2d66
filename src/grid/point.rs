// src/grid/point.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate. `x` is the column, `y` the row.
///
/// Coordinates are signed so that offsets may step outside the grid; lookups
/// on such points simply report the cell as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring point one step along `vector`.
    pub fn offset(&self, vector: Vector) -> Point {
        let (dx, dy) = vector.delta();
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four orthogonal unit steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vector {
    Right,
    Down,
    Left,
    Up,
}

impl Vector {
    pub const ALL: [Vector; 4] = [Vector::Right, Vector::Down, Vector::Left, Vector::Up];

    /// `(dx, dy)` with `y` growing downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Vector::Right => (1, 0),
            Vector::Down => (0, 1),
            Vector::Left => (-1, 0),
            Vector::Up => (0, -1),
        }
    }
}
