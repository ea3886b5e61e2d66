// src/grid/mod.rs
pub mod grid;
pub mod point;

pub use grid::Grid;
pub(crate) use grid::check_side;
pub use point::{Point, Vector};

/// Cell value for a wall.
pub const WALL: bool = true;
/// Cell value for open floor.
pub const OPEN: bool = false;
