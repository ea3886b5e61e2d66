// src/lib.rs

pub mod automaton;
pub mod config;
pub mod error;
pub mod export;
pub mod grid;
pub mod labyrinth;

pub use config::GeneratorConfig;
pub use error::{LabyrinthError, Result};
pub use grid::{Grid, Point, Vector};
pub use labyrinth::{generate_labyrinth, Labyrinth, LabyrinthGenerator};
