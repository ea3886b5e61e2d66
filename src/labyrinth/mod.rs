// src/labyrinth/mod.rs
pub mod dwarf;
pub mod exits;
pub mod generator;
mod history;

pub use dwarf::{DigStep, Dwarf};
pub use exits::{seal_border, select_exits};
pub use generator::{generate_labyrinth, GenerationStats, Labyrinth, LabyrinthGenerator};
pub use history::{SquareHistory, VisitMap};
