// src/error.rs

use thiserror::Error;

/// Everything that can stop a generation run or one of its sinks.
#[derive(Debug, Error)]
pub enum LabyrinthError {
    #[error("grid size {size} is too small, a labyrinth needs at least 3x3 cells")]
    GridTooSmall { size: usize },

    #[error("grid must be square, got {width}x{height}")]
    NotSquare { width: usize, height: usize },

    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("no border cell was breached during carving, cannot place exits")]
    NoExits,

    #[error("carving did not finish after {rounds} rounds")]
    CarvingStalled { rounds: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LabyrinthError>;
