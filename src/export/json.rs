// src/export/json.rs

use serde::{Deserialize, Serialize};

use crate::error::{LabyrinthError, Result};
use crate::grid::{Grid, Point};
use crate::labyrinth::Labyrinth;

/// Serialized form of a finished labyrinth. `rows[y][x]` is `true` for walls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabyrinthDocument {
    pub size: usize,
    pub seed: u64,
    pub entrance: Point,
    pub exit: Point,
    pub rows: Vec<Vec<bool>>,
}

impl From<&Labyrinth> for LabyrinthDocument {
    fn from(labyrinth: &Labyrinth) -> Self {
        LabyrinthDocument {
            size: labyrinth.size(),
            seed: labyrinth.seed,
            entrance: labyrinth.entrance,
            exit: labyrinth.exit,
            rows: labyrinth.grid.rows(),
        }
    }
}

impl LabyrinthDocument {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Rebuilds the labyrinth, checking that the rows match the declared size.
    pub fn into_labyrinth(self) -> Result<Labyrinth> {
        let grid = Grid::from_rows(self.rows)?;
        if !grid.is_square() {
            return Err(LabyrinthError::NotSquare {
                width: grid.width(),
                height: grid.height(),
            });
        }
        if grid.width() != self.size {
            return Err(LabyrinthError::InvalidConfig(format!(
                "document declares size {} but holds {} rows",
                self.size,
                grid.height()
            )));
        }
        Ok(Labyrinth {
            grid,
            entrance: self.entrance,
            exit: self.exit,
            seed: self.seed,
        })
    }
}
