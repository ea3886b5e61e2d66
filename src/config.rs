// src/config.rs

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LabyrinthError, Result};
use crate::grid::check_side;

/// Side length used when nothing else is configured.
pub const DEFAULT_SIZE: usize = 50;
/// Dwarves are spawned on the interior points of a `factor x factor` lattice.
pub const DEFAULT_LATTICE_FACTOR: usize = 8;
pub const DEFAULT_HISTORY_CAPACITY: usize = 16;
pub const DEFAULT_MAX_GENERATIONS: usize = 10_000;
/// Floor for the derived carving round limit on tiny grids.
pub const MIN_CARVING_ROUNDS: usize = 1024;

/// Knobs for a generation run. Every field has a default, so a JSON file only
/// needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub size: usize,
    /// Fixed seed for reproducible output; a random one is drawn when absent.
    pub seed: Option<u64>,
    pub lattice_factor: usize,
    /// How many past automaton states are kept for cycle detection.
    pub history_capacity: usize,
    pub max_generations: usize,
    /// Overrides the size-derived carving round limit.
    pub max_carving_rounds: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            size: DEFAULT_SIZE,
            seed: None,
            lattice_factor: DEFAULT_LATTICE_FACTOR,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            max_generations: DEFAULT_MAX_GENERATIONS,
            max_carving_rounds: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_size(size: usize) -> Self {
        GeneratorConfig {
            size,
            ..Self::default()
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size < 3 {
            return Err(LabyrinthError::GridTooSmall { size: self.size });
        }
        check_side(self.size)?;
        if self.lattice_factor == 0 {
            return Err(LabyrinthError::InvalidConfig(
                "lattice_factor must be at least 1".into(),
            ));
        }
        if self.history_capacity == 0 {
            return Err(LabyrinthError::InvalidConfig(
                "history_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Upper bound on carving rounds before the run is declared stalled.
    pub fn carving_round_limit(&self) -> usize {
        self.max_carving_rounds.unwrap_or_else(|| {
            let area = self.size.saturating_mul(self.size);
            area.saturating_mul(area).max(MIN_CARVING_ROUNDS)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.size, 50);
        assert_eq!(config.lattice_factor, 8);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GeneratorConfig::from_json_str(r#"{ "size": 21, "seed": 9 }"#).unwrap();
        assert_eq!(config.size, 21);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.history_capacity, DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            GeneratorConfig::with_size(2).validate(),
            Err(LabyrinthError::GridTooSmall { size: 2 })
        ));
        assert!(matches!(
            GeneratorConfig::from_json_str(r#"{ "lattice_factor": 0 }"#),
            Err(LabyrinthError::InvalidConfig(_))
        ));
        assert!(matches!(
            GeneratorConfig::with_size(i32::MAX as usize + 1).validate(),
            Err(LabyrinthError::InvalidConfig(_))
        ));
        assert!(matches!(
            GeneratorConfig::from_json_str("not json"),
            Err(LabyrinthError::Json(_))
        ));
    }

    #[test]
    fn test_carving_round_limit() {
        assert_eq!(GeneratorConfig::with_size(10).carving_round_limit(), 10_000);
        assert_eq!(GeneratorConfig::with_size(3).carving_round_limit(), MIN_CARVING_ROUNDS);
        let mut config = GeneratorConfig::with_size(10);
        config.max_carving_rounds = Some(5);
        assert_eq!(config.carving_round_limit(), 5);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = GeneratorConfig::from_json_file("/definitely/not/here.json");
        assert!(matches!(result, Err(LabyrinthError::Io(_))));
    }
}
