// src/labyrinth/generator.rs

use std::time::Instant;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::automaton::{stabilize, StabilizerOutcome};
use crate::config::GeneratorConfig;
use crate::error::{LabyrinthError, Result};
use crate::grid::{check_side, Grid, Point, OPEN, WALL};
use crate::labyrinth::dwarf::{DigStep, Dwarf};
use crate::labyrinth::exits::{seal_border, select_exits};

/// A finished labyrinth: a square grid sealed all around except for the
/// entrance and the far exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labyrinth {
    pub grid: Grid,
    pub entrance: Point,
    pub exit: Point,
    pub seed: u64,
}

impl Labyrinth {
    pub fn size(&self) -> usize {
        self.grid.width()
    }
}

#[derive(Default, Debug, Clone)]
pub struct GenerationStats {
    pub generation_time: f64,
    pub stabilizer_generations: usize,
    pub stabilizer_outcome: Option<StabilizerOutcome>,
    pub dwarf_count: usize,
    pub carving_rounds: usize,
    pub cells_dug: usize,
    pub breach_count: usize,
}

pub struct LabyrinthGenerator {
    config: GeneratorConfig,
    seed: u64,
    stats: GenerationStats,
}

impl LabyrinthGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let seed = match config.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::rng().random();
                info!("No seed configured, using {}", seed);
                seed
            }
        };
        Ok(LabyrinthGenerator {
            config,
            seed,
            stats: GenerationStats::default(),
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Counters from the last run.
    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// Runs the whole pipeline. Calling it again with the same seed yields the
    /// same labyrinth.
    pub fn generate(&mut self) -> Result<Labyrinth> {
        let started = Instant::now();
        self.stats = GenerationStats::default();
        let mut rng = StdRng::seed_from_u64(self.seed);
        let size = self.config.size;
        info!("Generating a {}x{} labyrinth with seed {}", size, size, self.seed);

        // 1. Noise
        let noise = seed_noise(size, &mut rng)?;
        debug!("Seeded {} walls", noise.wall_count());

        // 2. Caves
        let settled = stabilize(noise, self.config.history_capacity, self.config.max_generations);
        info!(
            "Automaton settled after {} generations ({:?})",
            settled.generations, settled.outcome
        );
        self.stats.stabilizer_generations = settled.generations;
        self.stats.stabilizer_outcome = Some(settled.outcome);

        // 3. Frame, carve, seal and open the exits
        let labyrinth = self.finish(settled.grid, &mut rng)?;
        self.stats.generation_time = started.elapsed().as_secs_f64();
        info!(
            "Labyrinth ready in {:.3}s: entrance {}, exit {}",
            self.stats.generation_time, labyrinth.entrance, labyrinth.exit
        );
        Ok(labyrinth)
    }

    /// Frames, carves and opens exits on a caller-supplied cave grid, skipping
    /// the noise and automaton phases.
    pub fn generate_from(&mut self, cave: Grid) -> Result<Labyrinth> {
        let started = Instant::now();
        self.stats = GenerationStats::default();
        let mut rng = StdRng::seed_from_u64(self.seed);
        let labyrinth = self.finish(cave, &mut rng)?;
        self.stats.generation_time = started.elapsed().as_secs_f64();
        Ok(labyrinth)
    }

    fn finish(&mut self, mut grid: Grid, rng: &mut StdRng) -> Result<Labyrinth> {
        if !grid.is_square() {
            return Err(LabyrinthError::NotSquare {
                width: grid.width(),
                height: grid.height(),
            });
        }
        if grid.width() < 3 {
            return Err(LabyrinthError::GridTooSmall { size: grid.width() });
        }

        frame(&mut grid);

        let mut dwarves = spawn_dwarves(&grid, self.config.lattice_factor, rng)?;
        self.stats.dwarf_count = dwarves.len();
        self.carve(&mut grid, &mut dwarves)?;

        let breaches = seal_border(&mut grid);
        self.stats.breach_count = breaches.len();
        debug!("Carving breached the border {} times", breaches.len());

        let (entrance, exit) = select_exits(&breaches)?;
        grid.set(entrance, OPEN);
        grid.set(exit, OPEN);

        Ok(Labyrinth {
            grid,
            entrance,
            exit,
            seed: self.seed,
        })
    }

    /// Round-robin digging: every dwarf takes one step per round, in list
    /// order, until all of them stand on the border.
    fn carve(&mut self, grid: &mut Grid, dwarves: &mut [Dwarf]) -> Result<()> {
        let limit = self.config.carving_round_limit();
        let mut rounds = 0;
        let mut dug = 0;

        while dwarves.iter().any(|dwarf| !dwarf.is_done()) {
            if rounds >= limit {
                return Err(LabyrinthError::CarvingStalled { rounds });
            }
            for dwarf in dwarves.iter_mut() {
                if let DigStep::Dug(_) = dwarf.dig_once(grid) {
                    dug += 1;
                }
            }
            rounds += 1;
        }

        info!(
            "{} dwarves finished after {} rounds, {} walls dug",
            dwarves.len(),
            rounds,
            dug
        );
        self.stats.carving_rounds = rounds;
        self.stats.cells_dug = dug;
        Ok(())
    }
}

/// Convenience wrapper: one labyrinth of the given size from a fixed seed.
pub fn generate_labyrinth(size: usize, seed: u64) -> Result<Labyrinth> {
    LabyrinthGenerator::new(GeneratorConfig::with_size(size).seed(seed))?.generate()
}

/// An open grid with `size² / 4` random cells turned to wall. Samples are
/// drawn with replacement, so the same cell may be hit twice.
fn seed_noise(size: usize, rng: &mut StdRng) -> Result<Grid> {
    let side = check_side(size)?;
    let mut grid = Grid::square(size)?;
    for _ in 0..(size * size / 4) {
        let x = rng.random_range(0..side);
        let y = rng.random_range(0..side);
        grid.set(Point::new(x, y), WALL);
    }
    Ok(grid)
}

fn frame(grid: &mut Grid) {
    for point in grid.border_sweep() {
        grid.set(point, WALL);
    }
}

/// One dwarf per interior point of a `factor x factor` lattice, row by row.
fn spawn_dwarves(grid: &Grid, factor: usize, rng: &mut StdRng) -> Result<Vec<Dwarf>> {
    let size = grid.width();
    let mut dwarves = Vec::with_capacity(factor.saturating_sub(1).pow(2));
    for j in 1..factor {
        for k in 1..factor {
            let x = check_side(k * size / factor)?;
            let y = check_side(j * size / factor)?;
            dwarves.push(Dwarf::new(Point::new(x, y), grid, rng));
        }
    }
    Ok(dwarves)
}
