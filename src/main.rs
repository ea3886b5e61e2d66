#![warn(non_snake_case)]
//! # labyrinth_gen Entry Point
//!
//! Generates one labyrinth and hands it to a sink: plain text on stdout, a
//! text or JSON file, or a PNG image. Logging goes through `env_logger`, so
//! `RUST_LOG=info` shows the phases of the run and `RUST_LOG=trace` every dig.
//!
//! ## License
//! Licensed under the MIT License.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::info;

use labyrinth_gen::export::{render_text, save_png, Glyphs, LabyrinthDocument};
use labyrinth_gen::{GeneratorConfig, LabyrinthGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Png,
    Json,
}

/// Procedural labyrinth generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Grid side length (overrides the config file)
    #[arg(long)]
    size: Option<usize>,

    /// Random seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON generator configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Output file; text and JSON go to stdout when omitted
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Pixels per cell in PNG output
    #[arg(long, default_value_t = 8)]
    cell_size: u32,

    /// Glyph for walls in text output
    #[arg(long, default_value_t = 'X')]
    wall: char,

    /// Glyph for open floor in text output
    #[arg(long, default_value_t = ' ')]
    open: char,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_json_file(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    let mut generator = LabyrinthGenerator::new(config)?;
    let labyrinth = generator.generate()?;
    let stats = generator.stats();
    info!(
        "seed {}, {} automaton generations, {} dwarves, {} rounds, {} walls dug, {} breaches",
        labyrinth.seed,
        stats.stabilizer_generations,
        stats.dwarf_count,
        stats.carving_rounds,
        stats.cells_dug,
        stats.breach_count
    );

    match args.format {
        Format::Png => {
            let path = args.output.unwrap_or_else(|| PathBuf::from("labyrinth.png"));
            save_png(&labyrinth.grid, args.cell_size, &path)?;
            info!("Wrote {}", path.display());
        }
        Format::Text | Format::Json => {
            let rendered = if args.format == Format::Json {
                LabyrinthDocument::from(&labyrinth).to_json()?
            } else {
                let glyphs = Glyphs {
                    wall: args.wall,
                    open: args.open,
                };
                render_text(&labyrinth.grid, glyphs)
            };
            match args.output {
                Some(path) => {
                    fs::write(&path, rendered)?;
                    info!("Wrote {}", path.display());
                }
                None => print!("{}", rendered),
            }
        }
    }

    Ok(())
}
