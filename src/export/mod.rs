// src/export/mod.rs
//! Sinks for a finished grid: plain text, PNG and JSON.

pub mod json;
pub mod png;
pub mod text;

pub use json::LabyrinthDocument;
pub use png::{render_image, save_png};
pub use text::{render_text, Glyphs};
