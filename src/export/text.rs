// src/export/text.rs

use std::fmt;

use crate::grid::{Grid, Point};

/// Characters used to draw each kind of cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub wall: char,
    pub open: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs {
            wall: 'X',
            open: ' ',
        }
    }
}

/// One line per row, one glyph per cell, each line ending in `\n`.
pub fn render_text(grid: &Grid, glyphs: Glyphs) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let wall = grid.get(Point::new(x, y)).unwrap_or(true);
            out.push(if wall { glyphs.wall } else { glyphs.open });
        }
        out.push('\n');
    }
    out
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_text(self, Glyphs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_default_glyphs() {
        let grid = Grid::from_rows(vec![
            vec![true, false, true],
            vec![false, false, true],
        ])
        .unwrap();
        assert_eq!(grid.to_string(), "X X\n  X\n");
    }

    #[test]
    fn test_render_text_custom_glyphs() {
        let grid = Grid::from_rows(vec![vec![true, false]]).unwrap();
        let glyphs = Glyphs {
            wall: '#',
            open: '.',
        };
        assert_eq!(render_text(&grid, glyphs), "#.\n");
    }
}
