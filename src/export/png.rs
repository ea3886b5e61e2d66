// src/export/png.rs

use std::path::Path;

use image::{GrayImage, Luma};

use crate::error::Result;
use crate::grid::{Grid, Point};

const WALL_PIXEL: Luma<u8> = Luma([0]);
const OPEN_PIXEL: Luma<u8> = Luma([255]);

/// Draws every cell as a `cell_size` square, walls black and floor white.
pub fn render_image(grid: &Grid, cell_size: u32) -> GrayImage {
    let cell = cell_size.max(1);
    let width = grid.width() as u32 * cell;
    let height = grid.height() as u32 * cell;
    GrayImage::from_fn(width, height, |px, py| {
        let point = Point::new((px / cell) as i32, (py / cell) as i32);
        if grid.get(point).unwrap_or(true) {
            WALL_PIXEL
        } else {
            OPEN_PIXEL
        }
    })
}

pub fn save_png<P: AsRef<Path>>(grid: &Grid, cell_size: u32, path: P) -> Result<()> {
    render_image(grid, cell_size).save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_image_scales_cells() {
        let grid = Grid::from_rows(vec![vec![true, false], vec![false, true]]).unwrap();
        let img = render_image(&grid, 4);
        assert_eq!(img.dimensions(), (8, 8));
        assert_eq!(*img.get_pixel(0, 0), WALL_PIXEL);
        assert_eq!(*img.get_pixel(3, 3), WALL_PIXEL);
        assert_eq!(*img.get_pixel(4, 0), OPEN_PIXEL);
        assert_eq!(*img.get_pixel(0, 7), OPEN_PIXEL);
        assert_eq!(*img.get_pixel(7, 7), WALL_PIXEL);
    }

    #[test]
    fn test_zero_cell_size_falls_back_to_one_pixel() {
        let grid = Grid::square(3).unwrap();
        assert_eq!(render_image(&grid, 0).dimensions(), (3, 3));
    }
}
