// src/grid/grid.rs

use crate::error::{LabyrinthError, Result};
use crate::grid::Point;

/// A fixed-size field of cells, `true` for wall and `false` for open floor.
///
/// Dimensions are set at construction and never change afterwards; only cell
/// values mutate. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// An all-open grid.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LabyrinthError::EmptyGrid);
        }
        check_side(width)?;
        check_side(height)?;
        Ok(Grid {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// An all-open `size x size` grid.
    pub fn square(size: usize) -> Result<Self> {
        Self::new(size, size)
    }

    /// Builds a grid from literal rows, top row first.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(LabyrinthError::EmptyGrid);
        }
        check_side(width)?;
        check_side(height)?;

        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(LabyrinthError::RaggedRows {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    fn index(&self, point: Point) -> Option<usize> {
        if self.contains(point) {
            Some(point.y as usize * self.width + point.x as usize)
        } else {
            None
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    /// The cell value, or `None` outside the grid.
    pub fn get(&self, point: Point) -> Option<bool> {
        self.index(point).map(|i| self.cells[i])
    }

    /// Writes a cell. Returns `false` (and writes nothing) outside the grid.
    pub fn set(&mut self, point: Point, wall: bool) -> bool {
        match self.index(point) {
            Some(i) => {
                self.cells[i] = wall;
                true
            }
            None => false,
        }
    }

    /// Whether `point` lies on the outermost ring of cells.
    pub fn is_border(&self, point: Point) -> bool {
        self.contains(point)
            && (point.x == 0
                || point.y == 0
                || point.x as usize == self.width - 1
                || point.y as usize == self.height - 1)
    }

    /// Every border position in sweep order: top edge left to right, bottom edge
    /// left to right, left edge top to bottom, right edge top to bottom.
    /// Corners appear twice.
    pub fn border_sweep(&self) -> Vec<Point> {
        let last_x = self.width as i32 - 1;
        let last_y = self.height as i32 - 1;
        let columns = 0..self.width as i32;
        let rows = 0..self.height as i32;

        let mut sweep = Vec::with_capacity(2 * (self.width + self.height));
        sweep.extend(columns.clone().map(|x| Point::new(x, 0)));
        sweep.extend(columns.map(|x| Point::new(x, last_y)));
        sweep.extend(rows.clone().map(|y| Point::new(0, y)));
        sweep.extend(rows.map(|y| Point::new(last_x, y)));
        sweep
    }

    /// Row-major iteration over `(point, is_wall)`.
    pub fn cells(&self) -> impl Iterator<Item = (Point, bool)> + '_ {
        self.cells.iter().enumerate().map(move |(i, &wall)| {
            let x = (i % self.width) as i32;
            let y = (i / self.width) as i32;
            (Point::new(x, y), wall)
        })
    }

    pub fn rows(&self) -> Vec<Vec<bool>> {
        self.cells.chunks(self.width).map(<[bool]>::to_vec).collect()
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|&&wall| wall).count()
    }
}

/// Points use `i32` coordinates, so no side may exceed `i32::MAX`.
pub(crate) fn check_side(side: usize) -> Result<i32> {
    i32::try_from(side).map_err(|_| {
        LabyrinthError::InvalidConfig(format!("grid side {} exceeds the coordinate range", side))
    })
}
