// src/labyrinth/history.rs
//! Per-dwarf memory of the squares it has looked at or walked on.

use crate::grid::Point;

/// What a single dwarf remembers about one square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquareHistory {
    pub visit_count: u32,
    pub has_been_dug: bool,
}

impl SquareHistory {
    /// The record left after digging into a wall.
    pub fn dug() -> Self {
        SquareHistory {
            visit_count: 1,
            has_been_dug: true,
        }
    }

    /// The record after walking onto the square once more.
    pub fn visited(self) -> Self {
        SquareHistory {
            visit_count: self.visit_count.saturating_add(1),
            ..self
        }
    }
}

/// Per-dwarf memory, one optional record per grid cell.
///
/// A missing entry means the dwarf has never looked at the square.
#[derive(Debug, Clone)]
pub struct VisitMap {
    width: usize,
    height: usize,
    squares: Vec<Option<SquareHistory>>,
}

impl VisitMap {
    pub fn new(width: usize, height: usize) -> Self {
        VisitMap {
            width,
            height,
            squares: vec![None; width * height],
        }
    }

    fn index(&self, point: Point) -> Option<usize> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as usize, point.y as usize);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn get(&self, point: Point) -> Option<SquareHistory> {
        self.index(point).and_then(|i| self.squares[i])
    }

    pub fn is_known(&self, point: Point) -> bool {
        self.get(point).is_some()
    }

    /// Returns the record for `point`, creating an empty one on first sight.
    /// Points outside the map are never recorded.
    pub fn consider(&mut self, point: Point) -> SquareHistory {
        match self.index(point) {
            Some(i) => *self.squares[i].get_or_insert_with(SquareHistory::default),
            None => SquareHistory::default(),
        }
    }

    pub fn record(&mut self, point: Point, history: SquareHistory) {
        if let Some(i) = self.index(point) {
            self.squares[i] = Some(history);
        }
    }
}
