// src/labyrinth/dwarf.rs
//! A little dwarf that digs the remaining paths of the labyrinth.
//!
//! Each dwarf starts somewhere inside the grid and wanders until it stands on
//! the border. At every step it looks at the four neighbouring squares and
//! moves to the most interesting one:
//!
//! 1. open squares it has never walked on,
//! 2. walls that open onto territory it has never looked at,
//! 3. open squares it already walked on, fewest visits first,
//! 4. walls in front of squares it already knows, only when nothing else is left.
//!
//! On a tie it avoids stepping straight back to where it came from; otherwise
//! its own (shuffled once) direction order decides.

use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Grid, Point, Vector, OPEN};
use crate::labyrinth::history::{SquareHistory, VisitMap};

/// Interest of a wall with unexplored territory behind it. Open squares score
/// twice their visit count, so this sits between "never walked" and "walked once".
pub const FRESH_WALL_INTEREST: u32 = 1;
/// Interest of a wall in front of a square the dwarf already knows.
pub const KNOWN_WALL_INTEREST: u32 = u32::MAX;

/// What a single call to [`Dwarf::dig_once`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigStep {
    /// The dwarf already stands on the border.
    Idle,
    /// Moved onto an open square.
    Walked(Point),
    /// Carved a wall open and moved into it.
    Dug(Point),
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    target: Point,
    is_wall: bool,
    history: SquareHistory,
    interest: u32,
}

#[derive(Debug, Clone)]
pub struct Dwarf {
    position: Point,
    last_position: Option<Point>,
    directions: [Vector; 4],
    history: VisitMap,
    width: usize,
    height: usize,
}

impl Dwarf {
    /// A dwarf at `position` on `grid`, with its direction order shuffled by `rng`.
    pub fn new<R: Rng + ?Sized>(position: Point, grid: &Grid, rng: &mut R) -> Self {
        let mut directions = Vector::ALL;
        directions.shuffle(rng);
        Self::with_directions(position, grid, directions)
    }

    /// A dwarf with a fixed direction order.
    pub fn with_directions(position: Point, grid: &Grid, directions: [Vector; 4]) -> Self {
        let mut history = VisitMap::new(grid.width(), grid.height());
        history.record(position, SquareHistory::default().visited());
        Dwarf {
            position,
            last_position: None,
            directions,
            history,
            width: grid.width(),
            height: grid.height(),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn last_position(&self) -> Option<Point> {
        self.last_position
    }

    pub fn directions(&self) -> [Vector; 4] {
        self.directions
    }

    pub fn history(&self, point: Point) -> Option<SquareHistory> {
        self.history.get(point)
    }

    /// Done once the dwarf stands on the outermost ring. Never reverts.
    pub fn is_done(&self) -> bool {
        let Point { x, y } = self.position;
        x <= 0 || y <= 0 || x as usize >= self.width - 1 || y as usize >= self.height - 1
    }

    /// Takes a single step, carving through a wall if that is the best move.
    pub fn dig_once(&mut self, grid: &mut Grid) -> DigStep {
        if self.is_done() {
            return DigStep::Idle;
        }

        let mut candidates = Vec::with_capacity(4);
        for direction in self.directions {
            let target = self.position.offset(direction);
            let Some(is_wall) = grid.get(target) else {
                continue;
            };
            let history = self.history.consider(target);
            let interest = if is_wall {
                let behind = target.offset(direction);
                if self.history.is_known(behind) {
                    KNOWN_WALL_INTEREST
                } else {
                    FRESH_WALL_INTEREST
                }
            } else {
                history.visit_count.saturating_mul(2)
            };
            candidates.push(Candidate {
                target,
                is_wall,
                history,
                interest,
            });
        }

        let last_position = self.last_position;
        let Some(chosen) = candidates
            .into_iter()
            .min_by_key(|c| (c.interest, Some(c.target) == last_position))
        else {
            return DigStep::Idle;
        };

        self.last_position = Some(self.position);
        self.position = chosen.target;

        if chosen.is_wall {
            grid.set(chosen.target, OPEN);
            self.history.record(chosen.target, SquareHistory::dug());
            trace!("Dwarf dug into {}", chosen.target);
            DigStep::Dug(chosen.target)
        } else {
            self.history.record(chosen.target, chosen.history.visited());
            DigStep::Walked(chosen.target)
        }
    }

    /// Digs until the border is reached. Returns the number of steps taken.
    pub fn dig(&mut self, grid: &mut Grid) -> usize {
        let mut steps = 0;
        while !self.is_done() {
            if self.dig_once(grid) == DigStep::Idle {
                break;
            }
            steps += 1;
        }
        steps
    }
}
