//! Concrete grid-maze collaborators.
//!
//! These sit outside the algorithm core; they give the engines something real to search:
//! - [`Maze`]: a walled grid, built programmatically.
//! - [`position`]: single-agent path finding to a goal cell ([`PositionSearchProblem`]).
//! - [`pursuit`]: Pac-Man versus ghosts with food ([`PursuitState`]).
//! - [`layouts`]: built-in boards resolvable by name.

pub mod layouts;
pub mod position;
pub mod pursuit;

use crate::core::coord::{Coord, Direction};

pub use layouts::Layout;
pub use position::{euclidean_heuristic, manhattan_heuristic, PositionSearchProblem};
pub use pursuit::{reflex_evaluation, Outcome, PursuitState};

/// A `width x height` grid. Cells outside the grid count as walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: i32,
    height: i32,
    walls: Vec<bool>,
}

impl Maze {
    /// A grid with no walls at all.
    ///
    /// The cell count must fit in an `i32` so every in-bounds index does too.
    pub fn open(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "maze must be non-empty: {width}x{height}");
        let cells = width
            .checked_mul(height)
            .unwrap_or_else(|| panic!("maze {width}x{height} has too many cells"));
        Self {
            width,
            height,
            walls: vec![false; cells as usize],
        }
    }

    /// A grid whose outer ring is wall.
    pub fn bordered(width: i32, height: i32) -> Self {
        let mut maze = Self::open(width, height);
        for x in 0..width {
            maze.set_wall(Coord::new(x, 0));
            maze.set_wall(Coord::new(x, height - 1));
        }
        for y in 0..height {
            maze.set_wall(Coord::new(0, y));
            maze.set_wall(Coord::new(width - 1, y));
        }
        maze
    }

    pub fn with_wall(mut self, c: Coord) -> Self {
        self.set_wall(c);
        self
    }

    /// Wall every cell on the axis-aligned segment `from..=to`.
    pub fn with_wall_segment(mut self, from: Coord, to: Coord) -> Self {
        assert!(
            from.x == to.x || from.y == to.y,
            "wall segment {from} -> {to} is not axis-aligned"
        );
        for x in from.x.min(to.x)..=from.x.max(to.x) {
            for y in from.y.min(to.y)..=from.y.max(to.y) {
                self.set_wall(Coord::new(x, y));
            }
        }
        self
    }

    fn set_wall(&mut self, c: Coord) {
        let idx = self
            .index(c)
            .unwrap_or_else(|| panic!("wall {c} outside {}x{} maze", self.width, self.height));
        self.walls[idx] = true;
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if self.in_bounds(c) {
            Some((c.y * self.width + c.x) as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.width && c.y < self.height
    }

    #[inline]
    pub fn is_wall(&self, c: Coord) -> bool {
        self.index(c).map_or(true, |i| self.walls[i])
    }

    #[inline]
    pub fn is_open(&self, c: Coord) -> bool {
        !self.is_wall(c)
    }

    /// Moving directions out of `c` that do not hit a wall, in [`Direction::CARDINAL`] order.
    pub fn legal_directions(&self, c: Coord) -> Vec<Direction> {
        Direction::CARDINAL
            .into_iter()
            .filter(|&d| self.is_open(c.step(d)))
            .collect()
    }

    pub fn open_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Coord::new(x, y)))
            .filter(move |&c| self.is_open(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bordered_maze_walls_its_ring() {
        let maze = Maze::bordered(4, 3);
        assert!(maze.is_wall(Coord::new(0, 1)));
        assert!(maze.is_wall(Coord::new(3, 2)));
        assert!(maze.is_open(Coord::new(1, 1)));
        assert!(maze.is_wall(Coord::new(-1, 1)));
        assert_eq!(maze.open_cells().count(), 2);
        assert_eq!(
            maze.legal_directions(Coord::new(1, 1)),
            vec![Direction::East]
        );
    }

    #[test]
    fn single_wall_blocks_a_direction() {
        let maze = Maze::open(3, 3).with_wall(Coord::new(1, 2));
        assert_eq!(
            maze.legal_directions(Coord::new(1, 1)),
            vec![Direction::South, Direction::East, Direction::West]
        );
        assert_eq!(maze.open_cells().count(), 8);
    }

    #[test]
    #[should_panic(expected = "too many cells")]
    fn oversized_maze_is_rejected() {
        Maze::open(i32::MAX, 2);
    }
}
