//! Path finding from one cell to a goal cell.

use crate::core::coord::{Coord, Direction};
use crate::maze::Maze;
use crate::problem::{SearchProblem, Successor};

/// Cost of entering a cell.
pub type CellCost = fn(Coord) -> f64;

#[inline]
pub fn unit_cost(_c: Coord) -> f64 {
    1.0
}

/// Cheap to the east, expensive to the west.
#[inline]
pub fn stay_east_cost(c: Coord) -> f64 {
    0.5f64.powi(c.x)
}

/// Cheap to the west, expensive to the east.
#[inline]
pub fn stay_west_cost(c: Coord) -> f64 {
    2f64.powi(c.x)
}

#[derive(Debug, Clone)]
pub struct PositionSearchProblem<'a> {
    maze: &'a Maze,
    start: Coord,
    goal: Coord,
    cost: CellCost,
}

impl<'a> PositionSearchProblem<'a> {
    pub fn new(maze: &'a Maze, start: Coord, goal: Coord) -> Self {
        Self {
            maze,
            start,
            goal,
            cost: unit_cost,
        }
    }

    pub fn with_cost(mut self, cost: CellCost) -> Self {
        self.cost = cost;
        self
    }

    #[inline]
    pub fn goal(&self) -> Coord {
        self.goal
    }
}

impl SearchProblem for PositionSearchProblem<'_> {
    type State = Coord;
    type Action = Direction;

    fn start_state(&self) -> Coord {
        self.start
    }

    fn is_goal(&self, state: &Coord) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Coord) -> Vec<Successor<Coord, Direction>> {
        self.maze
            .legal_directions(*state)
            .into_iter()
            .map(|d| {
                let next = state.step(d);
                Successor::new(next, d, (self.cost)(next))
            })
            .collect()
    }

    fn path_cost(&self, actions: &[Direction]) -> Option<f64> {
        let mut at = self.start;
        let mut total = 0.0;
        for &d in actions {
            at = at.step(d);
            if self.maze.is_wall(at) {
                return None;
            }
            total += (self.cost)(at);
        }
        Some(total)
    }
}

pub fn manhattan_heuristic(state: &Coord, problem: &PositionSearchProblem<'_>) -> f64 {
    f64::from(state.manhattan(problem.goal))
}

pub fn euclidean_heuristic(state: &Coord, problem: &PositionSearchProblem<'_>) -> f64 {
    state.euclidean(problem.goal)
}
