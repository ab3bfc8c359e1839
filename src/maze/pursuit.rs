//! Pac-Man versus ghosts on a [`Maze`].
//!
//! Scoring:
//! - every Pac-Man move costs [`TIME_PENALTY`]
//! - eating a pellet earns [`FOOD_SCORE`]
//! - clearing the board earns [`WIN_SCORE`] and wins
//! - sharing a cell with a ghost costs [`LOSE_PENALTY`] and loses
//!
//! Pac-Man may always `Stop`. Ghosts must move unless boxed in.

use std::collections::BTreeSet;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::coord::{Coord, Direction};
use crate::game::{AgentIndex, GameState, MAX_AGENT};
use crate::maze::Maze;

pub const FOOD_SCORE: f64 = 10.0;
pub const TIME_PENALTY: f64 = 1.0;
pub const WIN_SCORE: f64 = 500.0;
pub const LOSE_PENALTY: f64 = 500.0;

/// Reflex penalty for ending a move within one cell of a ghost.
pub const GHOST_ADJACENT_PENALTY: f64 = 100.0;
/// Per-cell weight of the distance terms in [`reflex_evaluation`].
pub const DISTANCE_WEIGHT: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PursuitState {
    maze: Rc<Maze>,
    pacman: Coord,
    ghosts: Vec<Coord>,
    food: BTreeSet<Coord>,
    score: f64,
    outcome: Option<Outcome>,
}

impl PursuitState {
    pub fn new(
        maze: Rc<Maze>,
        pacman: Coord,
        ghosts: Vec<Coord>,
        food: impl IntoIterator<Item = Coord>,
    ) -> Self {
        assert!(maze.is_open(pacman), "pacman starts inside a wall at {pacman}");
        for &g in &ghosts {
            assert!(maze.is_open(g), "ghost starts inside a wall at {g}");
        }
        let food: BTreeSet<Coord> = food.into_iter().filter(|&c| c != pacman).collect();
        let mut state = Self {
            maze,
            pacman,
            ghosts,
            food,
            score: 0.0,
            outcome: None,
        };
        state.settle();
        state
    }

    #[inline]
    pub fn pacman(&self) -> Coord {
        self.pacman
    }

    #[inline]
    pub fn ghosts(&self) -> &[Coord] {
        &self.ghosts
    }

    #[inline]
    pub fn food(&self) -> &BTreeSet<Coord> {
        &self.food
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Resolve collisions and an empty board after a move.
    fn settle(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        if self.ghosts.contains(&self.pacman) {
            self.score -= LOSE_PENALTY;
            self.outcome = Some(Outcome::Lose);
        } else if self.food.is_empty() {
            self.score += WIN_SCORE;
            self.outcome = Some(Outcome::Win);
        }
    }
}

impl GameState for PursuitState {
    type Action = Direction;

    fn num_agents(&self) -> usize {
        1 + self.ghosts.len()
    }

    fn legal_actions(&self, agent: AgentIndex) -> Vec<Direction> {
        if self.outcome.is_some() {
            return Vec::new();
        }
        if agent == MAX_AGENT {
            let mut moves = self.maze.legal_directions(self.pacman);
            moves.push(Direction::Stop);
            return moves;
        }
        match self.ghosts.get(agent - 1) {
            Some(&g) => {
                let moves = self.maze.legal_directions(g);
                if moves.is_empty() {
                    vec![Direction::Stop]
                } else {
                    moves
                }
            }
            None => Vec::new(),
        }
    }

    fn generate_successor(&self, agent: AgentIndex, action: &Direction) -> Self {
        let mut next = self.clone();
        if next.outcome.is_some() {
            return next;
        }
        if agent == MAX_AGENT {
            let to = next.pacman.step(*action);
            if next.maze.is_open(to) {
                next.pacman = to;
            }
            next.score -= TIME_PENALTY;
            if next.food.remove(&next.pacman) {
                next.score += FOOD_SCORE;
            }
        } else if let Some(g) = next.ghosts.get_mut(agent - 1) {
            let to = g.step(*action);
            if next.maze.is_open(to) {
                *g = to;
            }
        }
        next.settle();
        next
    }

    fn is_win(&self) -> bool {
        self.outcome == Some(Outcome::Win)
    }

    fn is_lose(&self) -> bool {
        self.outcome == Some(Outcome::Lose)
    }

    fn score(&self) -> f64 {
        self.score
    }
}

/// Move evaluation for [`ReflexAgent`](crate::adversarial::ReflexAgent) on a pursuit board.
///
/// Scores Pac-Man's successor after `action`: the game score, minus a pull towards the nearest
/// pellet, minus [`GHOST_ADJACENT_PENALTY`] per ghost within one cell and a small distance-weighted
/// penalty per ghost within two. Distances are euclidean.
pub fn reflex_evaluation(state: &PursuitState, action: &Direction) -> f64 {
    let next = state.generate_successor(MAX_AGENT, action);
    let at = next.pacman;
    let mut value = next.score;

    if let Some(nearest) = next.food.iter().map(|&f| at.euclidean(f)).min_by(f64::total_cmp) {
        value -= DISTANCE_WEIGHT * nearest;
    }
    for &g in &next.ghosts {
        let d = at.euclidean(g);
        if d <= 1.0 {
            value -= GHOST_ADJACENT_PENALTY;
        } else if d <= 2.0 {
            value -= DISTANCE_WEIGHT * d;
        }
    }
    value
}
