//! Classical search and adversarial game-tree search for a grid pursuit game.
//!
//! Two engines sit over narrow consumed interfaces:
//! - graph search (DFS, BFS, UCS, A*) over a [`SearchProblem`]
//! - minimax, alpha-beta and expectimax over a turn-ordered [`GameState`]
//!
//! The [`maze`] module provides concrete collaborators for both.

pub mod adversarial;
pub mod config;
pub mod core;
pub mod error;
pub mod frontier;
pub mod game;
pub mod maze;
pub mod problem;
pub mod search;

pub use crate::adversarial::{
    Decision, Evaluator, NamedEvaluation, ReflexAgent, SearchAgent, Strategy,
};
pub use crate::config::AgentConfig;
pub use crate::core::coord::{Coord, Direction};
pub use crate::error::{Result, SearchError};
pub use crate::game::{AgentIndex, GameState};
pub use crate::problem::{null_heuristic, SearchProblem, Successor};
pub use crate::search::{solve, Algorithm, SearchOutcome};
