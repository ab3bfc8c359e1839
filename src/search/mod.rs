//! Graph-search engines over a [`SearchProblem`](crate::problem::SearchProblem).
//!
//! - [`uninformed`]: depth-first and breadth-first search.
//! - [`best_first`]: uniform-cost search and A*.
//! - [`tracker`]: per-run counters.

pub mod best_first;
pub mod tracker;
pub mod uninformed;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::problem::SearchProblem;

pub use best_first::{
    a_star_search, a_star_search_tracked, uniform_cost_search, uniform_cost_search_tracked,
};
pub use tracker::{SearchCounts, SearchTracker};
pub use uninformed::{
    breadth_first_search, breadth_first_search_tracked, depth_first_search,
    depth_first_search_tracked,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Dfs,
    Bfs,
    Ucs,
    Astar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::Ucs,
        Algorithm::Astar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dfs => "dfs",
            Algorithm::Bfs => "bfs",
            Algorithm::Ucs => "ucs",
            Algorithm::Astar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dfs" | "depthFirstSearch" => Ok(Algorithm::Dfs),
            "bfs" | "breadthFirstSearch" => Ok(Algorithm::Bfs),
            "ucs" | "uniformCostSearch" => Ok(Algorithm::Ucs),
            "astar" | "aStarSearch" => Ok(Algorithm::Astar),
            _ => Err(SearchError::UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

/// Result of [`solve`]: the plan plus what it cost to find.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome<A> {
    pub algorithm: Algorithm,
    pub actions: Vec<A>,
    /// `problem.path_cost(actions)`; `None` if the problem rejects its own plan.
    pub cost: Option<f64>,
    pub counts: SearchCounts,
}

/// Run `algorithm` on `problem`. The heuristic is only consulted by A*.
pub fn solve<P, H>(problem: &P, algorithm: Algorithm, heuristic: H) -> Result<SearchOutcome<P::Action>>
where
    P: SearchProblem,
    H: Fn(&P::State, &P) -> f64,
{
    let mut tracker = SearchTracker::new();
    let actions = match algorithm {
        Algorithm::Dfs => depth_first_search_tracked(problem, &mut tracker)?,
        Algorithm::Bfs => breadth_first_search_tracked(problem, &mut tracker)?,
        Algorithm::Ucs => uniform_cost_search_tracked(problem, &mut tracker)?,
        Algorithm::Astar => a_star_search_tracked(problem, heuristic, &mut tracker)?,
    };
    let cost = problem.path_cost(&actions);
    Ok(SearchOutcome {
        algorithm,
        actions,
        cost,
        counts: tracker.counts(),
    })
}
