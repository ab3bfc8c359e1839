//! Problem layer: the interface graph-search engines consume.
//!
//! A [`SearchProblem`] exposes:
//! - a start state
//! - a goal test
//! - successor generation as [`Successor`] triples `(next, action, step_cost)`
//! - the total cost of an action sequence
//!
//! Engines assume nothing about a state beyond `Eq + Hash`, so the explored set and cost maps
//! stay consistent for any representation.

use std::fmt::Debug;
use std::hash::Hash;

/// One outgoing transition of a state. `step_cost` must be non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub step_cost: f64,
}

impl<S, A> Successor<S, A> {
    #[inline]
    pub fn new(state: S, action: A, step_cost: f64) -> Self {
        Self {
            state,
            action,
            step_cost,
        }
    }
}

pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    fn start_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of following `actions` from the start state, or `None` if the sequence
    /// contains an illegal move.
    fn path_cost(&self, actions: &[Self::Action]) -> Option<f64>;
}

/// The trivial heuristic. Reduces A* to uniform-cost search.
#[inline]
pub fn null_heuristic<P: SearchProblem>(_state: &P::State, _problem: &P) -> f64 {
    0.0
}
