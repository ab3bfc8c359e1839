//! Depth-first and breadth-first graph search.
//!
//! Semantics:
//! - The start state enters the frontier as a root node with no action.
//! - A state is marked explored when it is *popped*, not when it is pushed, so a state can sit in
//!   the frontier more than once before its first expansion. Popping an already explored state
//!   is a no-op: each state is expanded at most once.
//! - BFS additionally refuses to push a state that is already waiting in the frontier, which
//!   keeps the queue bounded by the number of distinct states. DFS does not.
//! - The goal test runs on pop. The path is rebuilt by walking node backpointers.

use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::error::{Result, SearchError};
use crate::frontier::{Frontier, Queue, Stack};
use crate::problem::SearchProblem;
use crate::search::tracker::SearchTracker;

/// A frontier node. Backpointers are indices into the node arena, so two pushes of the same
/// state keep distinct parents.
struct Node<S, A> {
    state: S,
    action: Option<A>,
    parent: Option<usize>,
}

pub fn depth_first_search<P: SearchProblem>(problem: &P) -> Result<Vec<P::Action>> {
    depth_first_search_tracked(problem, &mut SearchTracker::new())
}

pub fn depth_first_search_tracked<P: SearchProblem>(
    problem: &P,
    tracker: &mut SearchTracker,
) -> Result<Vec<P::Action>> {
    graph_search(problem, Stack::new(), false, tracker, "dfs")
}

pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> Result<Vec<P::Action>> {
    breadth_first_search_tracked(problem, &mut SearchTracker::new())
}

pub fn breadth_first_search_tracked<P: SearchProblem>(
    problem: &P,
    tracker: &mut SearchTracker,
) -> Result<Vec<P::Action>> {
    graph_search(problem, Queue::new(), true, tracker, "bfs")
}

fn graph_search<P, F>(
    problem: &P,
    mut frontier: F,
    skip_queued: bool,
    tracker: &mut SearchTracker,
    label: &'static str,
) -> Result<Vec<P::Action>>
where
    P: SearchProblem,
    F: Frontier<usize>,
{
    let mut nodes: Vec<Node<P::State, P::Action>> = Vec::new();
    let mut explored: FxHashSet<P::State> = FxHashSet::default();
    let mut queued: FxHashSet<P::State> = FxHashSet::default();

    let start = problem.start_state();
    if skip_queued {
        queued.insert(start.clone());
    }
    nodes.push(Node {
        state: start,
        action: None,
        parent: None,
    });
    frontier.push(0);
    tracker.observe_frontier(frontier.len());

    while let Some(id) = frontier.pop() {
        let state = nodes[id].state.clone();
        if skip_queued {
            queued.remove(&state);
        }
        if !explored.insert(state.clone()) {
            continue;
        }

        if problem.is_goal(&state) {
            let path = reconstruct_path(&nodes, id);
            debug!(
                "{label}: reached goal after {} expansions, path length {}",
                tracker.counts().expanded,
                path.len()
            );
            return Ok(path);
        }

        tracker.bump_expanded();
        let successors = problem.successors(&state);
        tracker.bump_generated(successors.len());
        trace!("{label}: expand {state:?} ({} successors)", successors.len());

        for succ in successors {
            if explored.contains(&succ.state) {
                continue;
            }
            if skip_queued && !queued.insert(succ.state.clone()) {
                continue;
            }
            nodes.push(Node {
                state: succ.state,
                action: Some(succ.action),
                parent: Some(id),
            });
            frontier.push(nodes.len() - 1);
        }
        tracker.observe_frontier(frontier.len());
    }

    let expanded = tracker.counts().expanded;
    debug!("{label}: frontier exhausted after {expanded} expansions");
    Err(SearchError::NoPathFound { expanded })
}

fn reconstruct_path<S, A: Clone>(nodes: &[Node<S, A>], goal: usize) -> Vec<A> {
    let mut path = Vec::new();
    let mut cur = Some(goal);
    while let Some(id) = cur {
        let node = &nodes[id];
        if let Some(action) = &node.action {
            path.push(action.clone());
        }
        cur = node.parent;
    }
    path.reverse();
    path
}
