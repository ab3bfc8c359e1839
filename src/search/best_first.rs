//! Uniform-cost search and A*.
//!
//! Both keep a best-known cost per state, the action sequence that achieved it, and a priority
//! frontier keyed by `g` (UCS) or `g + h` (A*). The first goal popped is returned: optimal for
//! non-negative step costs and, for A*, an admissible and consistent heuristic. Admissibility is
//! the caller's responsibility and is not checked.
//!
//! A successor is relaxed unless a strictly cheaper cost is already known, so an equal-cost
//! rediscovery of a queued state replaces the stored action sequence. An expanded state is
//! reopened only when a strictly cheaper path to it turns up, which keeps A* optimal under an
//! admissible but inconsistent heuristic. Equal-cost rediscoveries of expanded states are
//! ignored, so zero-cost cycles terminate.

use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{Result, SearchError};
use crate::frontier::PriorityQueue;
use crate::problem::{null_heuristic, SearchProblem};
use crate::search::tracker::SearchTracker;

pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> Result<Vec<P::Action>> {
    uniform_cost_search_tracked(problem, &mut SearchTracker::new())
}

pub fn uniform_cost_search_tracked<P: SearchProblem>(
    problem: &P,
    tracker: &mut SearchTracker,
) -> Result<Vec<P::Action>> {
    best_first(problem, null_heuristic::<P>, tracker, "ucs").map(|(path, _)| path)
}

pub fn a_star_search<P, H>(problem: &P, heuristic: H) -> Result<Vec<P::Action>>
where
    P: SearchProblem,
    H: Fn(&P::State, &P) -> f64,
{
    a_star_search_tracked(problem, heuristic, &mut SearchTracker::new())
}

pub fn a_star_search_tracked<P, H>(
    problem: &P,
    heuristic: H,
    tracker: &mut SearchTracker,
) -> Result<Vec<P::Action>>
where
    P: SearchProblem,
    H: Fn(&P::State, &P) -> f64,
{
    best_first(problem, heuristic, tracker, "astar").map(|(path, _)| path)
}

/// Returns the goal path and its accumulated cost.
pub(crate) fn best_first<P, H>(
    problem: &P,
    heuristic: H,
    tracker: &mut SearchTracker,
    label: &'static str,
) -> Result<(Vec<P::Action>, f64)>
where
    P: SearchProblem,
    H: Fn(&P::State, &P) -> f64,
{
    let mut cost: FxHashMap<P::State, f64> = FxHashMap::default();
    let mut paths: FxHashMap<P::State, Vec<P::Action>> = FxHashMap::default();
    let mut closed: FxHashSet<P::State> = FxHashSet::default();
    let mut frontier: PriorityQueue<P::State> = PriorityQueue::new();

    let start = problem.start_state();
    cost.insert(start.clone(), 0.0);
    paths.insert(start.clone(), Vec::new());
    frontier.push(start, 0.0);
    tracker.observe_frontier(frontier.len());

    while let Some(state) = frontier.pop() {
        if !closed.insert(state.clone()) {
            continue;
        }
        let g = cost.get(&state).copied().unwrap_or(0.0);
        let base = paths.remove(&state).unwrap_or_default();

        if problem.is_goal(&state) {
            debug!(
                "{label}: reached goal after {} expansions, cost {g}, path length {}",
                tracker.counts().expanded,
                base.len()
            );
            return Ok((base, g));
        }

        tracker.bump_expanded();
        let successors = problem.successors(&state);
        tracker.bump_generated(successors.len());
        trace!("{label}: expand {state:?} at g={g}");

        for succ in successors {
            if succ.step_cost.is_nan() || succ.step_cost < 0.0 {
                return Err(SearchError::malformed(format!(
                    "step cost {} from {state:?} via {:?} is not a non-negative number",
                    succ.step_cost, succ.action
                )));
            }
            let tentative = g + succ.step_cost;
            let known = cost.get(&succ.state).copied();
            if matches!(known, Some(k) if k < tentative) {
                continue;
            }
            if closed.contains(&succ.state) {
                if matches!(known, Some(k) if k <= tentative) {
                    continue;
                }
                trace!("{label}: reopen {:?} at g={tentative}", succ.state);
                closed.remove(&succ.state);
            }

            let priority = tentative + heuristic(&succ.state, problem);
            cost.insert(succ.state.clone(), tentative);
            frontier.update(succ.state.clone(), priority);

            let mut path = Vec::with_capacity(base.len() + 1);
            path.extend_from_slice(&base);
            path.push(succ.action);
            paths.insert(succ.state, path);
        }
        tracker.observe_frontier(frontier.len());
    }

    let expanded = tracker.counts().expanded;
    debug!("{label}: frontier exhausted after {expanded} expansions");
    Err(SearchError::NoPathFound { expanded })
}
