use log::debug;

use crate::adversarial::{expand, leaf_value, ply_limit, Decision, Evaluator};
use crate::error::Result;
use crate::game::{GameState, MAX_AGENT};
use crate::search::tracker::SearchTracker;

/// Full-width minimax to `depth` agent cycles.
///
/// Ties resolve to the first action reaching the extreme value.
pub fn minimax<S, E>(state: &S, depth: u32, evaluation: &E) -> Result<Decision<S::Action>>
where
    S: GameState,
    E: Evaluator<S>,
{
    minimax_tracked(state, depth, evaluation, &mut SearchTracker::new())
}

pub fn minimax_tracked<S, E>(
    state: &S,
    depth: u32,
    evaluation: &E,
    tracker: &mut SearchTracker,
) -> Result<Decision<S::Action>>
where
    S: GameState,
    E: Evaluator<S>,
{
    let limit = ply_limit(state, depth)?;
    let decision = value(state, 0, limit, evaluation, tracker)?;
    debug!(
        "minimax depth {depth}: {:?} value {} ({} nodes)",
        decision.action,
        decision.value,
        tracker.counts().expanded
    );
    Ok(decision)
}

fn value<S, E>(
    state: &S,
    plies: usize,
    limit: usize,
    evaluation: &E,
    tracker: &mut SearchTracker,
) -> Result<Decision<S::Action>>
where
    S: GameState,
    E: Evaluator<S>,
{
    if let Some(leaf) = leaf_value(state, plies, limit, evaluation, tracker)? {
        return Ok(leaf);
    }

    let agent = plies % state.num_agents();
    let maximizing = agent == MAX_AGENT;
    let mut best = Decision::leaf(if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    });

    for action in expand(state, agent, plies, tracker)? {
        let child = state.generate_successor(agent, &action);
        let v = value(&child, plies + 1, limit, evaluation, tracker)?.value;
        let improves = if maximizing {
            v > best.value
        } else {
            v < best.value
        };
        if best.action.is_none() || improves {
            best = Decision {
                action: Some(action),
                value: v,
            };
        }
    }

    Ok(best)
}
