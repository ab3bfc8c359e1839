//! Expectimax: agent 0 maximises; every adversary picks uniformly at random, so its value is the
//! arithmetic mean of its children.
//!
//! The action reported for a chance node is a placeholder drawn from `rng`; only the root
//! decision (agent 0) is meaningful to callers.

use log::debug;
use rand::Rng;

use crate::adversarial::{expand, leaf_value, ply_limit, Decision, Evaluator};
use crate::error::Result;
use crate::game::{GameState, MAX_AGENT};
use crate::search::tracker::SearchTracker;

pub fn expectimax<S, E, R>(
    state: &S,
    depth: u32,
    evaluation: &E,
    rng: &mut R,
) -> Result<Decision<S::Action>>
where
    S: GameState,
    E: Evaluator<S>,
    R: Rng + ?Sized,
{
    expectimax_tracked(state, depth, evaluation, rng, &mut SearchTracker::new())
}

pub fn expectimax_tracked<S, E, R>(
    state: &S,
    depth: u32,
    evaluation: &E,
    rng: &mut R,
    tracker: &mut SearchTracker,
) -> Result<Decision<S::Action>>
where
    S: GameState,
    E: Evaluator<S>,
    R: Rng + ?Sized,
{
    let limit = ply_limit(state, depth)?;
    let decision = value(state, 0, limit, evaluation, rng, tracker)?;
    debug!(
        "expectimax depth {depth}: {:?} value {} ({} nodes)",
        decision.action,
        decision.value,
        tracker.counts().expanded
    );
    Ok(decision)
}

fn value<S, E, R>(
    state: &S,
    plies: usize,
    limit: usize,
    evaluation: &E,
    rng: &mut R,
    tracker: &mut SearchTracker,
) -> Result<Decision<S::Action>>
where
    S: GameState,
    E: Evaluator<S>,
    R: Rng + ?Sized,
{
    if let Some(leaf) = leaf_value(state, plies, limit, evaluation, tracker)? {
        return Ok(leaf);
    }

    let agent = plies % state.num_agents();
    let mut actions = expand(state, agent, plies, tracker)?;

    if agent == MAX_AGENT {
        let mut best = Decision::leaf(f64::NEG_INFINITY);
        for action in actions {
            let child = state.generate_successor(agent, &action);
            let v = value(&child, plies + 1, limit, evaluation, rng, tracker)?.value;
            if best.action.is_none() || v > best.value {
                best = Decision {
                    action: Some(action),
                    value: v,
                };
            }
        }
        return Ok(best);
    }

    let mut total = 0.0;
    for action in &actions {
        let child = state.generate_successor(agent, action);
        total += value(&child, plies + 1, limit, evaluation, rng, tracker)?.value;
    }
    let mean = total / actions.len() as f64;
    let pick = rng.gen_range(0..actions.len());
    Ok(Decision {
        action: Some(actions.swap_remove(pick)),
        value: mean,
    })
}
