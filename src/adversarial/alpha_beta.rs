//! Minimax with alpha-beta pruning.
//!
//! The window is passed by value down each branch. At agent 0 the loop returns as soon as the
//! best value found *strictly* exceeds beta, otherwise alpha is raised to it. At an adversary the
//! loop returns as soon as the best value is *strictly* below alpha, otherwise beta is lowered.
//! Equality never prunes, so the decision matches [`minimax`](super::minimax) exactly, including
//! tie-breaking.

use log::debug;

use crate::adversarial::{expand, leaf_value, ply_limit, Decision, Evaluator};
use crate::error::Result;
use crate::game::{GameState, MAX_AGENT};
use crate::search::tracker::SearchTracker;

pub fn alpha_beta<S, E>(state: &S, depth: u32, evaluation: &E) -> Result<Decision<S::Action>>
where
    S: GameState,
    E: Evaluator<S>,
{
    alpha_beta_tracked(state, depth, evaluation, &mut SearchTracker::new())
}

pub fn alpha_beta_tracked<S, E>(
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
    let decision = value(
        state,
        0,
        limit,
        f64::NEG_INFINITY,
        f64::INFINITY,
        evaluation,
        tracker,
    )?;
    debug!(
        "alpha-beta depth {depth}: {:?} value {} ({} nodes)",
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
    mut alpha: f64,
    mut beta: f64,
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
    let actions = expand(state, agent, plies, tracker)?;

    if agent == MAX_AGENT {
        let mut best = Decision::leaf(f64::NEG_INFINITY);
        for action in actions {
            let child = state.generate_successor(agent, &action);
            let v = value(&child, plies + 1, limit, alpha, beta, evaluation, tracker)?.value;
            if best.action.is_none() || v > best.value {
                best = Decision {
                    action: Some(action),
                    value: v,
                };
            }
            if best.value > beta {
                return Ok(best);
            }
            alpha = alpha.max(best.value);
        }
        Ok(best)
    } else {
        let mut best = Decision::leaf(f64::INFINITY);
        for action in actions {
            let child = state.generate_successor(agent, &action);
            let v = value(&child, plies + 1, limit, alpha, beta, evaluation, tracker)?.value;
            if best.action.is_none() || v < best.value {
                best = Decision {
                    action: Some(action),
                    value: v,
                };
            }
            if alpha > best.value {
                return Ok(best);
            }
            beta = beta.min(best.value);
        }
        Ok(best)
    }
}
