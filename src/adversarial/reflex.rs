//! One-ply reflex choice for agent 0.
//!
//! Every legal move is scored by a move evaluation `(state, action) -> f64`; the agent picks
//! uniformly at random among the moves sharing the best score.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::adversarial::{expand, Decision};
use crate::error::{Result, SearchError};
use crate::game::{GameState, MAX_AGENT};
use crate::search::tracker::SearchTracker;

pub fn reflex<S, F, R>(state: &S, evaluate: F, rng: &mut R) -> Result<Decision<S::Action>>
where
    S: GameState,
    F: Fn(&S, &S::Action) -> f64,
    R: Rng + ?Sized,
{
    reflex_tracked(state, evaluate, rng, &mut SearchTracker::new())
}

pub fn reflex_tracked<S, F, R>(
    state: &S,
    evaluate: F,
    rng: &mut R,
    tracker: &mut SearchTracker,
) -> Result<Decision<S::Action>>
where
    S: GameState,
    F: Fn(&S, &S::Action) -> f64,
    R: Rng + ?Sized,
{
    if state.is_terminal() {
        return Ok(Decision::leaf(state.score()));
    }

    let actions = expand(state, MAX_AGENT, 0, tracker)?;
    let scores: Vec<f64> = actions
        .iter()
        .map(|a| {
            tracker.bump_evaluated();
            evaluate(state, a)
        })
        .collect();

    let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let tied: Vec<usize> = (0..scores.len()).filter(|&i| scores[i] == best).collect();
    let &pick = tied
        .choose(rng)
        .ok_or_else(|| SearchError::malformed("every move evaluation is NaN"))?;

    debug!(
        "reflex: {:?} value {best} ({} of {} moves tied)",
        actions[pick],
        tied.len(),
        actions.len()
    );
    Ok(Decision {
        action: actions.into_iter().nth(pick),
        value: best,
    })
}
