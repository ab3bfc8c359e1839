//! Adversarial game-tree search over a [`GameState`].
//!
//! All engines share the same recursion shape: a node is `(state, plies_elapsed)`; the agent to
//! move is `plies_elapsed % num_agents`; the node is a leaf once the state is won or lost, or
//! once `plies_elapsed == depth * num_agents`. Leaves are scored by an [`Evaluator`].
//!
//! - [`minimax`]: agent 0 maximises, every other agent minimises.
//! - [`alpha_beta`]: minimax with an `(alpha, beta)` window; identical decisions.
//! - [`expectimax`]: adversaries are chance nodes averaging their children uniformly.
//! - [`reflex`]: no lookahead past agent 0's own move; ties broken at random.
//!
//! Nothing is memoised: the game tree is not assumed to be a DAG.

pub mod agent;
pub mod alpha_beta;
pub mod evaluation;
pub mod expectimax;
pub mod minimax;
pub mod reflex;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::game::{AgentIndex, GameState};
use crate::search::tracker::SearchTracker;

pub use agent::{ReflexAgent, SearchAgent, Strategy};
pub use alpha_beta::{alpha_beta, alpha_beta_tracked};
pub use evaluation::{Evaluator, NamedEvaluation};
pub use expectimax::{expectimax, expectimax_tracked};
pub use minimax::{minimax, minimax_tracked};
pub use reflex::{reflex, reflex_tracked};

/// The action chosen at a node and the value backing it.
///
/// `action` is `None` at leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision<A> {
    pub action: Option<A>,
    pub value: f64,
}

impl<A> Decision<A> {
    #[inline]
    pub fn leaf(value: f64) -> Self {
        Self {
            action: None,
            value,
        }
    }
}

/// Total number of plies searched below the root.
pub(crate) fn ply_limit<S: GameState>(state: &S, depth: u32) -> Result<usize> {
    let n = state.num_agents();
    if n == 0 {
        return Err(SearchError::malformed("game state reports zero agents"));
    }
    Ok(depth as usize * n)
}

/// Score `state` if it is a leaf at `plies` elapsed.
pub(crate) fn leaf_value<S, E>(
    state: &S,
    plies: usize,
    limit: usize,
    evaluation: &E,
    tracker: &mut SearchTracker,
) -> Result<Option<Decision<S::Action>>>
where
    S: GameState,
    E: Evaluator<S>,
{
    if state.is_win() || state.is_lose() || plies == limit {
        tracker.bump_evaluated();
        let value = evaluation.evaluate(state)?;
        return Ok(Some(Decision::leaf(value)));
    }
    Ok(None)
}

/// Legal actions of the agent to move at a non-leaf node.
pub(crate) fn expand<S: GameState>(
    state: &S,
    agent: AgentIndex,
    plies: usize,
    tracker: &mut SearchTracker,
) -> Result<Vec<S::Action>> {
    let actions = state.legal_actions(agent);
    if actions.is_empty() {
        return Err(SearchError::malformed(format!(
            "agent {agent} has no legal actions at a non-terminal state (ply {plies})"
        )));
    }
    tracker.bump_expanded();
    tracker.bump_generated(actions.len());
    trace!("expand ply {plies}: agent {agent}, {} actions", actions.len());
    Ok(actions)
}
