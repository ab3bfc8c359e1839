//! Turn-ordered multi-agent game states consumed by the adversarial engines.
//!
//! Agent 0 is the maximising (controlled) agent; every other index is an adversary. Turns cycle
//! `0, 1, .., n-1, 0, ..`.

use std::fmt::Debug;

pub type AgentIndex = usize;

/// The controlled agent's index.
pub const MAX_AGENT: AgentIndex = 0;

pub trait GameState {
    type Action: Clone + Debug;

    fn num_agents(&self) -> usize;

    /// Legal moves for `agent`. Must be non-empty for every non-terminal state.
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Self::Action>;

    fn generate_successor(&self, agent: AgentIndex, action: &Self::Action) -> Self
    where
        Self: Sized;

    fn is_win(&self) -> bool;

    fn is_lose(&self) -> bool;

    #[inline]
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }

    /// Running game score, consulted by the `score` evaluation.
    #[inline]
    fn score(&self) -> f64 {
        0.0
    }
}
