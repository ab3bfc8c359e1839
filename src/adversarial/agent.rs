//! A configured adversarial searcher for the controlled agent.

use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::adversarial::{
    alpha_beta_tracked, expectimax_tracked, minimax_tracked, reflex_tracked, Decision, Evaluator,
    NamedEvaluation,
};
use crate::config::{AgentConfig, DEFAULT_SEED};
use crate::error::{Result, SearchError};
use crate::game::GameState;
use crate::search::tracker::{SearchCounts, SearchTracker};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Minimax,
    AlphaBeta,
    Expectimax,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Minimax, Strategy::AlphaBeta, Strategy::Expectimax];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alpha_beta",
            Strategy::Expectimax => "expectimax",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "minimax" | "MinimaxAgent" => Ok(Strategy::Minimax),
            "alpha_beta" | "alphabeta" | "AlphaBetaAgent" => Ok(Strategy::AlphaBeta),
            "expectimax" | "ExpectimaxAgent" => Ok(Strategy::Expectimax),
            _ => Err(SearchError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

/// Chooses moves for agent 0 with a fixed strategy, depth and evaluation.
#[derive(Debug, Clone)]
pub struct SearchAgent<E = NamedEvaluation> {
    strategy: Strategy,
    depth: u32,
    evaluation: E,
    rng: SmallRng,
    last: SearchCounts,
}

impl<E> SearchAgent<E> {
    pub fn new(strategy: Strategy, depth: u32, evaluation: E) -> Self {
        Self {
            strategy,
            depth,
            evaluation,
            rng: SmallRng::seed_from_u64(DEFAULT_SEED),
            last: SearchCounts::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn evaluation(&self) -> &E {
        &self.evaluation
    }

    /// Counters of the most recent search.
    #[inline]
    pub fn last_counts(&self) -> SearchCounts {
        self.last
    }

    /// Search from `state` (agent 0 to move) and return the root decision.
    pub fn decide<S>(&mut self, state: &S) -> Result<Decision<S::Action>>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let mut tracker = SearchTracker::new();
        let result = match self.strategy {
            Strategy::Minimax => minimax_tracked(state, self.depth, &self.evaluation, &mut tracker),
            Strategy::AlphaBeta => {
                alpha_beta_tracked(state, self.depth, &self.evaluation, &mut tracker)
            }
            Strategy::Expectimax => expectimax_tracked(
                state,
                self.depth,
                &self.evaluation,
                &mut self.rng,
                &mut tracker,
            ),
        };
        self.last = tracker.counts();
        result
    }

    /// The chosen root action, or `None` if `state` is already won or lost.
    pub fn get_action<S>(&mut self, state: &S) -> Result<Option<S::Action>>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.decide(state).map(|d| d.action)
    }
}

impl SearchAgent<NamedEvaluation> {
    /// Build an agent, resolving the evaluation name now rather than at first use.
    pub fn from_config(cfg: &AgentConfig) -> Result<Self> {
        cfg.validate()?;
        let evaluation = NamedEvaluation::by_name(&cfg.evaluation)?;
        debug!(
            "agent: strategy={} depth={} evaluation={evaluation}",
            cfg.strategy, cfg.depth
        );
        Ok(Self::new(cfg.strategy, cfg.depth, evaluation).with_seed(cfg.seed))
    }
}

/// One-ply agent: scores each legal move with `evaluate(state, action)` and breaks ties with its
/// seeded RNG.
#[derive(Debug, Clone)]
pub struct ReflexAgent<F> {
    evaluate: F,
    rng: SmallRng,
    last: SearchCounts,
}

impl<F> ReflexAgent<F> {
    pub fn new(evaluate: F) -> Self {
        Self {
            evaluate,
            rng: SmallRng::seed_from_u64(DEFAULT_SEED),
            last: SearchCounts::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    #[inline]
    pub fn last_counts(&self) -> SearchCounts {
        self.last
    }

    pub fn decide<S>(&mut self, state: &S) -> Result<Decision<S::Action>>
    where
        S: GameState,
        F: Fn(&S, &S::Action) -> f64,
    {
        let mut tracker = SearchTracker::new();
        let result = reflex_tracked(state, &self.evaluate, &mut self.rng, &mut tracker);
        self.last = tracker.counts();
        result
    }

    pub fn get_action<S>(&mut self, state: &S) -> Result<Option<S::Action>>
    where
        S: GameState,
        F: Fn(&S, &S::Action) -> f64,
    {
        self.decide(state).map(|d| d.action)
    }
}
