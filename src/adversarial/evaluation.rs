//! Terminal evaluation functions and their by-name registry.
//!
//! Engines take any [`Evaluator`]: plain closures `Fn(&S) -> f64` work directly. Agents built
//! from configuration resolve a [`NamedEvaluation`] once, at construction time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::game::GameState;

/// Scores a game state from the controlled agent's point of view. Higher is better.
pub trait Evaluator<S> {
    fn evaluate(&self, state: &S) -> Result<f64>;
}

impl<S, F> Evaluator<S> for F
where
    F: Fn(&S) -> f64,
{
    #[inline]
    fn evaluate(&self, state: &S) -> Result<f64> {
        Ok(self(state))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedEvaluation {
    /// The state's running game score.
    Score,
    /// Reserved slot for a hand-tuned evaluation. Resolves, but fails when invoked.
    Better,
}

const NAMES: &[(&str, NamedEvaluation)] = &[
    ("score", NamedEvaluation::Score),
    ("scoreEvaluationFunction", NamedEvaluation::Score),
    ("better", NamedEvaluation::Better),
    ("betterEvaluationFunction", NamedEvaluation::Better),
];

impl NamedEvaluation {
    pub fn by_name(name: &str) -> Result<Self> {
        NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, e)| e)
            .ok_or_else(|| SearchError::UnknownEvaluation {
                name: name.to_string(),
                available: available_names(),
            })
    }

    pub fn name(self) -> &'static str {
        match self {
            NamedEvaluation::Score => "score",
            NamedEvaluation::Better => "better",
        }
    }
}

pub fn available_names() -> Vec<&'static str> {
    NAMES.iter().map(|(n, _)| *n).collect()
}

impl FromStr for NamedEvaluation {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::by_name(s)
    }
}

impl fmt::Display for NamedEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<S: GameState> Evaluator<S> for NamedEvaluation {
    fn evaluate(&self, state: &S) -> Result<f64> {
        match self {
            NamedEvaluation::Score => Ok(state.score()),
            NamedEvaluation::Better => Err(SearchError::UnimplementedPolicy {
                name: "betterEvaluationFunction",
            }),
        }
    }
}
