//! Agent configuration.
//!
//! Configs are plain JSON; every field is optional and falls back to [`AgentConfig::default`]:
//!
//! ```json
//! { "strategy": "alpha_beta", "depth": 3, "evaluation": "score", "seed": 7 }
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::adversarial::{NamedEvaluation, Strategy};
use crate::error::{Result, SearchError};

pub const DEFAULT_DEPTH: u32 = 2;
pub const DEFAULT_SEED: u64 = 0x5EED_CAFE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgentConfig {
    pub strategy: Strategy,
    /// Full agent cycles searched below the root.
    pub depth: u32,
    /// Evaluation function name, resolved when the agent is built.
    pub evaluation: String,
    /// Seed for the placeholder actions expectimax reports at chance nodes.
    pub seed: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Minimax,
            depth: DEFAULT_DEPTH,
            evaluation: "score".to_string(),
            seed: DEFAULT_SEED,
        }
    }
}

impl AgentConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: AgentConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SearchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_json_str(&text)?;
        debug!("loaded agent config from {}: {cfg:?}", path.display());
        Ok(cfg)
    }

    /// Check invariants. The evaluation name is resolved here too so a bad name fails early.
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            return Err(SearchError::InvalidConfig {
                reason: "depth must be at least 1".to_string(),
            });
        }
        NamedEvaluation::by_name(&self.evaluation)?;
        Ok(())
    }
}
