//! Structured errors returned by the search engines and their collaborators.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by graph search, adversarial search and agent construction.
///
/// Every variant propagates to the immediate caller. Nothing is retried: the searches are
/// deterministic, so a failure would simply repeat.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SearchError {
    /// The frontier emptied without reaching a goal.
    #[error("no path found (expanded {expanded} nodes)")]
    NoPathFound { expanded: u64 },

    /// A problem or game state broke its interface contract.
    #[error("malformed problem: {reason}")]
    MalformedProblem { reason: String },

    /// An evaluation function that resolves by name but has no body yet.
    #[error("evaluation policy '{name}' is not implemented")]
    UnimplementedPolicy { name: &'static str },

    #[error("unknown evaluation function '{name}' (available: {})", .available.join(", "))]
    UnknownEvaluation {
        name: String,
        available: Vec<&'static str>,
    },

    #[error("unknown search algorithm '{name}'")]
    UnknownAlgorithm { name: String },

    #[error("unknown adversarial strategy '{name}'")]
    UnknownStrategy { name: String },

    #[error("unknown layout '{name}'")]
    UnknownLayout { name: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SearchError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        SearchError::MalformedProblem {
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;
