//! Per-run counters for search routines.
//!
//! Counters only observe a search; they never stop one. Every engine has a `*_tracked` variant
//! that reports into a caller-owned [`SearchTracker`].

use serde::{Deserialize, Serialize};

/// Running counters tracked during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCounts {
    /// States (or game-tree nodes) whose successors were generated.
    pub expanded: u64,
    /// Successors produced by expansion.
    pub generated: u64,
    /// Largest frontier size observed (graph search only).
    pub max_frontier: u64,
    /// Evaluation-function calls (adversarial search only).
    pub evaluated: u64,
}

#[derive(Debug, Clone, Default)]
pub struct SearchTracker {
    counts: SearchCounts,
}

impl SearchTracker {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn counts(&self) -> SearchCounts {
        self.counts
    }

    #[inline]
    pub fn bump_expanded(&mut self) {
        self.counts.expanded = self.counts.expanded.saturating_add(1);
    }

    #[inline]
    pub fn bump_generated(&mut self, delta: usize) {
        self.counts.generated = self.counts.generated.saturating_add(delta as u64);
    }

    #[inline]
    pub fn bump_evaluated(&mut self) {
        self.counts.evaluated = self.counts.evaluated.saturating_add(1);
    }

    #[inline]
    pub fn observe_frontier(&mut self, len: usize) {
        self.counts.max_frontier = self.counts.max_frontier.max(len as u64);
    }
}
