//! Search configuration
//!
//! [`SearchConfig`] carries the driver's policies: how deep to search, how
//! many children to request per node, how many frontier nodes best-first
//! keeps, and which strategy selects the next frontier. Validation fails
//! fast with a clear message instead of letting a zero bound produce an
//! instantly-empty search.

use crate::strategy::StrategyKind;
use serde::{Deserialize, Serialize};

/// Invalid search configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid search config: {0}")]
pub struct ConfigError(
    /// What was wrong with the configuration.
    pub String,
);

/// Policies for one search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum tree depth to expand to (root is depth 0).
    pub max_depth: usize,
    /// Child thoughts requested per frontier node.
    pub branch_factor: usize,
    /// Frontier nodes retained by best-first selection.
    pub top_k: usize,
    /// Frontier selection strategy.
    pub strategy: StrategyKind,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            branch_factor: 3,
            top_k: 2,
            strategy: StrategyKind::BestFirst,
        }
    }
}

impl SearchConfig {
    /// Builder: set maximum depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Builder: set children requested per frontier node.
    #[must_use]
    pub const fn with_branch_factor(mut self, branch_factor: usize) -> Self {
        self.branch_factor = branch_factor;
        self
    }

    /// Builder: set best-first retention.
    #[must_use]
    pub const fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Builder: set the frontier strategy.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any bound is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError("max_depth must be > 0".to_string()));
        }
        if self.branch_factor == 0 {
            return Err(ConfigError("branch_factor must be > 0".to_string()));
        }
        if self.top_k == 0 {
            return Err(ConfigError("top_k must be > 0".to_string()));
        }
        Ok(())
    }
}
