//! # Multipath Search
//!
//! Multi-path reasoning search: grow a tree of candidate "thoughts", score
//! each candidate through an injected model capability, and select a best
//! root-to-leaf path.
//!
//! ## Components
//!
//! - [`node`] / [`tree`]: the arena-backed thought tree with depth-indexed,
//!   leaf, top-K, and best-path queries
//! - [`strategy`]: pure frontier selectors (breadth-first, depth-first,
//!   best-first)
//! - [`evaluator`]: prompt-based scoring with clamping and a neutral
//!   fallback on failure
//! - [`driver`]: the level-by-level orchestration loop
//! - [`config`]: depth/branching/selection policy
//!
//! ## Example
//!
//! ```ignore
//! use multipath_search::{Evaluator, SearchConfig, SearchDriver, StrategyKind};
//!
//! let evaluator = Evaluator::new(problem, "mathematical progress", completion);
//! let config = SearchConfig::default()
//!     .with_strategy(StrategyKind::BestFirst)
//!     .with_max_depth(3);
//! let driver = SearchDriver::new(generator, evaluator, config);
//!
//! let outcome = driver.run(problem).await?;
//! println!("{}", outcome.conclusion);
//! ```
//!
//! The search is heuristic: no optimality guarantee, no persistence across
//! runs, and every run rebuilds its tree from scratch.

pub mod config;
pub mod driver;
pub mod evaluator;
pub mod node;
pub mod strategy;
pub mod tree;

// Re-export commonly used types
pub use config::{ConfigError, SearchConfig};
pub use driver::{SearchDriver, SearchError, SearchOutcome};
pub use evaluator::{Evaluator, FALLBACK_SCORE, MAX_SCORE, MIN_SCORE};
pub use node::{NodeId, NodeSnapshot, ThoughtNode};
pub use strategy::{StrategyKind, UnknownStrategy, best_first, breadth_first, depth_first};
pub use tree::{ThoughtTree, TreeError, TreeSnapshot};
