//! Search driver
//!
//! The driver is the imperative shell around the tree, the evaluator, and
//! the frontier strategies: it grows the tree one depth level at a time and
//! stops at the configured depth or when a level produces no children.
//!
//! ## Loop
//!
//! 1. For each frontier node, ask the [`ThoughtGenerator`] for up to
//!    `branch_factor` child thoughts and insert them (ids are assigned here,
//!    at generation time, so id order equals discovery order regardless of
//!    how scoring is interleaved).
//! 2. Score every newly inserted child. Scoring calls within one level run
//!    concurrently; scores are written back by node id, so the result is
//!    independent of completion order.
//! 3. Hand the frontier to the configured
//!    [`StrategyKind`](crate::strategy::StrategyKind) to select the next one.
//!
//! Failure policy matches the evaluator's: a generation failure drops that
//! branch with a warning and the search continues. Only configuration errors
//! abort a run.

use crate::config::{ConfigError, SearchConfig};
use crate::evaluator::Evaluator;
use crate::node::{NodeId, NodeSnapshot};
use crate::tree::{ThoughtTree, TreeError};
use futures::future::join_all;
use multipath_core::generation::{Completion, ThoughtGenerator};

/// Errors that abort a search run.
///
/// Deliberately short: generation and scoring failures degrade in place
/// instead of surfacing here.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// The configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The tree rejected an insertion. Ids come straight from the tree, so
    /// this indicates a driver bug rather than bad input.
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// The result of one search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The full tree, for inspection or snapshotting.
    pub tree: ThoughtTree,
    /// Snapshots of the best path, root first.
    pub best_path: Vec<NodeSnapshot>,
    /// The thought text at the end of the best path.
    pub conclusion: String,
}

/// Runs multi-path reasoning searches over injected capabilities.
#[derive(Debug)]
pub struct SearchDriver<G, C> {
    generator: G,
    evaluator: Evaluator<C>,
    config: SearchConfig,
}

impl<G: ThoughtGenerator, C: Completion> SearchDriver<G, C> {
    /// Create a driver.
    ///
    /// The evaluator carries the problem statement and criteria; `config`
    /// carries depth/branching/selection policy.
    pub const fn new(generator: G, evaluator: Evaluator<C>, config: SearchConfig) -> Self {
        Self {
            generator,
            evaluator,
            config,
        }
    }

    /// This driver's configuration.
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run one search over `problem`.
    ///
    /// The tree is built fresh for this run with `problem` as the root
    /// thought and discarded when the outcome is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for an invalid configuration. Tree
    /// errors cannot occur for ids the driver obtained from its own
    /// insertions but propagate rather than panic.
    pub async fn run(&self, problem: &str) -> Result<SearchOutcome, SearchError> {
        self.config.validate()?;

        let mut tree = ThoughtTree::new(problem);
        let mut frontier = vec![tree.root_id()];

        for level in 1..=self.config.max_depth {
            let inserted = self.expand_frontier(&mut tree, &frontier, problem).await?;
            if inserted.is_empty() {
                tracing::info!(level, "no children generated, stopping early");
                break;
            }

            self.score_level(&mut tree, &inserted).await?;

            tracing::info!(
                level,
                expanded = frontier.len(),
                inserted = inserted.len(),
                total_nodes = tree.node_count(),
                "level complete"
            );

            frontier = self.config.strategy.select_next(
                &tree,
                &frontier,
                self.config.max_depth,
                self.config.top_k,
            );
            if frontier.is_empty() {
                tracing::info!(level, "strategy selected an empty frontier, stopping");
                break;
            }
        }

        let best_path: Vec<NodeSnapshot> =
            tree.best_path().iter().map(|node| node.snapshot()).collect();
        let conclusion = best_path
            .last()
            .map(|node| node.thought.clone())
            .unwrap_or_default();

        Ok(SearchOutcome {
            tree,
            best_path,
            conclusion,
        })
    }

    /// Generate and insert children for every frontier node.
    ///
    /// Insertion order follows frontier order then proposal order, which
    /// fixes discovery order for all later tie-breaking. A failed proposal
    /// drops that branch only.
    async fn expand_frontier(
        &self,
        tree: &mut ThoughtTree,
        frontier: &[NodeId],
        problem: &str,
    ) -> Result<Vec<NodeId>, SearchError> {
        let mut inserted = Vec::new();
        for &parent in frontier {
            let Some(parent_thought) = tree.node(parent).map(|n| n.thought.clone()) else {
                continue;
            };

            match self
                .generator
                .propose(problem, &parent_thought, self.config.branch_factor)
                .await
            {
                Ok(thoughts) => {
                    for thought in thoughts {
                        inserted.push(tree.add_thought(parent, thought)?);
                    }
                }
                Err(error) => {
                    tracing::warn!(parent = %parent, %error, "proposal failed, dropping branch");
                }
            }
        }
        Ok(inserted)
    }

    /// Score the given nodes concurrently and write scores back by id.
    async fn score_level(&self, tree: &mut ThoughtTree, ids: &[NodeId]) -> Result<(), SearchError> {
        let evaluations = ids.iter().map(|&id| {
            let thought = tree.node(id).map(|n| n.thought.clone()).unwrap_or_default();
            async move { (id, self.evaluator.evaluate(&thought).await) }
        });

        for (id, score) in join_all(evaluations).await {
            tree.set_score(id, score)?;
        }
        Ok(())
    }
}
