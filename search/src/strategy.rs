//! Frontier selection strategies
//!
//! A strategy is a pure function from the current frontier to the next one.
//! Strategies read node scores and children but never mutate the tree; the
//! driver populates children (and scores) before asking a strategy to select
//! among them.
//!
//! ## The three strategies
//!
//! - **Breadth-first**: every child of every frontier node. Explores all
//!   viable branches at each depth.
//! - **Depth-first**: the FIRST child of each frontier node still below the
//!   depth bound. This is deliberately not textbook DFS — no backtracking,
//!   no visited set, just "always descend via the first branch".
//! - **Best-first**: stable score-descending sort of the frontier, keep the
//!   top `top_k`, then their children. The strategy that actually exploits
//!   evaluator scores to prune.
//!
//! Unknown strategy names are rejected at parse time ([`StrategyKind::from_str`],
//! [`StrategyKind::is_valid`]); there is no "unknown" execution path.

use crate::node::NodeId;
use crate::tree::ThoughtTree;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A strategy name that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search strategy: {0} (expected breadth_first, depth_first, or best_first)")]
pub struct UnknownStrategy(
    /// The rejected name.
    pub String,
);

/// The available frontier selection strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Expand every child of every frontier node.
    BreadthFirst,
    /// Descend via the first child only, bounded by max depth.
    DepthFirst,
    /// Keep the `top_k` best-scored frontier nodes, expand their children.
    BestFirst,
}

impl StrategyKind {
    /// All recognized strategy names.
    pub const NAMES: [&'static str; 3] = ["breadth_first", "depth_first", "best_first"];

    /// True iff `name` names a known strategy.
    ///
    /// Used to reject unknown configuration early rather than defaulting
    /// silently.
    #[must_use]
    pub fn is_valid(name: &str) -> bool {
        Self::from_str(name).is_ok()
    }

    /// Select the next frontier from `frontier`.
    ///
    /// Pure with respect to its inputs: identical frontier in, identical
    /// frontier out. `max_depth` bounds depth-first descent; `top_k` bounds
    /// best-first retention; each parameter is ignored by the strategies
    /// that do not use it.
    #[must_use]
    pub fn select_next(
        self,
        tree: &ThoughtTree,
        frontier: &[NodeId],
        max_depth: usize,
        top_k: usize,
    ) -> Vec<NodeId> {
        match self {
            Self::BreadthFirst => breadth_first(tree, frontier),
            Self::DepthFirst => depth_first(tree, frontier, max_depth),
            Self::BestFirst => best_first(tree, frontier, top_k),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breadth_first" => Ok(Self::BreadthFirst),
            "depth_first" => Ok(Self::DepthFirst),
            "best_first" => Ok(Self::BestFirst),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BreadthFirst => "breadth_first",
            Self::DepthFirst => "depth_first",
            Self::BestFirst => "best_first",
        };
        write!(f, "{name}")
    }
}

/// All children of all frontier nodes, frontier order then insertion order.
#[must_use]
pub fn breadth_first(tree: &ThoughtTree, frontier: &[NodeId]) -> Vec<NodeId> {
    frontier
        .iter()
        .filter_map(|&id| tree.node(id))
        .flat_map(|node| node.children.iter().copied())
        .collect()
}

/// The first child of each frontier node still below `max_depth`.
///
/// Nodes without children, or already at the bound, contribute nothing.
#[must_use]
pub fn depth_first(tree: &ThoughtTree, frontier: &[NodeId], max_depth: usize) -> Vec<NodeId> {
    frontier
        .iter()
        .filter_map(|&id| tree.node(id))
        .filter(|node| node.depth < max_depth)
        .filter_map(|node| node.children.first().copied())
        .collect()
}

/// Children of the `top_k` best-scored frontier nodes.
///
/// The frontier is sorted score-descending with a stable sort, so equal
/// scores keep their frontier order before truncation.
#[must_use]
pub fn best_first(tree: &ThoughtTree, frontier: &[NodeId], top_k: usize) -> Vec<NodeId> {
    let mut ranked: Vec<NodeId> = frontier
        .iter()
        .copied()
        .filter(|&id| tree.node(id).is_some())
        .collect();
    ranked.sort_by(|&a, &b| {
        let score_a = tree.node(a).map_or(0.0, |n| n.score);
        let score_b = tree.node(b).map_or(0.0, |n| n.score);
        score_b.partial_cmp(&score_a).unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(top_k);
    breadth_first(tree, &ranked)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;

    /// Root "Start" with children A, B; two children each.
    fn two_level_tree() -> (ThoughtTree, NodeId, NodeId, Vec<NodeId>) {
        let mut tree = ThoughtTree::new("Start");
        let a = tree.add_thought(tree.root_id(), "A").unwrap();
        let b = tree.add_thought(tree.root_id(), "B").unwrap();
        let mut grandchildren = Vec::new();
        grandchildren.push(tree.add_thought(a, "A0").unwrap());
        grandchildren.push(tree.add_thought(a, "A1").unwrap());
        grandchildren.push(tree.add_thought(b, "B0").unwrap());
        grandchildren.push(tree.add_thought(b, "B1").unwrap());
        (tree, a, b, grandchildren)
    }

    #[test]
    fn names_parse_and_validate() {
        assert_eq!("breadth_first".parse::<StrategyKind>().unwrap(), StrategyKind::BreadthFirst);
        assert_eq!("depth_first".parse::<StrategyKind>().unwrap(), StrategyKind::DepthFirst);
        assert_eq!("best_first".parse::<StrategyKind>().unwrap(), StrategyKind::BestFirst);
        assert!(StrategyKind::is_valid("best_first"));
        assert!(!StrategyKind::is_valid("a_star"));
        assert!(!StrategyKind::is_valid("BreadthFirst"));

        let err = "a_star".parse::<StrategyKind>().unwrap_err();
        assert!(err.to_string().contains("a_star"));
    }

    #[test]
    fn display_round_trips() {
        for name in StrategyKind::NAMES {
            let kind: StrategyKind = name.parse().unwrap();
            assert_eq!(kind.to_string(), name);
        }
    }

    #[test]
    fn breadth_first_concatenates_children_in_order() {
        let (tree, a, b, grandchildren) = two_level_tree();
        let next = breadth_first(&tree, &[a, b]);
        assert_eq!(next, grandchildren);
    }

    #[test]
    fn breadth_first_of_leaves_is_empty() {
        let (tree, _, _, grandchildren) = two_level_tree();
        assert!(breadth_first(&tree, &grandchildren).is_empty());
    }

    #[test]
    fn depth_first_takes_first_child_only() {
        let (tree, a, b, grandchildren) = two_level_tree();
        let next = depth_first(&tree, &[a, b], 5);
        assert_eq!(next, vec![grandchildren[0], grandchildren[2]]);
    }

    #[test]
    fn depth_first_drops_nodes_at_the_bound() {
        let (tree, a, b, _) = two_level_tree();
        // A and B sit at depth 1; a bound of 1 leaves nowhere to go.
        assert!(depth_first(&tree, &[a, b], 1).is_empty());
    }

    #[test]
    fn depth_first_drops_childless_nodes() {
        let mut tree = ThoughtTree::new("Start");
        let a = tree.add_thought(tree.root_id(), "A").unwrap();
        let b = tree.add_thought(tree.root_id(), "B").unwrap();
        let b0 = tree.add_thought(b, "B0").unwrap();

        assert_eq!(depth_first(&tree, &[a, b], 5), vec![b0]);
    }

    #[test]
    fn best_first_selects_top_k_by_score() {
        let (mut tree, a, b, grandchildren) = two_level_tree();
        tree.set_score(a, 3.0).unwrap();
        tree.set_score(b, 8.0).unwrap();

        let next = best_first(&tree, &[a, b], 1);
        assert_eq!(next, vec![grandchildren[2], grandchildren[3]]);
    }

    #[test]
    fn best_first_tie_keeps_frontier_order() {
        let (mut tree, a, b, grandchildren) = two_level_tree();
        tree.set_score(a, 5.0).unwrap();
        tree.set_score(b, 5.0).unwrap();

        let next = best_first(&tree, &[a, b], 1);
        assert_eq!(next, vec![grandchildren[0], grandchildren[1]]);
    }

    #[test]
    fn strategies_are_pure() {
        let (mut tree, a, b, _) = two_level_tree();
        tree.set_score(a, 2.0).unwrap();
        tree.set_score(b, 7.0).unwrap();
        let frontier = [a, b];

        for kind in [StrategyKind::BreadthFirst, StrategyKind::DepthFirst, StrategyKind::BestFirst] {
            let first = kind.select_next(&tree, &frontier, 5, 2);
            let second = kind.select_next(&tree, &frontier, 5, 2);
            assert_eq!(first, second, "{kind} must be pure");
        }
    }

    #[test]
    fn select_next_dispatches() {
        let (tree, a, b, grandchildren) = two_level_tree();
        let next = StrategyKind::BreadthFirst.select_next(&tree, &[a, b], 5, 2);
        assert_eq!(next, grandchildren);
    }
}
