//! Thought tree
//!
//! [`ThoughtTree`] owns every node of one reasoning search in a flat arena
//! and is the only way nodes are created: `add_thought` allocates the next
//! sequential id, sets `depth = parent.depth + 1`, and links the child under
//! its parent. Nodes are never deleted; a tree is built for one search run
//! and discarded.
//!
//! ## Queries
//!
//! - depth-indexed: [`ThoughtTree::nodes_by_depth`], [`ThoughtTree::top_nodes_by_depth`]
//! - structure: [`ThoughtTree::leaf_nodes`], [`ThoughtTree::max_depth`],
//!   [`ThoughtTree::node_count`], [`ThoughtTree::path`], [`ThoughtTree::descendants`]
//! - result extraction: [`ThoughtTree::best_path`]
//!
//! Tie-breaking is deliberate everywhere scores are compared: stable sorts
//! keep discovery order among equal scores, and the greedy best-path walk
//! keeps the first child holding the maximum (`>` comparison, not `>=`).

use crate::node::{NodeId, NodeSnapshot, ThoughtNode};
use serde::Serialize;

/// Structural misuse of a [`ThoughtTree`].
///
/// The tree validates parent membership on insertion rather than silently
/// linking against an id it never issued.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// `add_thought` was called with a parent id this tree never issued.
    #[error("unknown parent node: {0}")]
    UnknownParent(NodeId),

    /// `set_score` was called with an id this tree never issued.
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),
}

/// A rooted out-tree of candidate thoughts for one search run.
#[derive(Debug, Clone)]
pub struct ThoughtTree {
    /// Arena of nodes; a `NodeId` is an index into this vector.
    nodes: Vec<ThoughtNode>,
}

impl ThoughtTree {
    /// Create a tree holding only the root thought (`node_0`, depth 0).
    #[must_use]
    pub fn new(root_thought: impl Into<String>) -> Self {
        let root = ThoughtNode::new(NodeId(0), root_thought, 0, None);
        Self { nodes: vec![root] }
    }

    /// Id of the root node.
    #[must_use]
    pub const fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &ThoughtNode {
        &self.nodes[0]
    }

    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&ThoughtNode> {
        self.nodes.get(id.0)
    }

    /// Append a new thought under `parent`.
    ///
    /// The child gets the next sequential id, `depth = parent.depth + 1`, a
    /// default score of 0.0, and becomes the last child of `parent`. No
    /// branching or depth bound is enforced here; those policies belong to
    /// the driver.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownParent`] if `parent` was not issued by
    /// this tree.
    pub fn add_thought(
        &mut self,
        parent: NodeId,
        thought: impl Into<String>,
    ) -> Result<NodeId, TreeError> {
        let parent_depth = self
            .nodes
            .get(parent.0)
            .map(|node| node.depth)
            .ok_or(TreeError::UnknownParent(parent))?;

        let id = NodeId(self.nodes.len());
        let child = ThoughtNode::new(id, thought, parent_depth + 1, Some(parent));
        self.nodes.push(child);
        self.nodes[parent.0].children.push(id);

        tracing::debug!(id = %id, parent = %parent, depth = parent_depth + 1, "thought added");
        Ok(id)
    }

    /// Overwrite the score of `id`.
    ///
    /// Scoring happens after insertion because generation and evaluation are
    /// separate steps.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] if `id` was not issued by this
    /// tree.
    pub fn set_score(&mut self, id: NodeId, score: f64) -> Result<(), TreeError> {
        self.nodes
            .get_mut(id.0)
            .map(|node| node.set_score(score))
            .ok_or(TreeError::UnknownNode(id))
    }

    /// All nodes at exactly `depth`, in pre-order traversal order.
    ///
    /// For trees grown level by level (as the driver does) this equals
    /// discovery order. Depth 0 returns `[root]`. Subtrees already past the
    /// target depth are not descended into; depth strictly increases
    /// downward, so nothing below them can match.
    #[must_use]
    pub fn nodes_by_depth(&self, depth: usize) -> Vec<&ThoughtNode> {
        let mut found = Vec::new();
        self.collect_at_depth(self.root_id(), depth, &mut found);
        found
    }

    fn collect_at_depth<'a>(&'a self, id: NodeId, depth: usize, out: &mut Vec<&'a ThoughtNode>) {
        let node = &self.nodes[id.0];
        if node.depth == depth {
            out.push(node);
            return;
        }
        if node.depth > depth {
            return;
        }
        for &child in &node.children {
            self.collect_at_depth(child, depth, out);
        }
    }

    /// All nodes with no children, in discovery (id) order.
    ///
    /// A root-only tree returns `[root]`.
    #[must_use]
    pub fn leaf_nodes(&self) -> Vec<&ThoughtNode> {
        self.nodes.iter().filter(|node| node.is_leaf()).collect()
    }

    /// The `top_k` highest-scoring nodes at `depth`.
    ///
    /// Sorted score-descending with a STABLE sort: nodes with equal scores
    /// keep their relative discovery order, so the first-discovered of a tie
    /// survives truncation.
    #[must_use]
    pub fn top_nodes_by_depth(&self, depth: usize, top_k: usize) -> Vec<&ThoughtNode> {
        let mut at_depth = self.nodes_by_depth(depth);
        // Vec::sort_by is stable; descending order via reversed operands.
        at_depth.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        at_depth.truncate(top_k);
        at_depth
    }

    /// Greedy root-to-leaf walk along the highest-scoring child at each step.
    ///
    /// Ties go to the first child in iteration order: the comparison is
    /// strict (`>`), so a later equal-maximum child never displaces an
    /// earlier one. With all-default scores the walk degenerates to "always
    /// first child", which is the documented behavior.
    ///
    /// Always terminates (the tree is acyclic and finite) and always ends at
    /// a leaf.
    #[must_use]
    pub fn best_path(&self) -> Vec<&ThoughtNode> {
        let mut path = vec![self.root()];
        let mut current = self.root();
        while let Some(best) = self.best_child(current) {
            path.push(best);
            current = best;
        }
        path
    }

    fn best_child(&self, node: &ThoughtNode) -> Option<&ThoughtNode> {
        let mut best: Option<&ThoughtNode> = None;
        for &child_id in &node.children {
            let child = &self.nodes[child_id.0];
            match best {
                Some(current) if child.score > current.score => best = Some(child),
                None => best = Some(child),
                Some(_) => {}
            }
        }
        best
    }

    /// Maximum leaf depth; 0 for a root-only tree.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|node| node.depth).max().unwrap_or(0)
    }

    /// Total nodes ever created, including the root.
    ///
    /// Nodes are never removed, so this equals the arena length.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Ordered path root → ... → `id`.
    ///
    /// Returns an empty vector for an id this tree never issued.
    #[must_use]
    pub fn path(&self, id: NodeId) -> Vec<&ThoughtNode> {
        let Some(mut node) = self.node(id) else {
            return Vec::new();
        };
        let mut path = vec![node];
        while let Some(parent) = node.parent {
            node = &self.nodes[parent.0];
            path.push(node);
        }
        path.reverse();
        path
    }

    /// All nodes strictly below `id`, in pre-order.
    ///
    /// Returns an empty vector for a leaf or an unknown id.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<&ThoughtNode> {
        let mut out = Vec::new();
        if let Some(node) = self.node(id) {
            for &child in &node.children {
                self.collect_subtree(child, &mut out);
            }
        }
        out
    }

    fn collect_subtree<'a>(&'a self, id: NodeId, out: &mut Vec<&'a ThoughtNode>) {
        let node = &self.nodes[id.0];
        out.push(node);
        for &child in &node.children {
            self.collect_subtree(child, out);
        }
    }

    /// Serializable summary of the whole tree.
    #[must_use]
    pub fn snapshot(&self) -> TreeSnapshot {
        TreeSnapshot {
            root: self.root().snapshot(),
            total_nodes: self.node_count(),
            max_depth: self.max_depth(),
            leaf_count: self.leaf_nodes().len(),
        }
    }
}

/// Serializable view of a tree, suitable for logging or snapshotting.
///
/// Not a versioned wire format.
#[derive(Debug, Clone, Serialize)]
pub struct TreeSnapshot {
    /// Snapshot of the root node.
    pub root: NodeSnapshot,
    /// Total nodes including the root.
    pub total_nodes: usize,
    /// Maximum leaf depth.
    pub max_depth: usize,
    /// Number of leaves.
    pub leaf_count: usize,
}
