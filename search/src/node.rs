//! Thought nodes
//!
//! A [`ThoughtNode`] is one candidate reasoning step: an opaque thought
//! string, its depth in the tree, a score, and links to its parent and
//! children. Nodes live in an arena owned by the tree and refer to each other
//! by [`NodeId`] index, which keeps the parent/child back-references free of
//! ownership cycles.
//!
//! Scores are plain `f64` here. The documented [0.0, 10.0] range is enforced
//! at the evaluator boundary, not the node boundary: a node stores whatever
//! score it is given.

use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

/// Arena index of a node within one [`ThoughtTree`](crate::tree::ThoughtTree).
///
/// Ids are assigned at creation in strictly increasing order and never reused
/// within a tree. The `Display` form (`node_0`, `node_1`, ...) is the stable
/// string identity used in snapshots and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node_{}", self.0)
    }
}

/// One candidate thought in the reasoning tree.
#[derive(Debug, Clone)]
pub struct ThoughtNode {
    /// This node's id within its tree.
    pub id: NodeId,
    /// The thought text (opaque payload).
    pub thought: String,
    /// Depth in the tree; the root is 0.
    pub depth: usize,
    /// Score assigned by the evaluator; 0.0 until scored.
    pub score: f64,
    /// Parent node; `None` only for the root.
    pub parent: Option<NodeId>,
    /// Children in generation order.
    pub children: SmallVec<[NodeId; 4]>,
}

impl ThoughtNode {
    /// Create a node with no children and a default score of 0.0.
    pub(crate) fn new(
        id: NodeId,
        thought: impl Into<String>,
        depth: usize,
        parent: Option<NodeId>,
    ) -> Self {
        Self {
            id,
            thought: thought.into(),
            depth,
            score: 0.0,
            parent,
            children: SmallVec::new(),
        }
    }

    /// Overwrite this node's score.
    ///
    /// No validation: generation and evaluation are separate steps, and range
    /// clamping belongs to the evaluator.
    pub fn set_score(&mut self, score: f64) {
        self.score = score;
    }

    /// True iff this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Plain serializable view of this node (no children recursion).
    #[must_use]
    pub fn snapshot(&self) -> NodeSnapshot {
        NodeSnapshot {
            id: self.id.to_string(),
            thought: self.thought.clone(),
            depth: self.depth,
            score: self.score,
            is_leaf: self.is_leaf(),
            child_count: self.children.len(),
        }
    }
}

/// Serializable view of one node, suitable for logging or snapshotting.
///
/// Not a versioned wire format.
#[derive(Debug, Clone, Serialize)]
pub struct NodeSnapshot {
    /// Stable string id (`node_N`).
    pub id: String,
    /// The thought text.
    pub thought: String,
    /// Depth in the tree.
    pub depth: usize,
    /// Current score.
    pub score: f64,
    /// Whether the node had no children at snapshot time.
    pub is_leaf: bool,
    /// Number of children at snapshot time.
    pub child_count: usize,
}
