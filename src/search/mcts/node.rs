//! Tree nodes and their rollout statistics.

use super::state::CoverState;

/// Index of a node in the search tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[must_use]
    pub(crate) const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Position in the arena.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// Statistics accumulated by backpropagation.
#[derive(Debug, Clone, Default)]
pub struct NodeStats {
    /// Rollouts whose backpropagation touched this node.
    pub visits: usize,
    /// Running mean of observed rewards.
    pub value: f64,
    /// Maximum reward ever backpropagated through this node.
    pub max_value: f64,
}

impl NodeStats {
    /// Fold one rollout reward into the running mean and maximum.
    pub fn add_experience(&mut self, reward: f64) {
        self.visits += 1;
        self.value += (reward - self.value) / self.visits as f64;
        self.max_value = self.max_value.max(reward);
    }
}

/// A node in the search tree.
///
/// `expandable` counts how many direct children can still be produced
/// or still contain an expandable descendant; zero marks the whole
/// subtree as closed.
#[derive(Debug, Clone)]
pub struct Node {
    /// Partial assignment at this node.
    pub state: CoverState,
    /// Back-link into the arena; `None` for the root.
    pub parent: Option<NodeId>,
    /// At most two children, one per pivot-edge endpoint.
    pub children: Vec<NodeId>,
    /// Rollout statistics.
    pub stats: NodeStats,
    /// Remaining expansion capacity of this subtree, in `0..=2`.
    pub expandable: u8,
}

impl Node {
    /// Node with no children and full expansion capacity.
    #[must_use]
    pub fn new(state: CoverState) -> Self {
        Self {
            state,
            parent: None,
            children: Vec::new(),
            stats: NodeStats::default(),
            expandable: 2,
        }
    }

    /// True once both branches of the pivot edge have been expanded.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.children.len() == 2
    }

    /// True when no expansion remains anywhere below this node.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.expandable == 0
    }
}
