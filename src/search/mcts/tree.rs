//! Arena-backed search tree.
//!
//! Nodes live in a flat `Vec` and refer to each other by [`NodeId`];
//! parent links are navigational back-indices and never own. The tree
//! grows only; nodes are dropped together with the engine.

use super::node::{Node, NodeId};
use super::state::CoverState;

/// The search tree: arena of nodes plus the root index.
#[derive(Debug)]
pub struct SearchTree {
    nodes: Vec<Node>,
    root_id: NodeId,
}

impl SearchTree {
    /// Tree containing only a root with the given state.
    #[must_use]
    pub fn new(root_state: CoverState) -> Self {
        Self { nodes: vec![Node::new(root_state)], root_id: NodeId::new(0) }
    }

    /// Id of the root node.
    #[must_use]
    pub fn root_id(&self) -> NodeId {
        self.root_id
    }

    /// Borrow a node. `id` must come from this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Mutably borrow a node. `id` must come from this tree.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Append a child under `parent_id`, wiring both links.
    pub fn add_child(&mut self, parent_id: NodeId, state: CoverState) -> NodeId {
        let child_id = NodeId::new(self.nodes.len());
        let mut child = Node::new(state);
        child.parent = Some(parent_id);
        self.nodes.push(child);
        self.nodes[parent_id.0].children.push(child_id);
        child_id
    }

    /// Total number of nodes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate every node id in the arena.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::new)
    }
}
