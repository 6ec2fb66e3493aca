//! Child-selection strategies over a fully expanded node.
//!
//! Both strategies score children with the same upper-confidence term
//! and differ only in how they turn scores into a pick: UCT samples
//! proportionally to the clipped scores, ε-greedy takes the argmax with
//! an occasional uniform draw. After kernelization the gap between the
//! two branches is often large, which makes ε-greedy the better default
//! at branching factor 2.

use rand::rngs::StdRng;
use rand::Rng;

use super::node::NodeId;
use super::tree::SearchTree;

/// Visit-count smoothing so unvisited children keep a finite score.
const VISIT_EPSILON: f64 = 1e-6;

/// Probability of a uniform pick under the ε-greedy strategy.
const EXPLORE_PROBABILITY: f64 = 0.1;

/// Strategy used to descend through fully expanded nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreePolicy {
    /// Weighted stochastic draw over clipped confidence scores.
    Uct,
    /// Argmax over confidence scores, with a fixed chance of a uniform
    /// pick.
    #[default]
    EpsilonGreedy,
}

impl TreePolicy {
    /// Pick one of `parent`'s children. The parent must have been
    /// visited at least once and must have at least one child.
    pub(crate) fn pick(
        self,
        tree: &SearchTree,
        parent: NodeId,
        exploration: f64,
        rng: &mut StdRng,
    ) -> NodeId {
        match self {
            TreePolicy::Uct => uct_sampling(tree, parent, exploration, rng),
            TreePolicy::EpsilonGreedy => epsilon_greedy(tree, parent, exploration, rng),
        }
    }
}

fn confidence(tree: &SearchTree, parent_visits: usize, child: NodeId, exploration: f64) -> f64 {
    let stats = &tree.node(child).stats;
    stats.value
        + 2.0
            * exploration
            * (2.0 * (parent_visits as f64).ln() / (VISIT_EPSILON + stats.visits as f64)).sqrt()
}

fn uct_sampling(tree: &SearchTree, parent: NodeId, exploration: f64, rng: &mut StdRng) -> NodeId {
    let node = tree.node(parent);
    assert!(!node.children.is_empty(), "tree policy over an empty child set");
    assert!(node.stats.visits > 0, "tree policy before any rollout");

    let mut cumulative = Vec::with_capacity(node.children.len());
    let mut total = 0.0;
    for &child in &node.children {
        total += confidence(tree, node.stats.visits, child, exploration).max(0.0);
        cumulative.push(total);
    }

    if total > 0.0 {
        let draw = rng.random::<f64>() * total;
        for (i, &bound) in cumulative.iter().enumerate() {
            if draw <= bound {
                return node.children[i];
            }
        }
    }
    // All weights clipped to zero (or the draw slipped past the final
    // bound): fall back to the last child.
    node.children[node.children.len() - 1]
}

fn epsilon_greedy(tree: &SearchTree, parent: NodeId, exploration: f64, rng: &mut StdRng) -> NodeId {
    let node = tree.node(parent);
    assert!(!node.children.is_empty(), "tree policy over an empty child set");
    assert!(node.stats.visits > 0, "tree policy before any rollout");

    if rng.random::<f64>() < EXPLORE_PROBABILITY {
        return node.children[rng.random_range(0..node.children.len())];
    }

    let mut best = node.children[0];
    let mut best_score = confidence(tree, node.stats.visits, best, exploration);
    for &child in &node.children[1..] {
        let score = confidence(tree, node.stats.visits, child, exploration);
        if score > best_score {
            best = child;
            best_score = score;
        }
    }
    best
}
