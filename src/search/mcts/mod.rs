//! Monte Carlo Tree Search specialized for minimum vertex cover.
//!
//! # Overview
//!
//! The tree branches binarily on a *pivot edge*: at every node one of
//! the edge's endpoints is committed into the cover, so an internal
//! node has at most two children. Each rollout walks the four classic
//! phases (selection, expansion, simulation, backpropagation) with two
//! problem-specific twists:
//!
//! - **Kernelization**: after every commit, sound reduction rules run
//!   to a fixpoint on the node's residual graph, committing forced
//!   choices for free.
//! - **Terminal propagation**: nodes whose residual graph has no edge
//!   left are closed, and closure propagates upward so selection never
//!   wastes rollouts on finished subtrees.
//!
//! The engine keeps a single global upper bound (`answer`, the best
//! cover size seen by any rollout) that both reports progress and
//! feeds the high-degree reduction rule.
//!
//! # Example
//!
//! ```
//! use cubrir::graph::Graph;
//! use cubrir::search::{MctsConfig, MctsSearch};
//!
//! let graph = Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).expect("valid edges");
//! let mut search = MctsSearch::new(&graph, MctsConfig { seed: Some(1), ..Default::default() });
//! search.run();
//! assert_eq!(search.answer(), 2);
//! ```

mod config;
mod kernel;
mod node;
mod policy;
mod rollout;
mod search;
mod state;
mod tree;

pub use config::MctsConfig;
pub use node::{Node, NodeId, NodeStats};
pub use policy::TreePolicy;
pub use rollout::greedy_completion;
pub use search::MctsSearch;
pub use state::CoverState;
pub use tree::SearchTree;
