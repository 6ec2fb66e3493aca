//! # cubrir
//!
//! Anytime approximate solver for the Minimum Vertex Cover problem on
//! undirected, unweighted graphs. Monte Carlo tree search over a binary
//! edge-pivot branching tree, with problem reductions (kernelization)
//! applied at every node and greedy heuristic rollouts.
//!
//! The engine never guarantees optimality; it guarantees a valid cover
//! whose size only improves the longer it runs.
//!
//! # Quick start
//!
//! ```
//! use cubrir::graph::Graph;
//! use cubrir::search::{MctsConfig, MctsSearch};
//!
//! // A 4-cycle: the optimal cover is either opposite pair.
//! let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).expect("valid edges");
//!
//! let config = MctsConfig { seed: Some(7), ..Default::default() };
//! let mut search = MctsSearch::new(&graph, config);
//! for _ in 0..64 {
//!     search.run();
//! }
//!
//! let cover = search.solution();
//! assert!(cover.is_cover(&graph));
//! assert_eq!(search.answer(), 2);
//! ```
//!
//! # Architecture
//!
//! ```text
//! graph      immutable adjacency shared by the whole search
//! search     MCTS engine: tree, policies, kernelization, rollouts
//! io         JSON instance files, dataset manifests
//! cli        solve / bench / generate commands
//! ```

pub mod cli;
pub mod error;
pub mod graph;
pub mod io;
pub mod search;

pub use error::{Error, Result};
pub use graph::Graph;
pub use search::{MctsConfig, MctsSearch};
