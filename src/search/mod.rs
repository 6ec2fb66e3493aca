//! Search engines for the vertex cover problem.

pub mod mcts;

pub use mcts::{CoverState, MctsConfig, MctsSearch, TreePolicy};
