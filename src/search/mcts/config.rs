//! Engine configuration.

use super::policy::TreePolicy;

/// Knobs for [`super::MctsSearch`].
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Exploration constant fed into the tree policy's confidence term.
    pub exploration_constant: f64,
    /// Strategy used to descend through fully expanded nodes.
    pub tree_policy: TreePolicy,
    /// Seed for the engine RNG; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self { exploration_constant: 0.0, tree_policy: TreePolicy::EpsilonGreedy, seed: None }
    }
}
