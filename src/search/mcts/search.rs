//! The anytime search engine.
//!
//! One [`MctsSearch::run`] call is one rollout through the four phases:
//! select a frontier node, expand one branch of its pivot edge,
//! complete the child greedily, and backpropagate the reward. The
//! engine also owns `answer`, the smallest cover size ever observed; it
//! feeds the high-degree reduction rule, so pruning strengthens as the
//! search improves.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::graph::Graph;

use super::config::MctsConfig;
use super::kernel;
use super::node::NodeId;
use super::rollout;
use super::state::CoverState;
use super::tree::SearchTree;

/// Monte Carlo tree search over binary pivot-edge branching.
///
/// The engine borrows the graph for its whole lifetime and exclusively
/// owns the tree.
pub struct MctsSearch<'g> {
    graph: &'g Graph,
    tree: SearchTree,
    config: MctsConfig,
    answer: usize,
    rng: StdRng,
}

impl<'g> MctsSearch<'g> {
    /// Build an engine over `graph`, kernelize the root to a fixpoint,
    /// and pick its pivot edge. A root with no residual edge is closed
    /// immediately and `answer` is settled at construction.
    #[must_use]
    pub fn new(graph: &'g Graph, config: MctsConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut search = Self {
            graph,
            tree: SearchTree::new(CoverState::new(graph.num_vertices())),
            config,
            answer: graph.num_vertices(),
            rng,
        };

        let root_id = search.tree.root_id();
        kernel::reduce_to_fixpoint(
            search.graph,
            &mut search.tree.node_mut(root_id).state,
            search.answer,
        );
        let root = search.tree.node_mut(root_id);
        if !root.state.select_action_edge(search.graph) {
            search.answer = root.state.cover_size();
            root.expandable = 0;
        }
        search
    }

    /// Smallest cover size observed so far. Monotonically non-increasing;
    /// starts at `n`.
    #[must_use]
    pub fn answer(&self) -> usize {
        self.answer
    }

    /// Replace the exploration constant for subsequent rollouts.
    pub fn set_exploration_param(&mut self, exploration: f64) {
        self.config.exploration_constant = exploration;
    }

    /// True once no further expansion is possible anywhere in the tree.
    /// Subsequent [`run`](Self::run) calls are no-ops.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.tree.node(self.tree.root_id()).is_closed()
    }

    /// Read-only view of the search tree.
    #[must_use]
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// One rollout: select, expand, simulate, backpropagate. Skipped
    /// when the root subtree is closed.
    pub fn run(&mut self) {
        if self.is_exhausted() {
            return;
        }
        let leaf = self.select(self.tree.root_id());
        let child = self.expand(leaf);
        let reward = self.simulate(child).evaluate();
        self.backpropagate(child, reward);
    }

    /// Best cover found: walk down by maximum observed reward (ties by
    /// visit count) and complete the final node greedily. The maximum
    /// tracks best-seen rather than average quality, which is what a
    /// minimization target cares about.
    pub fn solution(&mut self) -> CoverState {
        let mut id = self.tree.root_id();
        loop {
            let node = self.tree.node(id);
            if node.children.is_empty() {
                break;
            }
            let mut best = node.children[0];
            for &child in &node.children[1..] {
                let challenger = &self.tree.node(child).stats;
                let incumbent = &self.tree.node(best).stats;
                if challenger.max_value > incumbent.max_value
                    || (challenger.max_value == incumbent.max_value
                        && challenger.visits > incumbent.visits)
                {
                    best = child;
                }
            }
            id = best;
        }
        self.simulate(id)
    }

    /// Descend to a node that can still grow: stop at any node missing a
    /// child; when only one subtree stays open, narrow into it; otherwise
    /// let the tree policy choose.
    fn select(&mut self, from: NodeId) -> NodeId {
        let mut current = from;
        loop {
            let node = self.tree.node(current);
            if !node.is_full() {
                return current;
            }
            assert!(node.expandable > 0, "select descended into a closed subtree");
            if node.expandable == 1 {
                current = if self.tree.node(node.children[0]).expandable > 0 {
                    node.children[0]
                } else {
                    node.children[1]
                };
                continue;
            }
            current = self.config.tree_policy.pick(
                &self.tree,
                current,
                self.config.exploration_constant,
                &mut self.rng,
            );
        }
    }

    /// Grow one child of `id`: include the pivot endpoint, kernelize the
    /// child to a fixpoint, pick its own pivot edge (or close it), and
    /// flip the parent's pivot so the next expansion takes the other
    /// branch.
    fn expand(&mut self, id: NodeId) -> NodeId {
        let parent = self.tree.node(id);
        assert!(parent.expandable > 0, "expand on a closed node");
        assert!(!parent.is_full(), "expand on a fully expanded node");
        let (endpoint, _) =
            parent.state.action_edge().expect("expand on a node without a pivot edge");

        let mut state = parent.state.clone();
        state.include(endpoint);
        kernel::reduce_to_fixpoint(self.graph, &mut state, self.answer);
        let terminal = !state.select_action_edge(self.graph);

        let child = self.tree.add_child(id, state);
        if terminal {
            self.tree.node_mut(child).expandable = 0;
            self.expandable_update(child);
        }
        self.tree.node_mut(id).state.swap_action_edge();
        child
    }

    /// Complete the node's assignment with the greedy rollout and fold
    /// the observed cover size into `answer`.
    fn simulate(&mut self, id: NodeId) -> CoverState {
        let cover = rollout::greedy_completion(self.graph, &self.tree.node(id).state);
        self.answer = self.answer.min(cover.cover_size());
        cover
    }

    /// Credit `reward` to every node on the path from `from` to the root.
    fn backpropagate(&mut self, from: NodeId, reward: f64) {
        let mut current = Some(from);
        while let Some(id) = current {
            let node = self.tree.node_mut(id);
            node.stats.add_experience(reward);
            current = node.parent;
        }
    }

    /// Propagate a closed subtree upward: each ancestor loses one unit
    /// of expansion capacity as long as the closure chain continues.
    fn expandable_update(&mut self, from: NodeId) {
        let mut id = from;
        while self.tree.node(id).is_closed() {
            let Some(parent) = self.tree.node(id).parent else {
                return;
            };
            let node = self.tree.node_mut(parent);
            assert!(node.expandable > 0, "closed ancestor above an expandable subtree");
            node.expandable -= 1;
            id = parent;
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::search::TreePolicy;

    fn seeded(exploration: f64) -> MctsConfig {
        MctsConfig { exploration_constant: exploration, seed: Some(42), ..Default::default() }
    }

    /// Check the structural invariants over the whole arena.
    fn audit(search: &MctsSearch<'_>, graph: &Graph) {
        let tree = search.tree();
        for id in tree.ids() {
            let node = tree.node(id);
            let state = &node.state;

            for v in 0..graph.num_vertices() {
                let memberships = [
                    state.selected().contains(&v),
                    state.excluded().contains(&v),
                    state.possible().contains(&v),
                ];
                assert_eq!(memberships.iter().filter(|&&m| m).count(), 1, "vertex {v} partition");
                assert_eq!(state.is_selected(v), state.selected().contains(&v));
            }

            assert!(node.children.len() <= 2);
            assert!(node.expandable <= 2);

            let child_visits: usize =
                node.children.iter().map(|&c| tree.node(c).stats.visits).sum();
            assert!(node.stats.visits >= child_visits);
            if node.stats.visits > 0 {
                assert!(node.stats.value >= 0.0 && node.stats.value <= 1.0 + 1e-9);
            }

            if node.is_closed() {
                for &child in &node.children {
                    assert!(tree.node(child).is_closed(), "open child under a closed node");
                }
            }
            if node.expandable == 1 && node.is_full() {
                let open =
                    node.children.iter().filter(|&&c| tree.node(c).expandable > 0).count();
                assert_eq!(open, 1);
            }
        }
    }

    #[test]
    fn test_triangle_one_rollout() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).expect("valid edges");
        let mut search = MctsSearch::new(&graph, seeded(0.0));
        assert!(!search.is_exhausted());

        search.run();
        assert_eq!(search.answer(), 2);
        audit(&search, &graph);
    }

    #[test]
    fn test_star_is_solved_at_construction() {
        let graph = Graph::from_edges(4, &[(0, 1), (0, 2), (0, 3)]).expect("valid edges");
        let search = MctsSearch::new(&graph, seeded(0.0));

        assert!(search.is_exhausted());
        assert_eq!(search.answer(), 1);
    }

    #[test]
    fn test_path_is_solved_at_construction() {
        let graph =
            Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).expect("valid edges");
        let search = MctsSearch::new(&graph, seeded(0.0));

        assert!(search.is_exhausted());
        assert_eq!(search.answer(), 2);
    }

    #[test]
    fn test_two_triangles_reach_optimum() {
        let graph = Graph::from_edges(6, &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)])
            .expect("valid edges");
        let mut search = MctsSearch::new(&graph, seeded(0.0));

        search.run();
        assert!(search.answer() <= 4);
        audit(&search, &graph);
    }

    #[test]
    fn test_four_cycle_finds_opposite_pair() {
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).expect("valid edges");
        let mut search = MctsSearch::new(&graph, seeded(0.0));

        for _ in 0..32 {
            search.run();
        }
        assert_eq!(search.answer(), 2);

        let cover = search.solution();
        assert!(cover.is_cover(&graph));
        let pair: Vec<bool> = (0..4).map(|v| cover.is_selected(v)).collect();
        assert!(pair == vec![true, false, true, false] || pair == vec![false, true, false, true]);
        audit(&search, &graph);
    }

    #[test]
    fn test_empty_edge_graph_answer_zero() {
        let graph = Graph::from_edges(5, &[]).expect("valid edges");
        let search = MctsSearch::new(&graph, seeded(0.0));

        assert!(search.is_exhausted());
        assert_eq!(search.answer(), 0);
    }

    #[test]
    fn test_zero_vertex_graph() {
        let graph = Graph::from_edges(0, &[]).expect("valid edges");
        let mut search = MctsSearch::new(&graph, seeded(0.0));

        assert!(search.is_exhausted());
        assert_eq!(search.answer(), 0);
        let cover = search.solution();
        assert_eq!(cover.cover_size(), 0);
    }

    #[test]
    fn test_single_vertex_graph() {
        let graph = Graph::from_edges(1, &[]).expect("valid edges");
        let search = MctsSearch::new(&graph, seeded(0.0));

        assert!(search.is_exhausted());
        assert_eq!(search.answer(), 0);
    }

    #[test]
    fn test_complete_graph_reaches_n_minus_one() {
        let n = 6;
        let edges: Vec<(usize, usize)> =
            (0..n).flat_map(|u| ((u + 1)..n).map(move |v| (u, v))).collect();
        let graph = Graph::from_edges(n, &edges).expect("valid edges");
        let mut search = MctsSearch::new(&graph, seeded(0.0));

        for _ in 0..16 {
            search.run();
        }
        assert!(search.answer() <= n - 1);
        audit(&search, &graph);
    }

    #[test]
    fn test_run_on_exhausted_engine_is_noop() {
        let graph = Graph::from_edges(4, &[(0, 1), (0, 2), (0, 3)]).expect("valid edges");
        let mut search = MctsSearch::new(&graph, seeded(0.0));
        assert!(search.is_exhausted());

        let answer = search.answer();
        let size = search.tree().size();
        let visits = search.tree().node(search.tree().root_id()).stats.visits;

        search.run();
        search.run();
        assert_eq!(search.answer(), answer);
        assert_eq!(search.tree().size(), size);
        assert_eq!(search.tree().node(search.tree().root_id()).stats.visits, visits);
    }

    #[test]
    fn test_binary_expansion_takes_both_endpoints() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).expect("valid edges");
        let mut search = MctsSearch::new(&graph, seeded(0.0));

        let root_id = search.tree().root_id();
        let (a, b) = search.tree().node(root_id).state.action_edge().expect("pivot edge");

        search.run();
        search.run();
        let root = search.tree().node(root_id);
        assert_eq!(root.children.len(), 2);

        let first = search.tree().node(root.children[0]);
        let second = search.tree().node(root.children[1]);
        assert!(first.state.is_selected(a));
        assert!(second.state.is_selected(b));
        audit(&search, &graph);
    }

    #[test]
    fn test_solution_is_valid_and_at_least_answer() {
        let graph = Graph::from_edges(
            7,
            &[(0, 1), (0, 2), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (4, 6)],
        )
        .expect("valid edges");
        let mut search = MctsSearch::new(&graph, seeded(0.0));

        for _ in 0..20 {
            search.run();
        }
        let answer = search.answer();
        let cover = search.solution();
        assert!(cover.is_cover(&graph));
        assert!(cover.cover_size() >= search.answer());
        assert!(search.answer() <= answer);
    }

    #[test]
    fn test_exhaustive_search_closes_root() {
        // Small enough that every branch terminates quickly.
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).expect("valid edges");
        let mut search = MctsSearch::new(&graph, seeded(0.0));

        for _ in 0..256 {
            search.run();
        }
        assert!(search.is_exhausted());
        assert_eq!(search.answer(), 2);
        audit(&search, &graph);
    }

    #[test]
    fn test_uct_policy_also_converges() {
        // Deep enough that selection has to route through the policy.
        let graph = Graph::from_edges(
            8,
            &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7), (7, 0), (0, 4), (2, 6)],
        )
        .expect("valid edges");
        let config = MctsConfig {
            exploration_constant: 0.5,
            tree_policy: TreePolicy::Uct,
            seed: Some(42),
        };
        let mut search = MctsSearch::new(&graph, config);

        for _ in 0..64 {
            search.run();
        }
        assert!(search.answer() <= 5);
        let cover = search.solution();
        assert!(cover.is_cover(&graph));
        audit(&search, &graph);
    }

    #[test]
    fn test_set_exploration_param() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).expect("valid edges");
        let mut search = MctsSearch::new(&graph, seeded(0.0));
        search.set_exploration_param(1.5);
        for _ in 0..8 {
            search.run();
        }
        assert_eq!(search.answer(), 2);
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let graph = Graph::from_edges(
            8,
            &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7), (7, 0), (0, 4), (2, 6)],
        )
        .expect("valid edges");

        let mut first = MctsSearch::new(&graph, seeded(0.3));
        let mut second = MctsSearch::new(&graph, seeded(0.3));
        for _ in 0..40 {
            first.run();
            second.run();
        }
        assert_eq!(first.answer(), second.answer());
        assert_eq!(first.tree().size(), second.tree().size());
    }

    fn arb_graph() -> impl Strategy<Value = Graph> {
        (2usize..10).prop_flat_map(|n| {
            let pairs: Vec<(usize, usize)> =
                (0..n).flat_map(|u| ((u + 1)..n).map(move |v| (u, v))).collect();
            let len = pairs.len();
            prop::collection::vec(prop::bool::weighted(0.35), len).prop_map(move |mask| {
                let edges: Vec<(usize, usize)> = pairs
                    .iter()
                    .zip(mask)
                    .filter_map(|(&edge, keep)| keep.then_some(edge))
                    .collect();
                Graph::from_edges(n, &edges).expect("generated edges are valid")
            })
        })
    }

    proptest! {
        #[test]
        fn test_answer_monotone_and_invariants_hold(graph in arb_graph(), seed in 0u64..1000) {
            let config = MctsConfig { seed: Some(seed), ..Default::default() };
            let mut search = MctsSearch::new(&graph, config);

            let mut previous = search.answer();
            for _ in 0..12 {
                search.run();
                prop_assert!(search.answer() <= previous);
                previous = search.answer();
            }
            audit(&search, &graph);

            let cover = search.solution();
            prop_assert!(cover.is_cover(&graph));
            prop_assert!(cover.cover_size() >= search.answer());
        }

        #[test]
        fn test_rollout_covers_are_valid(graph in arb_graph(), seed in 0u64..1000) {
            let config = MctsConfig { seed: Some(seed), ..Default::default() };
            let mut search = MctsSearch::new(&graph, config);
            for _ in 0..6 {
                search.run();
            }
            let cover = search.solution();
            prop_assert!(cover.is_cover(&graph));
            prop_assert!(search.answer() <= graph.num_vertices());
        }
    }
}
