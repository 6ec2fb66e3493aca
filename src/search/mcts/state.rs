//! Partial cover assignment carried by every tree node.
//!
//! A [`CoverState`] partitions the vertex set into three groups:
//! `selected` (committed into the cover), `excluded` (committed out,
//! because selecting them is provably suboptimal at this node), and
//! `possible` (still open). The boolean mirror `is_selected` exists for
//! O(1) membership checks during rollouts.
//!
//! The pivot edge (`action_edge`) defines the binary action at the
//! owning node: include one endpoint or the other. `None` means no
//! residual edge remains and the node is terminal.

use std::collections::HashSet;

use crate::graph::Graph;

/// Partial vertex-cover assignment at a search tree node.
#[derive(Debug, Clone)]
pub struct CoverState {
    is_selected: Vec<bool>,
    selected: HashSet<usize>,
    excluded: HashSet<usize>,
    possible: HashSet<usize>,
    action_edge: Option<(usize, usize)>,
}

impl CoverState {
    /// Fresh state: every vertex open, nothing committed.
    #[must_use]
    pub fn new(num_vertices: usize) -> Self {
        Self {
            is_selected: vec![false; num_vertices],
            selected: HashSet::new(),
            excluded: HashSet::new(),
            possible: (0..num_vertices).collect(),
            action_edge: None,
        }
    }

    /// State rebuilt from a completed selection flag array, as produced
    /// by a rollout. Unselected vertices are left open.
    #[must_use]
    pub fn from_selected(is_selected: Vec<bool>) -> Self {
        let selected: HashSet<usize> =
            is_selected.iter().enumerate().filter_map(|(v, &s)| s.then_some(v)).collect();
        let possible: HashSet<usize> =
            is_selected.iter().enumerate().filter_map(|(v, &s)| (!s).then_some(v)).collect();
        Self { is_selected, selected, excluded: HashSet::new(), possible, action_edge: None }
    }

    /// Commit `v` into the cover. `v` must still be open.
    pub fn include(&mut self, v: usize) {
        assert!(self.possible.remove(&v), "include of vertex {v} that is not possible");
        self.is_selected[v] = true;
        self.selected.insert(v);
    }

    /// Commit `v` out of the cover. `v` must still be open.
    pub fn exclude(&mut self, v: usize) {
        assert!(self.possible.remove(&v), "exclude of vertex {v} that is not possible");
        self.excluded.insert(v);
    }

    /// True when `v` is committed into the cover.
    #[must_use]
    pub fn is_selected(&self, v: usize) -> bool {
        self.is_selected[v]
    }

    /// True when `v` is still open.
    #[must_use]
    pub fn is_possible(&self, v: usize) -> bool {
        self.possible.contains(&v)
    }

    /// Vertices committed into the cover.
    #[must_use]
    pub fn selected(&self) -> &HashSet<usize> {
        &self.selected
    }

    /// Vertices committed out of the cover.
    #[must_use]
    pub fn excluded(&self) -> &HashSet<usize> {
        &self.excluded
    }

    /// Vertices still open.
    #[must_use]
    pub fn possible(&self) -> &HashSet<usize> {
        &self.possible
    }

    /// Number of vertices committed into the cover.
    #[must_use]
    pub fn cover_size(&self) -> usize {
        self.selected.len()
    }

    /// Total number of vertices this state was built over.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.is_selected.len()
    }

    /// The pivot edge for the next expansion, if any.
    #[must_use]
    pub fn action_edge(&self) -> Option<(usize, usize)> {
        self.action_edge
    }

    /// Flip the pivot edge so the next expansion includes the other
    /// endpoint.
    pub(crate) fn swap_action_edge(&mut self) {
        if let Some((a, b)) = self.action_edge {
            self.action_edge = Some((b, a));
        }
    }

    /// Count `v`'s neighbours that are still open.
    #[must_use]
    pub fn possible_degree(&self, graph: &Graph, v: usize) -> usize {
        graph.neighbors(v).iter().filter(|u| self.possible.contains(u)).count()
    }

    /// Choose the pivot edge among edges with both endpoints open,
    /// maximising the residual-degree gap between the endpoints (ties
    /// broken by first encountered). A lopsided pivot makes the two
    /// branches maximally different.
    ///
    /// Returns `false` and clears the pivot when no residual edge
    /// remains; the state is then terminal.
    pub fn select_action_edge(&mut self, graph: &Graph) -> bool {
        let mut best: Option<((usize, usize), usize)> = None;
        for (u, v) in graph.edges() {
            if !self.possible.contains(&u) || !self.possible.contains(&v) {
                continue;
            }
            let gap = self.possible_degree(graph, u).abs_diff(self.possible_degree(graph, v));
            if best.map_or(true, |(_, best_gap)| gap > best_gap) {
                best = Some(((u, v), gap));
            }
        }
        self.action_edge = best.map(|(edge, _)| edge);
        self.action_edge.is_some()
    }

    /// Reward of a completed cover: `1 / |selected|`. Maximising the
    /// reward minimises the cover.
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        assert!(!self.selected.is_empty(), "evaluate on a state with no selected vertices");
        1.0 / self.selected.len() as f64
    }

    /// True when every edge of `graph` has a selected endpoint.
    #[must_use]
    pub fn is_cover(&self, graph: &Graph) -> bool {
        graph.edges().all(|(u, v)| self.is_selected[u] || self.is_selected[v])
    }
}
