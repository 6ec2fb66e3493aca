//! Reduction rules that commit forced choices without losing optimality.
//!
//! Each call applies at most one reduction and reports whether the state
//! changed; the engine loops until a fixpoint. Rules work on the residual
//! graph (the subgraph induced by the open vertices) and never touch the
//! [`Graph`] itself.

use crate::graph::Graph;

use super::state::CoverState;

/// Apply the first reduction rule that fires, in order:
///
/// 1. A vertex isolated in the residual graph covers nothing: exclude it.
/// 2. A vertex with exactly one open neighbour: include the neighbour,
///    which dominates it by also covering its own other edges.
/// 3. A vertex whose residual degree exceeds `upper_bound`: include it,
///    since leaving it out forces all of its neighbours in, blowing
///    past the best known cover.
///
/// Returns `true` if the state changed.
pub fn reduce_once(graph: &Graph, state: &mut CoverState, upper_bound: usize) -> bool {
    for v in 0..graph.num_vertices() {
        if state.is_possible(v) && state.possible_degree(graph, v) == 0 {
            state.exclude(v);
            return true;
        }
    }

    for v in 0..graph.num_vertices() {
        if !state.is_possible(v) {
            continue;
        }
        let mut open = graph.neighbors(v).iter().copied().filter(|&u| state.is_possible(u));
        if let (Some(u), None) = (open.next(), open.next()) {
            state.include(u);
            return true;
        }
    }

    for v in 0..graph.num_vertices() {
        if state.is_possible(v) && state.possible_degree(graph, v) > upper_bound {
            state.include(v);
            return true;
        }
    }

    false
}

/// Run [`reduce_once`] until no rule fires.
pub fn reduce_to_fixpoint(graph: &Graph, state: &mut CoverState, upper_bound: usize) {
    while reduce_once(graph, state, upper_bound) {}
}
