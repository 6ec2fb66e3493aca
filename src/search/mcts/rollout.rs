//! Greedy rollout completing a partial assignment into a full cover.

use crate::graph::Graph;

use super::state::CoverState;

/// Complete `from` into a vertex cover by repeatedly selecting the
/// vertex incident to the most uncovered edges (ties broken by lowest
/// index) until no edge is uncovered.
///
/// Only the `selected` set of `from` is consulted; open and excluded
/// vertices are both candidates for the greedy completion.
#[must_use]
pub fn greedy_completion(graph: &Graph, from: &CoverState) -> CoverState {
    let n = graph.num_vertices();
    let mut selected: Vec<bool> = (0..n).map(|v| from.is_selected(v)).collect();

    loop {
        let mut degrees = vec![0usize; n];
        let mut uncovered = false;
        for (u, v) in graph.edges() {
            if !selected[u] && !selected[v] {
                uncovered = true;
                degrees[u] += 1;
                degrees[v] += 1;
            }
        }
        if !uncovered {
            break;
        }

        let mut pick = None;
        let mut best = 0;
        for (v, &is_in) in selected.iter().enumerate() {
            if !is_in && (pick.is_none() || degrees[v] > best) {
                pick = Some(v);
                best = degrees[v];
            }
        }
        match pick {
            Some(v) => selected[v] = true,
            // Every vertex already selected; nothing left to add.
            None => break,
        }
    }

    CoverState::from_selected(selected)
}
