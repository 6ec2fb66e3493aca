//! Undirected graph representation shared by the whole search.
//!
//! A [`Graph`] is immutable after construction. Every edge appears in
//! both endpoints' adjacency lists; self-loops and duplicate edges are
//! rejected at build time so the search never has to re-check them.

use std::collections::HashSet;

use thiserror::Error;

/// Errors raised while building a [`Graph`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} out of range for a graph with {num_vertices} vertices")]
    VertexOutOfRange { vertex: usize, num_vertices: usize },

    #[error("self-loop on vertex {0}")]
    SelfLoop(usize),

    #[error("duplicate edge ({0}, {1})")]
    DuplicateEdge(usize, usize),
}

/// Immutable undirected graph with vertices indexed `0..n`.
#[derive(Debug, Clone)]
pub struct Graph {
    num_vertices: usize,
    adjacency: Vec<Vec<usize>>,
    num_edges: usize,
}

impl Graph {
    /// Build a graph from an edge list, validating every edge.
    ///
    /// # Example
    ///
    /// ```
    /// use cubrir::graph::Graph;
    ///
    /// let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]).expect("valid edges");
    /// assert_eq!(graph.num_vertices(), 3);
    /// assert_eq!(graph.degree(1), 2);
    /// ```
    pub fn from_edges(num_vertices: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut adjacency = vec![Vec::new(); num_vertices];
        let mut seen = HashSet::with_capacity(edges.len());
        for &(u, v) in edges {
            for w in [u, v] {
                if w >= num_vertices {
                    return Err(GraphError::VertexOutOfRange { vertex: w, num_vertices });
                }
            }
            if u == v {
                return Err(GraphError::SelfLoop(u));
            }
            let key = (u.min(v), u.max(v));
            if !seen.insert(key) {
                return Err(GraphError::DuplicateEdge(key.0, key.1));
            }
            adjacency[u].push(v);
            adjacency[v].push(u);
        }
        Ok(Self { num_vertices, adjacency, num_edges: edges.len() })
    }

    /// Number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Neighbours of `v`.
    #[must_use]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    /// Degree of `v` in the full graph.
    #[must_use]
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Iterate every undirected edge once, as `(u, v)` with `u < v`.
    ///
    /// The order is deterministic: ascending in `u`, then by insertion
    /// order of `u`'s adjacency list.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, neighbors)| {
            neighbors.iter().copied().filter_map(move |v| (u < v).then_some((u, v)))
        })
    }
}
