//! Graph instance loading and saving.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::Result;

/// On-disk instance schema: `{"num_vertices": N, "edges": [[u, v], ...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphFile {
    pub num_vertices: usize,
    pub edges: Vec<(usize, usize)>,
}

impl GraphFile {
    /// Validate the stored edge list into a [`Graph`].
    pub fn to_graph(&self) -> Result<Graph> {
        Ok(Graph::from_edges(self.num_vertices, &self.edges)?)
    }
}

/// Load a graph instance from a JSON file.
///
/// # Example
///
/// ```no_run
/// use cubrir::io::load_graph;
///
/// let graph = load_graph("data/mvc/inputs/graph_0000.json").expect("readable instance");
/// println!("{} vertices, {} edges", graph.num_vertices(), graph.num_edges());
/// ```
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph> {
    let content = fs::read_to_string(path)?;
    let file: GraphFile = serde_json::from_str(&content)?;
    file.to_graph()
}

/// Write a graph instance as JSON.
pub fn save_graph(path: impl AsRef<Path>, file: &GraphFile) -> Result<()> {
    fs::write(path, serde_json::to_string(file)?)?;
    Ok(())
}
