//! Benchmark dataset types: manifests pairing instances with their
//! reference solutions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Dataset manifest: `{"instances": [{"input": ..., "output": ...}, ...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub instances: Vec<InstanceEntry>,
}

/// One instance: paths to the graph file and its reference solution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceEntry {
    pub input: String,
    pub output: String,
}

/// Reference cover stored next to each instance:
/// `{"solution_type": ..., "vertex_cover": [...], "size": N}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceSolution {
    pub solution_type: String,
    pub vertex_cover: Vec<usize>,
    pub size: usize,
}

/// Load a dataset manifest from JSON.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<Manifest> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a reference solution from JSON.
pub fn load_reference(path: impl AsRef<Path>) -> Result<ReferenceSolution> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
