//! On-disk formats: graph instances, dataset manifests, reference
//! solutions.

mod dataset;
mod load;

pub use dataset::{
    load_manifest, load_reference, InstanceEntry, Manifest, ReferenceSolution,
};
pub use load::{load_graph, save_graph, GraphFile};
