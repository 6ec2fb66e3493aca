//! Crate-wide error type for the I/O and CLI layers.
//!
//! The search core itself is infallible once a valid [`crate::graph::Graph`]
//! exists; misuse of the engine is a caller bug and panics rather than
//! surfacing here.

use thiserror::Error;

use crate::graph::GraphError;

/// Errors surfaced by loading, datasets, and the CLI.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("{0}")]
    InvalidInput(String),
}

/// Result type for crate operations.
pub type Result<T> = std::result::Result<T, Error>;
