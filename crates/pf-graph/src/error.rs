//! Graph-specific error types.

use pf_core::PfError;
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Structural problems found in a graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An edge endpoint refers to a node that doesn't exist.
    #[error("Edge {from} -> {to} refers to non-existent node {missing}")]
    DanglingEdge {
        from: String,
        to: String,
        missing: String,
    },

    /// An edge weight is negative or not finite.
    #[error("Edge {from} -> {to} has invalid weight: {source}")]
    InvalidWeight {
        from: String,
        to: String,
        source: PfError,
    },

    /// Node ID not present in the graph.
    #[error("Node {id} not found")]
    NodeNotFound { id: String },
}

impl From<GraphError> for PfError {
    fn from(err: GraphError) -> Self {
        PfError::Invariant {
            what: err.to_string(),
        }
    }
}
