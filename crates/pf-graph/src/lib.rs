//! pf-graph: graph store for pathfinder.
//!
//! Provides:
//! - Labeled planar nodes and weighted directed edges
//! - Adjacency-list graph with optional mirrored (bidirectional) insertion
//! - Aggregate statistics and optional structural validation
//!
//! # Example
//!
//! ```
//! use pf_graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_node("a", "Alpha", 0.0, 0.0);
//! graph.add_node("b", "Beta", 3.0, 4.0);
//! graph.add_bidirectional_edge("a", "b", 5.0);
//!
//! assert_eq!(graph.nodes().len(), 2);
//! assert_eq!(graph.neighbors("b").len(), 1);
//! assert_eq!(graph.stats().edge_count, 1);
//! ```

pub mod error;
pub mod graph;
pub mod stats;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Graph, Node};
pub use stats::GraphStats;
