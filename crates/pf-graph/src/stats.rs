//! Aggregate graph statistics.

use pf_core::Real;

use crate::graph::Graph;

/// Summary numbers for a graph.
///
/// `edge_count` counts undirected connections, i.e. directed edge records
/// halved, matching how mirrored insertions are reported to users.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    /// Directed edge records per node (0 for an empty graph).
    pub average_degree: Real,
}

impl GraphStats {
    pub fn from_graph(graph: &Graph) -> Self {
        let node_count = graph.len();
        let records = graph.edge_record_count();
        let average_degree = if node_count > 0 {
            records as Real / node_count as Real
        } else {
            0.0
        };
        Self {
            node_count,
            edge_count: records / 2,
            average_degree,
        }
    }
}
