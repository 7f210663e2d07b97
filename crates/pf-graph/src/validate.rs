//! Graph validation logic.

use pf_core::numeric::ensure_non_negative;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Edge, Graph};

/// Validate every stored edge: both endpoints exist and the weight is usable.
///
/// Edges are checked in source order (stable sort keeps each adjacency
/// list's own order) so the first reported problem is stable across runs.
pub(crate) fn validate_edges(graph: &Graph) -> GraphResult<()> {
    let mut edges: Vec<&Edge> = graph.edges().collect();
    edges.sort_by(|a, b| a.from.cmp(&b.from));

    for edge in edges {
        // Check both endpoints reference known nodes
        for endpoint in [&edge.from, &edge.to] {
            if !graph.contains(endpoint) {
                tracing::warn!(from = %edge.from, to = %edge.to, "dangling edge");
                return Err(GraphError::DanglingEdge {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    missing: endpoint.clone(),
                });
            }
        }

        ensure_non_negative(edge.weight, "edge weight").map_err(|source| {
            GraphError::InvalidWeight {
                from: edge.from.clone(),
                to: edge.to.clone(),
                source,
            }
        })?;
    }

    Ok(())
}
