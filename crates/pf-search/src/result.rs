//! The uniform outcome of one search.

use std::time::Duration;

use pf_core::Real;
use pf_graph::Graph;

/// Distance reported when no path was found.
pub const NO_PATH: Real = -1.0;

/// Outcome of a single search invocation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// Node IDs from source to destination; empty when no path was found.
    pub path: Vec<String>,
    /// Sum of edge weights along `path`, or [`NO_PATH`].
    pub distance: Real,
    /// Nodes finalized by the search (each counted once).
    pub nodes_visited: usize,
    /// The same nodes in the order they were finalized.
    pub visited: Vec<String>,
    /// Wall-clock time of the search body.
    pub execution_time: Duration,
    /// Human-readable algorithm label, e.g. `A* (manhattan)`.
    pub algorithm: String,
}

/// One stop along a found path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStep {
    pub node: String,
    /// Weight of the edge on to the next stop; 0 at the destination.
    pub leg: Real,
    /// Distance travelled before arriving here.
    pub cumulative: Real,
}

impl PathResult {
    /// A result carrying no path.
    pub fn no_path(
        algorithm: impl Into<String>,
        visited: Vec<String>,
        execution_time: Duration,
    ) -> Self {
        Self {
            path: Vec::new(),
            distance: NO_PATH,
            nodes_visited: visited.len(),
            visited,
            execution_time,
            algorithm: algorithm.into(),
        }
    }

    /// Whether a path was found. An empty path is the authoritative signal.
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges along the path, if any.
    pub fn hop_count(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    /// Same path and distance, ignoring timing and visit counts.
    pub fn same_route(&self, other: &PathResult) -> bool {
        self.path == other.path && self.distance == other.distance
    }

    /// Per-leg breakdown of the path.
    ///
    /// Each leg uses the first stored edge between consecutive stops. A leg
    /// with no such edge counts as 0.
    pub fn steps(&self, graph: &Graph) -> Vec<PathStep> {
        let mut cumulative = 0.0;
        self.path
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let leg = self
                    .path
                    .get(i + 1)
                    .and_then(|next| graph.neighbors(id).iter().find(|e| &e.to == next))
                    .map_or(0.0, |e| e.weight);
                let step = PathStep {
                    node: id.clone(),
                    leg,
                    cumulative,
                };
                cumulative += leg;
                step
            })
            .collect()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_to_json() {
        let r = PathResult {
            path: vec!["a".into(), "b".into()],
            distance: 2.5,
            nodes_visited: 2,
            visited: vec!["a".into(), "b".into()],
            execution_time: Duration::from_micros(40),
            algorithm: "BFS".into(),
        };
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["path"], serde_json::json!(["a", "b"]));
        assert_eq!(json["visited"], serde_json::json!(["a", "b"]));
        assert_eq!(json["distance"], 2.5);
        assert_eq!(json["algorithm"], "BFS");

        let back: PathResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }
}
