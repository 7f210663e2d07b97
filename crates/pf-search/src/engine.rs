//! The common search contract and algorithm selection.

use std::fmt;
use std::str::FromStr;

use pf_core::{PfError, Real, Timer};
use pf_graph::Graph;

use crate::astar::AStar;
use crate::bfs::Bfs;
use crate::dfs::Dfs;
use crate::dijkstra::Dijkstra;
use crate::error::SearchResult;
use crate::heuristic::Heuristic;
use crate::result::PathResult;

/// A single-pair path search over a read-only graph.
///
/// Implementations allocate all working state per call, so one graph can be
/// searched any number of times (or from several threads) by shared
/// reference.
pub trait PathSearch {
    /// Label stamped into every [`PathResult`] this engine produces.
    fn label(&self) -> String;

    /// Search for a path from `source` to `dest`.
    ///
    /// Unknown IDs and unreachable destinations yield `Ok` with an empty
    /// path. An edge into a missing node yields
    /// [`SearchError::MissingNode`](crate::SearchError::MissingNode).
    fn search(&self, graph: &Graph, source: &str, dest: &str) -> SearchResult<PathResult>;
}

/// Any of the supported engines, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Dijkstra,
    AStar(Heuristic),
    Bfs,
    Dfs,
}

impl Algorithm {
    /// The five configurations run by [`crate::compare`], in report order.
    pub const COMPARISON_SET: [Algorithm; 5] = [
        Algorithm::Dijkstra,
        Algorithm::AStar(Heuristic::Euclidean),
        Algorithm::AStar(Heuristic::Manhattan),
        Algorithm::Bfs,
        Algorithm::Dfs,
    ];

    /// Whether the engine guarantees a minimum-weight path.
    pub fn is_weight_optimal(self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::AStar(_))
    }

    /// Run this engine.
    pub fn run(self, graph: &Graph, source: &str, dest: &str) -> SearchResult<PathResult> {
        self.search(graph, source, dest)
    }
}

impl PathSearch for Algorithm {
    fn label(&self) -> String {
        match *self {
            Algorithm::Dijkstra => Dijkstra.label(),
            Algorithm::AStar(heuristic) => AStar { heuristic }.label(),
            Algorithm::Bfs => Bfs.label(),
            Algorithm::Dfs => Dfs.label(),
        }
    }

    fn search(&self, graph: &Graph, source: &str, dest: &str) -> SearchResult<PathResult> {
        match *self {
            Algorithm::Dijkstra => Dijkstra.search(graph, source, dest),
            Algorithm::AStar(heuristic) => AStar { heuristic }.search(graph, source, dest),
            Algorithm::Bfs => Bfs.search(graph, source, dest),
            Algorithm::Dfs => Dfs.search(graph, source, dest),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Algorithm {
    type Err = PfError;

    /// Accepts `dijkstra`, `astar` (or `a*`, Euclidean), `bfs`, `dfs`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar(Heuristic::default())),
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            _ => Err(PfError::InvalidArg {
                what: format!("unknown algorithm '{s}'"),
            }),
        }
    }
}

/// Stop the timer, log the outcome and assemble the result.
///
/// `explored` lists finalized nodes in order. A search that produced an
/// empty path always reports [`NO_PATH`](crate::NO_PATH).
pub(crate) fn finish(
    label: String,
    timer: Timer,
    path: Vec<String>,
    distance: Real,
    explored: Vec<String>,
) -> PathResult {
    let execution_time = timer.stop();
    tracing::debug!(
        algorithm = %label,
        nodes_visited = explored.len(),
        distance,
        hops = path.len().saturating_sub(1),
        "search finished"
    );
    if path.is_empty() {
        return PathResult::no_path(label, explored, execution_time);
    }
    PathResult {
        path,
        distance,
        nodes_visited: explored.len(),
        visited: explored,
        execution_time,
        algorithm: label,
    }
}
