use pf_core::{Real, Timer};
use pf_graph::Graph;

use crate::engine::{PathSearch, finish};
use crate::error::SearchResult;
use crate::frontier::{Frontier, reconstruct_path, resolve_endpoints, target_index};
use crate::result::PathResult;

const LABEL: &str = "Dijkstra";

/// Dijkstra's lowest-weight search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dijkstra;

impl PathSearch for Dijkstra {
    fn label(&self) -> String {
        LABEL.to_string()
    }

    fn search(&self, graph: &Graph, source: &str, dest: &str) -> SearchResult<PathResult> {
        dijkstra(graph, source, dest)
    }
}

/// Compute the lowest-weight path from `source` to `dest`.
///
/// The search stops as soon as `dest` is popped from the frontier, so
/// `nodes_visited` only counts work done before the optimum was confirmed.
pub fn dijkstra(graph: &Graph, source: &str, dest: &str) -> SearchResult<PathResult> {
    let timer = Timer::start(LABEL);
    let Some((si, di)) = resolve_endpoints(graph, source, dest) else {
        return Ok(finish(LABEL.into(), timer, Vec::new(), 0.0, Vec::new()));
    };

    let nodes = graph.nodes();
    let n = nodes.len();
    let mut dist = vec![Real::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut open = Frontier::new();
    let mut explored: Vec<String> = Vec::new();

    dist[si] = 0.0;
    open.push(si, 0.0);

    while let Some(ci) = open.pop() {
        // Skip stale entries.
        if visited[ci] {
            continue;
        }
        visited[ci] = true;
        explored.push(nodes[ci].id.clone());

        if ci == di {
            break;
        }

        let current_dist = dist[ci];
        for edge in graph.neighbors(&nodes[ci].id) {
            let ni = target_index(graph, edge)?;
            let tentative = current_dist + edge.weight;
            if tentative < dist[ni] {
                dist[ni] = tentative;
                prev[ni] = Some(ci);
                open.push(ni, tentative);
            }
        }
    }

    let path = reconstruct_path(graph, &prev, si, di);
    Ok(finish(LABEL.into(), timer, path, dist[di], explored))
}
