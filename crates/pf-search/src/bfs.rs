use std::collections::VecDeque;

use pf_core::{Real, Timer};
use pf_graph::Graph;

use crate::engine::{PathSearch, finish};
use crate::error::SearchResult;
use crate::frontier::{reconstruct_path, resolve_endpoints, target_index};
use crate::result::PathResult;

const LABEL: &str = "BFS";

/// Breadth-first search: fewest hops, weights ignored for ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bfs;

impl PathSearch for Bfs {
    fn label(&self) -> String {
        LABEL.to_string()
    }

    fn search(&self, graph: &Graph, source: &str, dest: &str) -> SearchResult<PathResult> {
        bfs(graph, source, dest)
    }
}

/// Compute a fewest-hop path from `source` to `dest`.
///
/// Nodes are marked visited when first enqueued. The reported distance is
/// the weight sum of the path found, which need not be the lowest weight.
pub fn bfs(graph: &Graph, source: &str, dest: &str) -> SearchResult<PathResult> {
    let timer = Timer::start(LABEL);
    let Some((si, di)) = resolve_endpoints(graph, source, dest) else {
        return Ok(finish(LABEL.into(), timer, Vec::new(), 0.0, Vec::new()));
    };

    let nodes = graph.nodes();
    let n = nodes.len();
    let mut dist: Vec<Real> = vec![0.0; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut explored: Vec<String> = Vec::new();

    visited[si] = true;
    queue.push_back(si);

    while let Some(ci) = queue.pop_front() {
        explored.push(nodes[ci].id.clone());
        if ci == di {
            break;
        }

        for edge in graph.neighbors(&nodes[ci].id) {
            let ni = target_index(graph, edge)?;
            if visited[ni] {
                continue;
            }
            visited[ni] = true;
            prev[ni] = Some(ci);
            dist[ni] = dist[ci] + edge.weight;
            queue.push_back(ni);
        }
    }

    let path = reconstruct_path(graph, &prev, si, di);
    Ok(finish(LABEL.into(), timer, path, dist[di], explored))
}
