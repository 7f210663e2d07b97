use pf_core::{Real, Timer};
use pf_graph::Graph;

use crate::engine::{PathSearch, finish};
use crate::error::SearchResult;
use crate::frontier::{Frontier, reconstruct_path, resolve_endpoints, target_index};
use crate::heuristic::Heuristic;
use crate::result::PathResult;

/// A* search guided by a coordinate [`Heuristic`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AStar {
    pub heuristic: Heuristic,
}

impl AStar {
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }
}

impl PathSearch for AStar {
    fn label(&self) -> String {
        format!("A* ({})", self.heuristic)
    }

    fn search(&self, graph: &Graph, source: &str, dest: &str) -> SearchResult<PathResult> {
        astar(graph, source, dest, self.heuristic)
    }
}

/// Compute the shortest path from `source` to `dest` using A*.
///
/// Neighbours already in the closed set are skipped without relaxation. This
/// is exact as long as edge weights are non-negative and the heuristic never
/// overestimates the remaining cost.
pub fn astar(
    graph: &Graph,
    source: &str,
    dest: &str,
    heuristic: Heuristic,
) -> SearchResult<PathResult> {
    let label = AStar::new(heuristic).label();
    let timer = Timer::start("astar");
    let Some((si, di)) = resolve_endpoints(graph, source, dest) else {
        return Ok(finish(label, timer, Vec::new(), 0.0, Vec::new()));
    };

    let nodes = graph.nodes();
    let n = nodes.len();
    let goal = nodes[di].pos();
    let h = |i: usize| heuristic.estimate(nodes[i].pos(), goal);

    let mut g = vec![Real::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut closed = vec![false; n];
    let mut open = Frontier::new();
    let mut explored: Vec<String> = Vec::new();

    g[si] = 0.0;
    open.push(si, h(si));

    while let Some(ci) = open.pop() {
        if closed[ci] {
            continue;
        }
        closed[ci] = true;
        explored.push(nodes[ci].id.clone());

        if ci == di {
            break;
        }

        let current_g = g[ci];
        for edge in graph.neighbors(&nodes[ci].id) {
            let ni = target_index(graph, edge)?;
            if closed[ni] {
                continue;
            }

            let tentative_g = current_g + edge.weight;
            if tentative_g < g[ni] {
                g[ni] = tentative_g;
                prev[ni] = Some(ci);
                open.push(ni, tentative_g + h(ni));
            }
        }
    }

    let path = reconstruct_path(graph, &prev, si, di);
    Ok(finish(label, timer, path, g[di], explored))
}
