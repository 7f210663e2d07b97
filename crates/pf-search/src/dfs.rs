use pf_core::{Real, Timer};
use pf_graph::Graph;

use crate::engine::{PathSearch, finish};
use crate::error::SearchResult;
use crate::frontier::{reconstruct_path, resolve_endpoints, target_index};
use crate::result::{NO_PATH, PathResult};

const LABEL: &str = "DFS";

/// Depth-first search: returns the first path found, not the shortest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dfs;

impl PathSearch for Dfs {
    fn label(&self) -> String {
        LABEL.to_string()
    }

    fn search(&self, graph: &Graph, source: &str, dest: &str) -> SearchResult<PathResult> {
        dfs(graph, source, dest)
    }
}

/// One level of the descent: the node being expanded and the next
/// adjacency-list position to try.
struct Frame {
    node: usize,
    cursor: usize,
}

/// Find a path from `source` to `dest` depth-first.
///
/// Nodes are marked visited on entry and neighbours are tried in
/// adjacency-list order; the search returns as soon as `dest` is entered.
/// The descent uses an explicit stack, so depth is bounded by heap memory
/// rather than the call stack.
pub fn dfs(graph: &Graph, source: &str, dest: &str) -> SearchResult<PathResult> {
    let timer = Timer::start(LABEL);
    let Some((si, di)) = resolve_endpoints(graph, source, dest) else {
        return Ok(finish(LABEL.into(), timer, Vec::new(), NO_PATH, Vec::new()));
    };

    let nodes = graph.nodes();
    let n = nodes.len();
    let mut dist: Vec<Real> = vec![0.0; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut stack: Vec<Frame> = Vec::new();

    visited[si] = true;
    let mut explored = vec![nodes[si].id.clone()];
    let mut found = si == di;
    if !found {
        stack.push(Frame {
            node: si,
            cursor: 0,
        });
    }

    while let Some(frame) = stack.last_mut() {
        let ci = frame.node;
        let Some(edge) = graph.neighbors(&nodes[ci].id).get(frame.cursor) else {
            // Branch exhausted: backtrack.
            stack.pop();
            continue;
        };
        frame.cursor += 1;

        let ni = target_index(graph, edge)?;
        if visited[ni] {
            continue;
        }
        prev[ni] = Some(ci);
        dist[ni] = dist[ci] + edge.weight;

        visited[ni] = true;
        explored.push(nodes[ni].id.clone());
        if ni == di {
            found = true;
            break;
        }
        stack.push(Frame {
            node: ni,
            cursor: 0,
        });
    }

    let path = if found {
        reconstruct_path(graph, &prev, si, di)
    } else {
        Vec::new()
    };
    Ok(finish(LABEL.into(), timer, path, dist[di], explored))
}
