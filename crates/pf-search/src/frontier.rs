//! Shared search scaffolding: priority frontier and path reconstruction.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use pf_core::Real;
use pf_graph::{Edge, Graph};

use crate::error::{SearchError, SearchResult};

/// Heap entry ordered by `priority`, then by push order.
#[derive(Debug, Clone, Copy)]
struct Entry {
    priority: Real,
    seq: u64,
    idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first,
        // and the earliest push among equals.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Min-priority queue of node indices with lazy deletion.
///
/// Stale entries are never removed; callers skip them on pop using their
/// own visited/closed set.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, idx: usize, priority: Real) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { priority, seq, idx });
    }

    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|e| e.idx)
    }
}

/// Resolve both endpoints to node indices; `None` if either is unknown.
pub(crate) fn resolve_endpoints(
    graph: &Graph,
    source: &str,
    dest: &str,
) -> Option<(usize, usize)> {
    Some((graph.index_of(source)?, graph.index_of(dest)?))
}

/// Index of an edge's target node.
pub(crate) fn target_index(graph: &Graph, edge: &Edge) -> SearchResult<usize> {
    graph
        .index_of(&edge.to)
        .ok_or_else(|| SearchError::MissingNode {
            from: edge.from.clone(),
            id: edge.to.clone(),
        })
}

/// Walk predecessors back from `dest` and return the IDs source-first.
///
/// Returns an empty path when the walk does not end at `source`.
pub(crate) fn reconstruct_path(
    graph: &Graph,
    prev: &[Option<usize>],
    source: usize,
    dest: usize,
) -> Vec<String> {
    let nodes = graph.nodes();
    let mut path = Vec::new();
    let mut current = Some(dest);
    // Walk is bounded by node count.
    while let Some(i) = current {
        if path.len() > nodes.len() {
            return Vec::new();
        }
        path.push(nodes[i].id.clone());
        current = prev[i];
    }
    path.reverse();

    if path.first().map(String::as_str) == Some(nodes[source].id.as_str()) {
        path
    } else {
        Vec::new()
    }
}
