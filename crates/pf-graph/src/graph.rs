//! Core graph data structures.

use std::collections::HashMap;

use pf_core::{Point, Real};

use crate::error::{GraphError, GraphResult};
use crate::stats::GraphStats;
use crate::validate;

/// A labeled point in the plane.
///
/// Nodes are immutable once inserted; re-adding an ID replaces the record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: String,
    pub name: String,
    pub x: Real,
    pub y: Real,
}

impl Node {
    /// Coordinates of the node.
    pub fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A weighted directed connection.
///
/// A bidirectional insertion stores two independent `Edge` values, one per
/// direction, with the same weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: Real,
}

/// The graph: nodes in insertion order plus outgoing adjacency lists.
///
/// Insertion never checks that edge endpoints exist. A dangling endpoint is
/// only reported when a search dereferences it, or by [`Graph::validate`].
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    /// Node ID -> position in `nodes`.
    pub(crate) index: HashMap<String, usize>,
    /// Source node ID -> outgoing edges in insertion order.
    pub(crate) adjacency: HashMap<String, Vec<Edge>>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, or overwrite the node with the same ID.
    ///
    /// Either way the node's outgoing edge list starts out empty again.
    /// An overwritten node keeps its original position in [`Graph::nodes`].
    pub fn add_node(&mut self, id: impl Into<String>, name: impl Into<String>, x: Real, y: Real) {
        let id = id.into();
        let node = Node {
            id: id.clone(),
            name: name.into(),
            x,
            y,
        };
        match self.index.get(&id) {
            Some(&i) => self.nodes[i] = node,
            None => {
                self.index.insert(id.clone(), self.nodes.len());
                self.nodes.push(node);
            }
        }
        self.adjacency.insert(id, Vec::new());
    }

    /// Append an edge `from -> to`; when `bidirectional`, also `to -> from`.
    pub fn add_edge(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        weight: Real,
        bidirectional: bool,
    ) {
        let from = from.into();
        let to = to.into();

        self.adjacency.entry(from.clone()).or_default().push(Edge {
            from: from.clone(),
            to: to.clone(),
            weight,
        });
        if bidirectional {
            self.adjacency.entry(to.clone()).or_default().push(Edge {
                from: to,
                to: from,
                weight,
            });
        }
    }

    /// Shorthand for `add_edge(from, to, weight, true)`.
    pub fn add_bidirectional_edge(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        weight: Real,
    ) {
        self.add_edge(from, to, weight, true);
    }

    /// Outgoing edges of `id` (empty if the ID is unknown).
    pub fn neighbors(&self, id: &str) -> &[Edge] {
        match self.adjacency.get(id) {
            Some(edges) => edges,
            None => &[],
        }
    }

    /// Get a node by ID.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index_of(id).map(|i| &self.nodes[i])
    }

    /// Get a node by ID, or [`GraphError::NodeNotFound`].
    pub fn try_node(&self, id: &str) -> GraphResult<&Node> {
        self.node(id).ok_or_else(|| GraphError::NodeNotFound { id: id.to_string() })
    }

    /// Whether `id` names a node.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Position of `id` in [`Graph::nodes`]; stable for the graph's lifetime.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All nodes sorted by display name (ties broken by ID).
    pub fn nodes_by_name(&self) -> Vec<&Node> {
        let mut sorted: Vec<&Node> = self.nodes.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        sorted
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of directed edge records, dangling ones included.
    pub fn edge_record_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Iterate over every stored edge. Order is unspecified across sources.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.adjacency.values().flatten()
    }

    /// Node count, connection count and average degree.
    pub fn stats(&self) -> GraphStats {
        GraphStats::from_graph(self)
    }

    /// Check that every edge endpoint exists and every weight is a finite,
    /// non-negative number.
    pub fn validate(&self) -> GraphResult<()> {
        validate::validate_edges(self)
    }
}
