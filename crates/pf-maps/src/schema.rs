//! Map file schema definitions.

use pf_core::numeric::ensure_finite;
use pf_graph::Graph;
use serde::{Deserialize, Serialize};

use crate::MapResult;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapFile {
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<NodeDef>,
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeDef {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeDef {
    pub from: String,
    pub to: String,
    pub weight: f64,
    #[serde(default = "default_bidirectional")]
    pub bidirectional: bool,
}

fn default_bidirectional() -> bool {
    true
}

impl MapFile {
    /// Build the graph described by this file and validate it.
    ///
    /// Unlike direct [`Graph`] construction, a map file with dangling edge
    /// endpoints or bad weights is rejected up front.
    pub fn to_graph(&self) -> MapResult<Graph> {
        let mut graph = Graph::new();
        for node in &self.nodes {
            let x = ensure_finite(node.x, "node x coordinate")?;
            let y = ensure_finite(node.y, "node y coordinate")?;
            graph.add_node(node.id.as_str(), node.name.as_str(), x, y);
        }
        for edge in &self.edges {
            graph.add_edge(
                edge.from.as_str(),
                edge.to.as_str(),
                edge.weight,
                edge.bidirectional,
            );
        }
        graph.validate()?;
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapError;

    fn sample() -> MapFile {
        MapFile {
            name: "Pair".into(),
            nodes: vec![
                NodeDef {
                    id: "a".into(),
                    name: "A".into(),
                    x: 0.0,
                    y: 0.0,
                },
                NodeDef {
                    id: "b".into(),
                    name: "B".into(),
                    x: 1.0,
                    y: 0.0,
                },
            ],
            edges: vec![EdgeDef {
                from: "a".into(),
                to: "b".into(),
                weight: 1.5,
                bidirectional: false,
            }],
        }
    }

    #[test]
    fn builds_graph() {
        let graph = sample().to_graph().unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.neighbors("a").len(), 1);
        assert!(graph.neighbors("b").is_empty());
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        let mut map = sample();
        map.nodes[1].y = f64::NAN;
        assert!(matches!(map.to_graph(), Err(MapError::Core(_))));
    }

    #[test]
    fn rejects_dangling_edges() {
        let mut map = sample();
        map.edges[0].to = "c".into();
        assert!(matches!(map.to_graph(), Err(MapError::Graph(_))));
    }
}
