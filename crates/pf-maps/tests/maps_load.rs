use std::path::PathBuf;

use pf_maps::{BuiltinMap, MapError, from_yaml_str, load_yaml, save_yaml};
use pf_search::{Algorithm, Heuristic, Verdict, compare, dijkstra};

fn maps_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../maps")
}

#[test]
fn bundled_map_files_load() {
    let (map, graph) = load_yaml(&maps_dir().join("square.yaml")).unwrap();
    assert_eq!(map.name, "Square");
    assert_eq!(graph.len(), 5);
    assert_eq!(graph.stats().edge_count, 5);

    let result = dijkstra(&graph, "A", "C").unwrap();
    assert_eq!(result.path, ["A", "B", "C"]);
    assert_eq!(result.distance, 2.0);
    assert!(!dijkstra(&graph, "A", "E").unwrap().found());
}

#[test]
fn one_way_ring_respects_direction() {
    let (_, graph) = load_yaml(&maps_dir().join("one_way.yaml")).unwrap();
    assert!(graph.neighbors("n2").iter().all(|e| e.to != "n1"));
    // The two-way chord beats going round the ring.
    let result = dijkstra(&graph, "n2", "n1").unwrap();
    assert_eq!(result.path, ["n2", "n3", "n1"]);
    assert_eq!(result.distance, 10.0);
}

#[test]
fn bidirectional_defaults_to_true() {
    let yaml = r#"
name: Pair
nodes:
  - { id: a, name: A, x: 0, y: 0 }
  - { id: b, name: B, x: 3, y: 4 }
edges:
  - { from: a, to: b, weight: 5 }
"#;
    let (map, graph) = from_yaml_str(yaml).unwrap();
    assert!(map.edges[0].bidirectional);
    assert_eq!(graph.neighbors("b")[0].to, "a");
}

#[test]
fn missing_lists_default_to_empty() {
    let (map, graph) = from_yaml_str("name: Nothing\n").unwrap();
    assert!(map.nodes.is_empty());
    assert!(graph.is_empty());
}

#[test]
fn rejects_bad_documents() {
    let dangling = r#"
name: Broken
nodes:
  - { id: a, name: A, x: 0, y: 0 }
edges:
  - { from: a, to: nowhere, weight: 1 }
"#;
    assert!(matches!(from_yaml_str(dangling), Err(MapError::Graph(_))));

    let negative = r#"
name: Broken
nodes:
  - { id: a, name: A, x: 0, y: 0 }
  - { id: b, name: B, x: 1, y: 0 }
edges:
  - { from: a, to: b, weight: -2 }
"#;
    assert!(matches!(from_yaml_str(negative), Err(MapError::Graph(_))));

    assert!(matches!(from_yaml_str("nodes: 7"), Err(MapError::Yaml(_))));
    assert!(matches!(
        load_yaml(&maps_dir().join("does_not_exist.yaml")),
        Err(MapError::Io(_))
    ));
}

#[test]
fn save_and_reload() {
    let (map, graph) = load_yaml(&maps_dir().join("square.yaml")).unwrap();
    let path = std::env::temp_dir().join("pf_maps_roundtrip_square.yaml");
    save_yaml(&path, &map).unwrap();
    let (reloaded, regraph) = load_yaml(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(map, reloaded);
    assert_eq!(graph.stats(), regraph.stats());
}

#[test]
fn builtin_routes() {
    let usa = BuiltinMap::Usa.graph();
    let result = dijkstra(&usa, "nyc", "boston").unwrap();
    assert_eq!(result.path, ["nyc", "boston"]);
    assert_eq!(result.distance, 215.0);

    // la -> phoenix direct (370) beats the San Diego detour (475).
    let result = Algorithm::AStar(Heuristic::Manhattan)
        .run(&usa, "la", "phoenix")
        .unwrap();
    assert_eq!(result.distance, 370.0);

    // san_jose has no roads.
    let result = dijkstra(&usa, "san_jose", "la").unwrap();
    assert!(!result.found());
}

#[test]
fn builtin_comparison_agrees_on_weighted_engines() {
    for map in BuiltinMap::ALL {
        let graph = map.graph();
        let nodes = graph.nodes();
        let source = &nodes[0].id;
        for target in nodes {
            let comparison = compare(&graph, source, &target.id).unwrap();
            for entry in &comparison.entries()[..3] {
                if comparison.is_conclusive() {
                    assert_eq!(entry.verdict, Verdict::Optimal, "{map}: {}", target.id);
                } else {
                    assert_eq!(entry.verdict, Verdict::NoPath);
                }
            }
        }
    }
}

#[test]
fn stats_match_known_totals() {
    let india = BuiltinMap::India.graph().stats();
    assert_eq!(india.node_count, 15);
    assert_eq!(india.edge_count, 23);
    assert!((india.average_degree - 46.0 / 15.0).abs() < 1e-12);
}
