//! pf-search: path searches over a [`pf_graph::Graph`].
//!
//! Four engines share one contract, [`PathSearch`]:
//!
//! | Engine | Frontier | Returns |
//! |---|---|---|
//! | [`Dijkstra`] | binary heap on `g` | lowest-weight path |
//! | [`AStar`] | binary heap on `g + h` | lowest-weight path |
//! | [`Bfs`] | FIFO queue | fewest-hop path |
//! | [`Dfs`] | explicit stack | first path found |
//!
//! [`compare`] runs all five configurations (A* once per [`Heuristic`]) on a
//! single query and tags which results reached the minimum distance.
//!
//! Unknown endpoints and unreachable destinations are ordinary results with
//! an empty path and [`NO_PATH`] distance. Only a malformed graph (an edge
//! into a node that does not exist) is an error.
//!
//! ```
//! use pf_graph::Graph;
//! use pf_search::{dijkstra, bfs};
//!
//! let mut graph = Graph::new();
//! graph.add_node("a", "A", 0.0, 0.0);
//! graph.add_node("b", "B", 1.0, 0.0);
//! graph.add_node("c", "C", 1.0, 1.0);
//! graph.add_bidirectional_edge("a", "b", 1.0);
//! graph.add_bidirectional_edge("b", "c", 1.0);
//! graph.add_bidirectional_edge("a", "c", 5.0);
//!
//! let shortest = dijkstra(&graph, "a", "c").unwrap();
//! assert_eq!(shortest.path, ["a", "b", "c"]);
//! assert_eq!(shortest.distance, 2.0);
//!
//! let fewest_hops = bfs(&graph, "a", "c").unwrap();
//! assert_eq!(fewest_hops.path, ["a", "c"]);
//! ```

mod astar;
mod bfs;
pub mod compare;
mod dfs;
mod dijkstra;
pub mod engine;
pub mod error;
mod frontier;
pub mod heuristic;
pub mod result;

pub use astar::{AStar, astar};
pub use bfs::{Bfs, bfs};
pub use compare::{CompareOptions, Comparison, ComparisonEntry, Verdict, compare, compare_with};
pub use dfs::{Dfs, dfs};
pub use dijkstra::{Dijkstra, dijkstra};
pub use engine::{Algorithm, PathSearch};
pub use error::{SearchError, SearchResult};
pub use heuristic::Heuristic;
pub use result::{NO_PATH, PathResult, PathStep};
