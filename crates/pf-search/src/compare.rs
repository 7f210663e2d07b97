//! Five-way comparison of the search engines on one query.

use pf_core::{Real, Tolerances, nearly_equal};
use pf_graph::Graph;

use crate::engine::{Algorithm, PathSearch};
use crate::error::SearchResult;
use crate::result::PathResult;

/// Comparison settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompareOptions {
    /// Absolute distance tolerance for an optimal verdict.
    pub tolerance: Real,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self { tolerance: 0.01 }
    }
}

/// How one result measures up against the best distance found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Verdict {
    Optimal,
    Suboptimal,
    NoPath,
}

/// One engine's result with its verdict.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonEntry {
    pub result: PathResult,
    pub verdict: Verdict,
    /// The engine guarantees a minimum-weight path
    /// (see [`Algorithm::is_weight_optimal`]).
    pub weight_optimal: bool,
}

/// Results of every engine on the same (source, destination) pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    entries: Vec<ComparisonEntry>,
    best_distance: Option<Real>,
}

impl Comparison {
    /// Tag each result against the minimum distance among those that found
    /// a path.
    pub fn from_results(results: Vec<PathResult>, options: &CompareOptions) -> Self {
        let best_distance = results
            .iter()
            .filter(|r| r.found())
            .map(|r| r.distance)
            .reduce(Real::min);

        let tol = Tolerances::absolute(options.tolerance);
        let entries = results
            .into_iter()
            .map(|result| {
                let verdict = match best_distance {
                    Some(best) if result.found() => {
                        if nearly_equal(result.distance, best, tol) {
                            Verdict::Optimal
                        } else {
                            Verdict::Suboptimal
                        }
                    }
                    _ => Verdict::NoPath,
                };
                ComparisonEntry {
                    result,
                    verdict,
                    weight_optimal: false,
                }
            })
            .collect();

        Self {
            entries,
            best_distance,
        }
    }

    /// Entries in run order.
    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    /// Minimum distance among results that found a path.
    pub fn best_distance(&self) -> Option<Real> {
        self.best_distance
    }

    /// False when no engine found a path, so nothing can be ranked.
    pub fn is_conclusive(&self) -> bool {
        self.best_distance.is_some()
    }

    /// Entry for a given algorithm label.
    pub fn entry(&self, label: &str) -> Option<&ComparisonEntry> {
        self.entries.iter().find(|e| e.result.algorithm == label)
    }

    /// Entries tagged optimal.
    pub fn optimal(&self) -> impl Iterator<Item = &ComparisonEntry> {
        self.entries
            .iter()
            .filter(|e| e.verdict == Verdict::Optimal)
    }
}

/// Run every engine in [`Algorithm::COMPARISON_SET`] with default options.
pub fn compare(graph: &Graph, source: &str, dest: &str) -> SearchResult<Comparison> {
    compare_with(graph, source, dest, &CompareOptions::default())
}

/// Run every engine in [`Algorithm::COMPARISON_SET`] and tag the results.
///
/// A malformed graph aborts the whole comparison with the first engine's
/// error. A weight-optimal engine tagged suboptimal is logged as a warning:
/// it means some edge weight is below the coordinate distance, so the A*
/// heuristics overestimate.
pub fn compare_with(
    graph: &Graph,
    source: &str,
    dest: &str,
    options: &CompareOptions,
) -> SearchResult<Comparison> {
    let results = Algorithm::COMPARISON_SET
        .iter()
        .map(|algorithm| algorithm.search(graph, source, dest))
        .collect::<SearchResult<Vec<_>>>()?;

    let mut comparison = Comparison::from_results(results, options);
    for (entry, algorithm) in comparison
        .entries
        .iter_mut()
        .zip(Algorithm::COMPARISON_SET)
    {
        entry.weight_optimal = algorithm.is_weight_optimal();
        if entry.weight_optimal && entry.verdict == Verdict::Suboptimal {
            tracing::warn!(
                algorithm = %entry.result.algorithm,
                distance = entry.result.distance,
                "weight-optimal search missed the minimum distance"
            );
        }
    }
    tracing::debug!(
        source,
        dest,
        best = ?comparison.best_distance(),
        optimal = comparison.optimal().count(),
        "comparison finished"
    );
    Ok(comparison)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn result(algorithm: &str, path: &[&str], distance: Real) -> PathResult {
        PathResult {
            path: path.iter().map(|s| s.to_string()).collect(),
            distance,
            nodes_visited: path.len(),
            visited: path.iter().map(|s| s.to_string()).collect(),
            execution_time: Duration::ZERO,
            algorithm: algorithm.into(),
        }
    }

    #[test]
    fn tags_against_minimum() {
        let results = vec![
            result("x", &["a", "b", "c"], 2.0),
            result("y", &["a", "c"], 5.0),
            result("z", &["a", "d", "c"], 2.005),
        ];
        let cmp = Comparison::from_results(results, &CompareOptions::default());
        assert_eq!(cmp.best_distance(), Some(2.0));
        let verdicts: Vec<Verdict> = cmp.entries().iter().map(|e| e.verdict).collect();
        assert_eq!(
            verdicts,
            [Verdict::Optimal, Verdict::Suboptimal, Verdict::Optimal]
        );
        assert_eq!(cmp.optimal().count(), 2);
        assert_eq!(cmp.entry("y").unwrap().verdict, Verdict::Suboptimal);
    }

    #[test]
    fn no_path_entries_are_excluded() {
        let results = vec![
            result("x", &[], crate::NO_PATH),
            result("y", &["a", "b"], 3.0),
        ];
        let cmp = Comparison::from_results(results, &CompareOptions::default());
        assert_eq!(cmp.best_distance(), Some(3.0));
        assert_eq!(cmp.entries()[0].verdict, Verdict::NoPath);
        assert_eq!(cmp.entries()[1].verdict, Verdict::Optimal);
    }

    #[test]
    fn nothing_found_is_inconclusive() {
        let results = vec![result("x", &[], crate::NO_PATH), result("y", &[], crate::NO_PATH)];
        let cmp = Comparison::from_results(results, &CompareOptions::default());
        assert!(!cmp.is_conclusive());
        assert_eq!(cmp.best_distance(), None);
        assert!(cmp.entries().iter().all(|e| e.verdict == Verdict::NoPath));
    }

    #[test]
    fn zero_length_path_counts_as_found() {
        let results = vec![result("x", &["a"], 0.0)];
        let cmp = Comparison::from_results(results, &CompareOptions::default());
        assert_eq!(cmp.best_distance(), Some(0.0));
        assert_eq!(cmp.entries()[0].verdict, Verdict::Optimal);
    }

    #[test]
    fn custom_tolerance() {
        let results = vec![result("x", &["a", "b"], 10.0), result("y", &["a", "b"], 10.4)];
        let cmp = Comparison::from_results(results, &CompareOptions { tolerance: 0.5 });
        assert_eq!(cmp.optimal().count(), 2);
    }

    #[test]
    fn weight_optimal_flags_follow_the_engine() {
        // a sits far away in coordinates but is cheap to route through, so
        // both heuristics overestimate and A* settles on the direct edge.
        let mut graph = Graph::new();
        graph.add_node("s", "S", 0.0, 0.0);
        graph.add_node("t", "T", 1.0, 0.0);
        graph.add_node("a", "A", 10.0, 0.0);
        graph.add_bidirectional_edge("s", "t", 5.0);
        graph.add_bidirectional_edge("s", "a", 1.0);
        graph.add_bidirectional_edge("a", "t", 1.0);

        let cmp = compare(&graph, "s", "t").unwrap();
        assert_eq!(cmp.best_distance(), Some(2.0));
        let flags: Vec<(bool, Verdict)> = cmp
            .entries()
            .iter()
            .map(|e| (e.weight_optimal, e.verdict))
            .collect();
        assert_eq!(
            flags,
            [
                (true, Verdict::Optimal),
                (true, Verdict::Suboptimal),
                (true, Verdict::Suboptimal),
                (false, Verdict::Suboptimal),
                (false, Verdict::Suboptimal),
            ]
        );
    }
}
