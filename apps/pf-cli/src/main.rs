use clap::{Parser, Subcommand, ValueEnum};
use pf_core::{PfError, as_millis_f64};
use pf_graph::{Graph, GraphStats, Node};
use pf_maps::{BuiltinMap, MapError};
use pf_search::{
    Algorithm, CompareOptions, Comparison, Heuristic, PathResult, PathStep, SearchError,
    Verdict, compare_with,
};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "pathfinder")]
#[command(about = "PathFinder CLI - shortest routes across city networks", long_about = None)]
struct Cli {
    /// Bundled map to search
    #[arg(long, global = true, default_value_t = BuiltinMap::Usa)]
    map: BuiltinMap,
    /// Load a YAML map file instead of a bundled map
    #[arg(long, global = true)]
    map_file: Option<PathBuf>,
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the bundled maps
    Maps,
    /// List all cities of the selected map
    List,
    /// Show graph statistics
    Stats,
    /// Find a route with one algorithm
    Route {
        /// Source city ID
        source: String,
        /// Destination city ID
        dest: String,
        /// Search algorithm
        #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
        algorithm: AlgorithmArg,
        /// A* heuristic (euclidean or manhattan); unknown names fall back to euclidean
        #[arg(long, default_value = "euclidean")]
        heuristic: String,
    },
    /// Run every algorithm on one query and rank the results
    Compare {
        /// Source city ID
        source: String,
        /// Destination city ID
        dest: String,
        /// Absolute distance tolerance for an optimal verdict
        #[arg(long, default_value_t = CompareOptions::default().tolerance)]
        tolerance: f64,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Dijkstra,
    Astar,
    Bfs,
    Dfs,
}

impl AlgorithmArg {
    fn with_heuristic(self, heuristic: Heuristic) -> Algorithm {
        match self {
            AlgorithmArg::Dijkstra => Algorithm::Dijkstra,
            AlgorithmArg::Astar => Algorithm::AStar(heuristic),
            AlgorithmArg::Bfs => Algorithm::Bfs,
            AlgorithmArg::Dfs => Algorithm::Dfs,
        }
    }
}

type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
enum CliError {
    #[error("Invalid city ID: {0}")]
    UnknownNode(String),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Core(#[from] PfError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The graph being queried plus a display title.
struct LoadedMap {
    title: String,
    graph: Graph,
}

impl LoadedMap {
    fn load(cli: &Cli) -> CliResult<Self> {
        match &cli.map_file {
            Some(path) => {
                let (map, graph) = pf_maps::load_yaml(path)?;
                Ok(Self {
                    title: map.name,
                    graph,
                })
            }
            None => Ok(Self {
                title: cli.map.title().to_string(),
                graph: cli.map.graph(),
            }),
        }
    }

    fn require(&self, id: &str) -> CliResult<&Node> {
        self.graph
            .try_node(id)
            .map_err(|_| CliError::UnknownNode(id.to_string()))
    }

    fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.graph.node(id).map_or(id, |n| n.name.as_str())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✗ {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> CliResult<()> {
    if let Commands::Maps = cli.command {
        return cmd_maps(cli.format);
    }

    let loaded = LoadedMap::load(cli)?;
    tracing::info!(
        map = %loaded.title,
        nodes = loaded.graph.len(),
        "map loaded"
    );

    match &cli.command {
        Commands::Maps => Ok(()),
        Commands::List => cmd_list(&loaded, cli.format),
        Commands::Stats => cmd_stats(&loaded, cli.format),
        Commands::Route {
            source,
            dest,
            algorithm,
            heuristic,
        } => {
            let algorithm = algorithm.with_heuristic(Heuristic::parse_or_default(heuristic));
            cmd_route(&loaded, source, dest, algorithm, cli.format)
        }
        Commands::Compare {
            source,
            dest,
            tolerance,
        } => {
            let options = CompareOptions {
                tolerance: pf_core::ensure_non_negative(*tolerance, "tolerance")?,
            };
            cmd_compare(&loaded, source, dest, &options, cli.format)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct MapSummary {
    key: &'static str,
    title: &'static str,
    stats: GraphStats,
}

fn cmd_maps(format: Format) -> CliResult<()> {
    let maps: Vec<MapSummary> = BuiltinMap::ALL
        .into_iter()
        .map(|m| MapSummary {
            key: m.key(),
            title: m.title(),
            stats: m.graph().stats(),
        })
        .collect();

    if format == Format::Json {
        return print_json(&maps);
    }
    println!("Available maps:");
    for m in &maps {
        println!(
            "  {:<8} {} ({} cities, {} connections)",
            m.key, m.title, m.stats.node_count, m.stats.edge_count
        );
    }
    Ok(())
}

fn cmd_list(loaded: &LoadedMap, format: Format) -> CliResult<()> {
    let nodes: Vec<&Node> = loaded.graph.nodes_by_name();
    if format == Format::Json {
        return print_json(&nodes);
    }
    println!("Cities in {}:", loaded.title);
    for (i, node) in nodes.iter().enumerate() {
        println!("  {:2}. {:<20} ({})", i + 1, node.name, node.id);
    }
    Ok(())
}

fn cmd_stats(loaded: &LoadedMap, format: Format) -> CliResult<()> {
    let stats = loaded.graph.stats();
    if format == Format::Json {
        return print_json(&stats);
    }
    println!("Graph statistics for {}:", loaded.title);
    println!("  Cities (nodes):      {}", stats.node_count);
    println!("  Connections (edges): {}", stats.edge_count);
    println!("  Average degree:      {:.1}", stats.average_degree);
    Ok(())
}

fn cmd_route(
    loaded: &LoadedMap,
    source: &str,
    dest: &str,
    algorithm: Algorithm,
    format: Format,
) -> CliResult<()> {
    loaded.require(source)?;
    loaded.require(dest)?;

    let result = algorithm.run(&loaded.graph, source, dest)?;
    let report = RouteReport {
        steps: result.steps(&loaded.graph),
        result,
    };
    if format == Format::Json {
        return print_json(&report);
    }
    print_route(loaded, &report);
    Ok(())
}

/// A search result plus its per-leg breakdown.
#[derive(Serialize)]
struct RouteReport {
    #[serde(flatten)]
    result: PathResult,
    steps: Vec<PathStep>,
}

fn print_route(loaded: &LoadedMap, report: &RouteReport) {
    let result = &report.result;
    println!("Algorithm: {}", result.algorithm);
    if !result.found() {
        println!("✗ No path found");
        println!("  Nodes visited: {}", result.nodes_visited);
        print_exploration(loaded, result);
        return;
    }

    println!("✓ Path found");
    println!("  Total distance: {:.2} km", result.distance);
    println!("  Path length:    {} cities", result.path.len());
    println!("  Nodes visited:  {}", result.nodes_visited);
    println!(
        "  Execution time: {:.3} ms",
        as_millis_f64(result.execution_time)
    );
    println!("\nRoute:");
    for (i, step) in report.steps.iter().enumerate() {
        let name = loaded.display_name(&step.node);
        if step.leg > 0.0 {
            println!(
                "  {:2}. {:<20} {:>9.2} km  (next leg {:.2} km)",
                i + 1,
                name,
                step.cumulative,
                step.leg
            );
        } else {
            println!("  {:2}. {:<20} {:>9.2} km", i + 1, name, step.cumulative);
        }
    }
    print_exploration(loaded, result);
}

fn print_exploration(loaded: &LoadedMap, result: &PathResult) {
    if result.visited.is_empty() {
        return;
    }
    let names: Vec<&str> = result
        .visited
        .iter()
        .map(|id| loaded.display_name(id))
        .collect();
    println!("\nExploration order: {}", names.join(" -> "));
}

fn cmd_compare(
    loaded: &LoadedMap,
    source: &str,
    dest: &str,
    options: &CompareOptions,
    format: Format,
) -> CliResult<()> {
    loaded.require(source)?;
    loaded.require(dest)?;

    let comparison = compare_with(&loaded.graph, source, dest, options)?;
    if format == Format::Json {
        return print_json(&comparison);
    }
    print_comparison(loaded, source, dest, &comparison);
    Ok(())
}

fn print_comparison(loaded: &LoadedMap, source: &str, dest: &str, comparison: &Comparison) {
    println!(
        "Algorithm comparison: {} -> {}",
        loaded.display_name(source),
        loaded.display_name(dest)
    );
    println!(
        "\n{:<20} {:>12} {:>8} {:>12} {:>10}",
        "Algorithm", "Distance", "Nodes", "Time (ms)", "Optimal"
    );
    println!("{}", "-".repeat(66));

    for entry in comparison.entries() {
        let r = &entry.result;
        let distance = if r.found() {
            format!("{:.2} km", r.distance)
        } else {
            "No path".to_string()
        };
        let verdict = match entry.verdict {
            Verdict::Optimal => "✓ Yes",
            Verdict::Suboptimal => "✗ No",
            Verdict::NoPath => "N/A",
        };
        let label = if entry.weight_optimal {
            format!("{} *", r.algorithm)
        } else {
            r.algorithm.clone()
        };
        println!(
            "{:<20} {:>12} {:>8} {:>12.3} {:>10}",
            label,
            distance,
            r.nodes_visited,
            as_millis_f64(r.execution_time),
            verdict
        );
    }

    println!("\n* guarantees a minimum-weight path");
    if !comparison.is_conclusive() {
        println!("\nNo algorithm found a path; no comparison can be drawn.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_route_arguments() {
        let cli = Cli::parse_from([
            "pathfinder",
            "--map",
            "europe",
            "route",
            "london",
            "rome",
            "--algorithm",
            "astar",
            "--heuristic",
            "manhattan",
        ]);
        assert_eq!(cli.map, BuiltinMap::Europe);
        match cli.command {
            Commands::Route {
                algorithm,
                heuristic,
                ..
            } => {
                let algorithm = algorithm.with_heuristic(Heuristic::parse_or_default(&heuristic));
                assert_eq!(algorithm, Algorithm::AStar(Heuristic::Manhattan));
            }
            _ => panic!("expected route"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["pathfinder", "stats", "--map", "india", "--format", "json"]);
        assert_eq!(cli.map, BuiltinMap::India);
        assert!(cli.format == Format::Json);
    }

    #[test]
    fn rejects_unknown_map() {
        assert!(Cli::try_parse_from(["pathfinder", "--map", "atlantis", "list"]).is_err());
    }

    #[test]
    fn unknown_city_is_an_error() {
        let cli = Cli::parse_from(["pathfinder", "route", "nyc", "gotham"]);
        let loaded = LoadedMap::load(&cli).unwrap();
        assert!(loaded.require("nyc").is_ok());
        assert!(matches!(
            loaded.require("gotham"),
            Err(CliError::UnknownNode(id)) if id == "gotham"
        ));
        assert!(matches!(run(&cli), Err(CliError::UnknownNode(_))));
    }

    #[test]
    fn route_report_json_carries_steps_and_exploration() {
        let cli = Cli::parse_from(["pathfinder", "route", "nyc", "boston"]);
        let loaded = LoadedMap::load(&cli).unwrap();
        let result = Algorithm::Dijkstra.run(&loaded.graph, "nyc", "boston").unwrap();
        let report = RouteReport {
            steps: result.steps(&loaded.graph),
            result,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["algorithm"], "Dijkstra");
        assert_eq!(json["path"], serde_json::json!(["nyc", "boston"]));
        assert_eq!(json["distance"], 215.0);
        assert_eq!(json["visited"][0], "nyc");
        assert_eq!(json["steps"][0]["leg"], 215.0);
        assert_eq!(json["steps"][1]["node"], "boston");
        assert_eq!(json["steps"][1]["cumulative"], 215.0);
    }

    #[test]
    fn comparison_json_names_verdicts() {
        let loaded = LoadedMap {
            title: "Square".into(),
            graph: {
                let mut graph = Graph::new();
                graph.add_node("A", "A", 0.0, 0.0);
                graph.add_node("B", "B", 1.0, 0.0);
                graph.add_node("C", "C", 1.0, 1.0);
                graph.add_node("D", "D", 0.0, 1.0);
                graph.add_bidirectional_edge("A", "B", 1.0);
                graph.add_bidirectional_edge("B", "C", 1.0);
                graph.add_bidirectional_edge("C", "D", 1.0);
                graph.add_bidirectional_edge("A", "D", 1.0);
                graph.add_bidirectional_edge("A", "C", 5.0);
                graph
            },
        };
        let comparison =
            compare_with(&loaded.graph, "A", "C", &CompareOptions::default()).unwrap();

        let json = serde_json::to_value(&comparison).unwrap();
        assert_eq!(json["best_distance"], 2.0);
        let entries = json["entries"].as_array().unwrap();
        let verdicts: Vec<&str> = entries
            .iter()
            .map(|e| e["verdict"].as_str().unwrap())
            .collect();
        assert_eq!(
            verdicts,
            ["optimal", "optimal", "optimal", "suboptimal", "optimal"]
        );
        assert_eq!(entries[0]["result"]["algorithm"], "Dijkstra");
        assert_eq!(entries[0]["weight_optimal"], true);
        assert_eq!(entries[3]["weight_optimal"], false);

        let same = compare_with(&loaded.graph, "A", "A", &CompareOptions::default()).unwrap();
        let json = serde_json::to_value(&same).unwrap();
        assert_eq!(json["entries"][4]["verdict"], "optimal");
    }

    #[test]
    fn negative_tolerance_is_rejected() {
        let cli = Cli::parse_from([
            "pathfinder",
            "compare",
            "nyc",
            "boston",
            "--tolerance=-1",
        ]);
        assert!(matches!(run(&cli), Err(CliError::Core(_))));
    }
}
