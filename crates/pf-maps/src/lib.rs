//! pf-maps: graph inputs for pathfinder.
//!
//! - [`BuiltinMap`]: the bundled USA, Europe and India city networks
//! - [`MapFile`]: YAML description of a custom graph, loaded with
//!   [`load_yaml`] or [`from_yaml_str`] and written with [`save_yaml`]

pub mod builtin;
pub mod schema;

pub use builtin::BuiltinMap;
pub use schema::{EdgeDef, MapFile, NodeDef};

use pf_core::PfError;
use pf_graph::{Graph, GraphError};

pub type MapResult<T> = Result<T, MapError>;

#[derive(thiserror::Error, Debug)]
pub enum MapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid map data: {0}")]
    Core(#[from] PfError),

    #[error("Invalid graph: {0}")]
    Graph(#[from] GraphError),
}

/// Parse a YAML map description into a validated graph.
pub fn from_yaml_str(content: &str) -> MapResult<(MapFile, Graph)> {
    let map: MapFile = serde_yaml::from_str(content)?;
    let graph = map.to_graph()?;
    Ok((map, graph))
}

/// Read and parse a YAML map file into a validated graph.
pub fn load_yaml(path: &std::path::Path) -> MapResult<(MapFile, Graph)> {
    let content = std::fs::read_to_string(path)?;
    let loaded = from_yaml_str(&content)?;
    tracing::info!(
        path = %path.display(),
        nodes = loaded.1.len(),
        "loaded map file"
    );
    Ok(loaded)
}

/// Serialize a map description back to YAML.
pub fn to_yaml_string(map: &MapFile) -> MapResult<String> {
    Ok(serde_yaml::to_string(map)?)
}

/// Write a map description to a YAML file.
pub fn save_yaml(path: &std::path::Path, map: &MapFile) -> MapResult<()> {
    let content = to_yaml_string(map)?;
    std::fs::write(path, content)?;
    Ok(())
}
