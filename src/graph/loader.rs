use num_traits::{Float, NumCast};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::fs;
use std::path::Path;

use crate::graph::{MutableGraph, UndirectedGraph};
use crate::{Error, Result};

/// On-disk description of a road graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDefinition {
    pub edges: Vec<EdgeDefinition>,
}

/// One undirected road between two named locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeDefinition {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Parses a JSON graph definition and builds the graph it describes
pub fn parse_graph_definition<W>(json: &str) -> Result<UndirectedGraph<W>>
where
    W: Float + Debug + Copy,
{
    let definition: GraphDefinition = serde_json::from_str(json)?;
    build_graph(&definition)
}

/// Reads and builds a graph from a JSON file
pub fn load_graph_file<W, P>(path: P) -> Result<UndirectedGraph<W>>
where
    W: Float + Debug + Copy,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let graph = parse_graph_definition(&contents)?;
    log::info!("Loaded graph from {}", path.display());
    Ok(graph)
}

/// Builds a graph from an already-deserialized definition
pub fn build_graph<W>(definition: &GraphDefinition) -> Result<UndirectedGraph<W>>
where
    W: Float + Debug + Copy,
{
    let mut graph = UndirectedGraph::with_capacity(definition.edges.len());
    for edge in &definition.edges {
        let weight = <W as NumCast>::from(edge.weight).ok_or_else(|| Error::InvalidWeight {
            node_a: edge.from.clone(),
            node_b: edge.to.clone(),
            weight: edge.weight,
        })?;
        graph.add_edge(&edge.from, &edge.to, weight)?;
    }
    Ok(graph)
}
