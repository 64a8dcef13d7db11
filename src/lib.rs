//! Route Finder - shortest delivery routes over a static road graph
//!
//! This library answers point-to-point shortest path queries on an undirected,
//! non-negatively weighted graph of named locations. Queries run Dijkstra's
//! algorithm over a binary-heap frontier with lazy deletion, giving
//! O((V + E) log V) per query.
//!
//! The graph is built once and then borrowed read-only by every query, so any
//! number of queries may share it.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{
    dijkstra::Dijkstra, find_shortest_path, PathFinder, PathOutcome, PathResult,
};
/// Re-export main types for convenient use
pub use graph::undirected::UndirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid weight {weight} on edge {node_a} - {node_b}: weights must be finite and non-negative")]
    InvalidWeight {
        node_a: String,
        node_b: String,
        weight: f64,
    },

    #[error("Failed to read graph definition: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse graph definition: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid node handle: {0}")]
    InvalidNode(usize),

    #[error("Distance from {start} to {end} exceeds the representable range")]
    DistanceOverflow { start: String, end: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
