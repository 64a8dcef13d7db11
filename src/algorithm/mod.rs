pub mod traits;
pub mod dijkstra;
pub mod batch;

pub use traits::{PathFinder, PathOutcome, PathResult};

use std::fmt::Debug;
use num_traits::Float;

use crate::graph::Graph;
use crate::Result;

/// Find the shortest path between two named nodes using Dijkstra's algorithm.
///
/// Returns `PathOutcome::NoPath` when the nodes are disconnected or either one
/// is missing from the graph, and `Error::InvalidInput` when a name is empty.
pub fn find_shortest_path<W, G>(graph: &G, start: &str, end: &str) -> Result<PathOutcome<W>>
where
    W: Float + Debug + Copy + Ord,
    G: Graph<W>,
{
    dijkstra::Dijkstra::new()
        .search(graph, start, end)
        .map(|report| report.outcome)
}
