use num_traits::Float;
use rayon::prelude::*;
use std::fmt::Debug;

use crate::algorithm::{find_shortest_path, PathOutcome};
use crate::graph::Graph;
use crate::Result;

/// Answers independent queries against one shared graph in parallel.
///
/// The graph is only borrowed, so every worker reads the same adjacency.
/// Results come back in the order of `queries`.
pub fn find_paths_parallel<W, G, Q>(graph: &G, queries: &[(Q, Q)]) -> Vec<Result<PathOutcome<W>>>
where
    W: Float + Debug + Copy + Ord + Send,
    G: Graph<W> + Sync,
    Q: AsRef<str> + Sync,
{
    log::debug!("Running {} queries in parallel", queries.len());
    queries
        .par_iter()
        .map(|(start, end)| find_shortest_path(graph, start.as_ref(), end.as_ref()))
        .collect()
}
