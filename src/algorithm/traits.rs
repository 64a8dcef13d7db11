use std::fmt::Debug;
use num_traits::Float;
use crate::graph::{Graph, NodeId};
use crate::{Error, Result};

/// A path found between two nodes
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult<W>
where
    W: Float + Debug + Copy,
{
    /// Node names from start to end, both inclusive
    pub path: Vec<String>,

    /// Sum of the edge weights along `path`
    pub distance: W,
}

/// Outcome of a point-to-point query.
///
/// `NoPath` is an ordinary answer for disconnected or unknown endpoints and is
/// kept apart from a found path of distance zero.
#[derive(Debug, Clone, PartialEq)]
pub enum PathOutcome<W>
where
    W: Float + Debug + Copy,
{
    Found(PathResult<W>),
    NoPath,
}

impl<W> PathOutcome<W>
where
    W: Float + Debug + Copy,
{
    /// Returns true if a path was found
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }

    /// Total distance of the found path; `None` for `NoPath`
    pub fn distance(&self) -> Option<W> {
        match self {
            PathOutcome::Found(result) => Some(result.distance),
            PathOutcome::NoPath => None,
        }
    }

    /// Node names of the found path, start first
    pub fn path(&self) -> Option<&[String]> {
        match self {
            PathOutcome::Found(result) => Some(&result.path),
            PathOutcome::NoPath => None,
        }
    }

    /// Converts into the found path, if any
    pub fn into_found(self) -> Option<PathResult<W>> {
        match self {
            PathOutcome::Found(result) => Some(result),
            PathOutcome::NoPath => None,
        }
    }
}

/// Trait for point-to-point shortest path algorithms
pub trait PathFinder<W, G>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    /// Find the shortest path from `start` to `end`
    fn find_path(&self, graph: &G, start: &str, end: &str) -> Result<PathOutcome<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Rejects missing endpoints before any traversal starts
pub fn validate_endpoints(start: &str, end: &str) -> Result<()> {
    if start.is_empty() || end.is_empty() {
        return Err(Error::InvalidInput(
            "start and end nodes are required".to_string(),
        ));
    }
    Ok(())
}

/// Walks the parent table back from `target` and returns the names in
/// start-to-target order. Every handle on the way must resolve to a name.
pub(crate) fn reconstruct_path<W, G>(
    graph: &G,
    parents: &[Option<NodeId>],
    target: NodeId,
) -> Result<Vec<String>>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    let mut path = Vec::new();
    let mut current = Some(target);

    while let Some(node) = current {
        let name = graph.node_name(node).ok_or(Error::InvalidNode(node))?;
        path.push(name.to_string());
        current = parents.get(node).copied().flatten();
    }

    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{MutableGraph, UndirectedGraph};
    use ordered_float::OrderedFloat;

    fn line() -> UndirectedGraph<OrderedFloat<f64>> {
        let mut graph = UndirectedGraph::new();
        graph.add_edge("A", "B", OrderedFloat(1.0)).unwrap();
        graph.add_edge("B", "C", OrderedFloat(1.0)).unwrap();
        graph
    }

    #[test]
    fn reconstructs_in_start_to_target_order() {
        let graph = line();
        let parents = vec![None, Some(0), Some(1)];

        assert_eq!(reconstruct_path(&graph, &parents, 2).unwrap(), vec!["A", "B", "C"]);
        assert_eq!(reconstruct_path(&graph, &parents, 0).unwrap(), vec!["A"]);
    }

    #[test]
    fn unresolvable_handle_is_an_error() {
        let graph = line();
        // Parent table pointing outside the graph
        let parents = vec![None, Some(7), Some(1)];

        assert!(matches!(reconstruct_path(&graph, &parents, 2), Err(Error::InvalidNode(7))));
        assert!(matches!(reconstruct_path(&graph, &parents, 42), Err(Error::InvalidNode(42))));
    }
}
