use num_traits::Float;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::Debug;

use crate::graph::{Graph, NodeId};

/// Read-only snapshot of a graph for rendering or inspection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Topology {
    pub nodes: Vec<String>,
    pub edges: Vec<TopologyEdge>,
}

/// A single undirected edge as reported in a topology snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopologyEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// Lists every node and one entry per connected node pair.
///
/// Both directions of an undirected edge collapse into the orientation seen
/// first when walking nodes and their neighbors in insertion order. Parallel
/// edges between the same pair are reported once, with the first-seen weight.
pub fn list_topology<W, G>(graph: &G) -> Topology
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    let mut nodes = Vec::with_capacity(graph.node_count());
    let mut edges = Vec::new();
    let mut seen: HashSet<(NodeId, NodeId)> = HashSet::new();

    for u in 0..graph.node_count() {
        let Some(source) = graph.node_name(u) else {
            continue;
        };
        nodes.push(source.to_string());

        for (v, weight) in graph.adjacent(u) {
            if seen.contains(&(u, v)) || seen.contains(&(v, u)) {
                continue;
            }
            seen.insert((u, v));

            let target = graph.node_name(v).unwrap_or_default();
            edges.push(TopologyEdge {
                id: format!("{}-{}", source, target),
                source: source.to_string(),
                target: target.to_string(),
                weight: weight.to_f64().unwrap_or(f64::NAN),
            });
        }
    }

    Topology { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{MutableGraph, UndirectedGraph};
    use ordered_float::OrderedFloat;

    #[test]
    fn collapses_both_directions_into_first_seen_orientation() {
        let mut graph = UndirectedGraph::new();
        graph.add_edge("B", "A", OrderedFloat(3.0)).unwrap();
        graph.add_edge("A", "C", OrderedFloat(1.0)).unwrap();

        let topology = list_topology(&graph);

        assert_eq!(topology.nodes, vec!["B", "A", "C"]);
        let ids: Vec<&str> = topology.edges.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["B-A", "A-C"]);
    }

    #[test]
    fn parallel_edges_report_first_weight() {
        let mut graph = UndirectedGraph::new();
        graph.add_edge("A", "B", OrderedFloat(7.0)).unwrap();
        graph.add_edge("B", "A", OrderedFloat(2.0)).unwrap();

        let topology = list_topology(&graph);

        assert_eq!(topology.edges.len(), 1);
        assert_eq!(topology.edges[0].source, "A");
        assert_eq!(topology.edges[0].weight, 7.0);
    }

    #[test]
    fn empty_graph_has_empty_topology() {
        let graph: UndirectedGraph<OrderedFloat<f64>> = UndirectedGraph::new();
        let topology = list_topology(&graph);
        assert!(topology.nodes.is_empty());
        assert!(topology.edges.is_empty());
    }
}
