use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::NodeId;
use crate::{Error, Result};
use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;

/// An undirected graph of named nodes using adjacency lists
#[derive(Debug, Clone)]
pub struct UndirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Node names indexed by handle, in first-seen order
    names: Vec<String>,

    /// Name -> handle lookup
    index: HashMap<String, NodeId>,

    /// Incident edges for each node: node_id -> [(neighbor, weight)]
    adjacency: Vec<Vec<(NodeId, W)>>,

    /// Number of undirected edges added
    edge_count: usize,
}

impl<W> UndirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        UndirectedGraph {
            names: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates an empty graph with room for the given number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        UndirectedGraph {
            names: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Builds a graph from `(a, b, weight)` triples, stopping at the first invalid edge
    pub fn from_edges<'a, I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str, W)>,
    {
        let mut graph = Self::new();
        for (a, b, weight) in edges {
            graph.add_edge(a, b, weight)?;
        }
        Ok(graph)
    }

    /// Returns the incident edges of `node` in insertion order.
    ///
    /// A node that was never added has no neighbors.
    pub fn neighbors(&self, node: &str) -> Vec<(&str, W)> {
        match self.index.get(node) {
            Some(&id) => self.adjacency[id]
                .iter()
                .map(|&(neighbor, weight)| (self.names[neighbor].as_str(), weight))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Returns every node that appeared in at least one edge, in first-seen order
    pub fn nodes(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }

    fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }
}

impl<W> Default for UndirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for UndirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.names.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    fn node_name(&self, node: NodeId) -> Option<&str> {
        self.names.get(node).map(String::as_str)
    }

    fn adjacent(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_> {
        if let Some(edges) = self.adjacency.get(node) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<W> MutableGraph<W> for UndirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    fn add_edge(&mut self, a: &str, b: &str, weight: W) -> Result<()> {
        if a.is_empty() || b.is_empty() {
            return Err(Error::InvalidInput(
                "edge endpoints must be non-empty node names".to_string(),
            ));
        }
        if !weight.is_finite() || weight < W::zero() {
            return Err(Error::InvalidWeight {
                node_a: a.to_string(),
                node_b: b.to_string(),
                weight: weight.to_f64().unwrap_or(f64::NAN),
            });
        }

        let from = self.intern(a);
        let to = self.intern(b);
        self.adjacency[from].push((to, weight));
        self.adjacency[to].push((from, weight));
        self.edge_count += 1;

        Ok(())
    }
}
