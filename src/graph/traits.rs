use std::fmt::Debug;
use num_traits::Float;

use crate::graph::NodeId;
use crate::Result;

/// Trait representing a weighted graph whose nodes are addressed by name
pub trait Graph<W>: Debug
where
    W: Float + Debug + Copy,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of undirected edges, counting parallel edges individually
    fn edge_count(&self) -> usize;

    /// Resolves a node name to its dense handle
    fn node_id(&self, name: &str) -> Option<NodeId>;

    /// Resolves a handle back to the node name
    fn node_name(&self, node: NodeId) -> Option<&str>;

    /// Returns an iterator over the edges incident to a node, in insertion order.
    /// Unknown handles yield nothing.
    fn adjacent(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_>;

    /// Returns true if a node with this name exists in the graph
    fn has_node(&self, name: &str) -> bool {
        self.node_id(name).is_some()
    }
}

/// Trait for graphs that can be built up edge by edge
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Debug + Copy,
{
    /// Adds an undirected edge between two named nodes, creating them as needed.
    ///
    /// Adding the same pair twice produces parallel edges.
    fn add_edge(&mut self, a: &str, b: &str, weight: W) -> Result<()>;
}
