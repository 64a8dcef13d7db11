pub mod traits;
pub mod undirected;
pub mod topology;
pub mod loader;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use undirected::UndirectedGraph;
pub use topology::{list_topology, Topology, TopologyEdge};

/// Dense handle assigned to each node name in first-seen order
pub type NodeId = usize;
