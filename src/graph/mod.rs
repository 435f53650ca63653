//! Graph model and algorithms
//!
//! Provides the weighted undirected graph engine:
//! - Labeled-node arena and adjacency storage
//! - Dijkstra shortest paths with a lazy-invalidation min-heap
//! - Prim-style minimum spanning trees
//! - Undirected cycle detection

pub(crate) mod adjacency;
pub mod algos;
pub mod frontier;
pub(crate) mod path;
pub mod types;
pub mod weighted;

pub use frontier::PriorityFrontier;
pub use types::{Edge, EdgeWeight, NodeId};
pub use weighted::WeightedGraph;
