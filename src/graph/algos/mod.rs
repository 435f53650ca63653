//! Graph algorithm implementations
//!
//! Contains the read-only algorithms invoked through the graph facade:
//! - `dijkstra`: weighted shortest path finding
//! - `mst`: Prim-style minimum spanning tree construction
//! - `cycle`: undirected cycle detection

pub mod cycle;
pub mod dijkstra;
pub mod mst;
