//! Skein Core Library
//!
//! In-memory weighted, undirected graph engine. Provides a labeled-node
//! adjacency model with shortest-path computation (Dijkstra), minimum
//! spanning tree construction (Prim), and cycle detection.

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
