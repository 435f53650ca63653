//! The weighted undirected graph facade
//!
//! Owns the node registry and the adjacency store, and exposes the
//! public operations: mutation (`add_node`, `add_edge`) and read-only
//! algorithms (`shortest_path`, `minimum_spanning_tree`, `has_cycle`).
//! Mutation takes `&mut self` and algorithms take `&self`, so the
//! single-writer rule is compiler-enforced.

use crate::error::{Result, SkeinError};
use crate::graph::adjacency::{AdjacencyStore, NodeArena};
use crate::graph::algos;
use crate::graph::types::{Edge, EdgeWeight, NodeId};

/// An undirected, weighted graph over uniquely-labeled nodes.
///
/// Every instance owns an independent, freshly-allocated registry and
/// adjacency store; no state is shared between instances.
#[derive(Debug, Default, Clone)]
pub struct WeightedGraph {
    nodes: NodeArena,
    adjacency: AdjacencyStore,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the graph. Idempotent: re-adding an existing label
    /// is a no-op and does not disturb its adjacency list.
    pub fn add_node(&mut self, label: impl Into<String>) {
        let (_, inserted) = self.nodes.insert(label.into());
        if inserted {
            self.adjacency.register();
        }
    }

    /// Add an undirected, potentially weighted, edge between two nodes.
    ///
    /// Fails with `NodeNotFound` if either label is unregistered and with
    /// `InvalidWeight` if `weight` is negative. A weight of zero is valid.
    pub fn add_edge(&mut self, first: &str, second: &str, weight: i64) -> Result<()> {
        self.insert_edge(first, second, EdgeWeight::new(weight)?)
    }

    /// Append the mirrored edge pair for an already-validated weight.
    pub(crate) fn insert_edge(
        &mut self,
        first: &str,
        second: &str,
        weight: EdgeWeight,
    ) -> Result<()> {
        let first_id = self
            .nodes
            .get(first)
            .ok_or_else(|| SkeinError::node_not_found(first))?;
        let second_id = self
            .nodes
            .get(second)
            .ok_or_else(|| SkeinError::node_not_found(second))?;

        // The edge relationship must go both ways in an undirected graph.
        self.adjacency.append(Edge {
            source: first_id,
            target: second_id,
            weight,
        });
        self.adjacency.append(Edge {
            source: second_id,
            target: first_id,
            weight,
        });
        Ok(())
    }

    /// Compute the shortest path between two nodes using Dijkstra's
    /// algorithm. Returns the ordered label sequence from `source` to
    /// `target` inclusive; an unreachable target yields an empty
    /// sequence, which is a normal result rather than an error.
    pub fn shortest_path(&self, source: &str, target: &str) -> Result<Vec<String>> {
        let source_id = self
            .nodes
            .get(source)
            .ok_or_else(|| SkeinError::node_not_found(source))?;
        let target_id = self
            .nodes
            .get(target)
            .ok_or_else(|| SkeinError::node_not_found(target))?;
        Ok(algos::dijkstra::shortest_path(self, source_id, target_id))
    }

    /// Compute a minimum spanning tree of the component reachable from
    /// the lexicographically smallest label, returned as a new graph.
    /// Fails with `EmptyGraph` when no nodes have been added.
    pub fn minimum_spanning_tree(&self) -> Result<WeightedGraph> {
        algos::mst::minimum_spanning_tree(self)
    }

    /// True iff the graph, viewed as an undirected simple graph,
    /// contains any cycle.
    pub fn has_cycle(&self) -> bool {
        algos::cycle::has_cycle(self)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of logical connections (each mirrored pair counted once).
    pub fn edge_count(&self) -> usize {
        self.adjacency.record_count() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, label: &str) -> bool {
        self.nodes.get(label).is_some()
    }

    /// Look up the id of a labeled node, if registered.
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.nodes.get(label)
    }

    /// Sum of all logical edge weights.
    pub fn total_weight(&self) -> u64 {
        let doubled: u64 = self
            .nodes
            .ids()
            .flat_map(|id| self.adjacency.edges_from(id))
            .map(|edge| edge.weight.value())
            .sum();
        doubled / 2
    }

    pub fn node_labels(&self) -> impl Iterator<Item = &str> {
        self.nodes.ids().map(move |id| self.nodes.label(id))
    }

    /// Read-only iteration over `(label, outgoing edges)` pairs, in node
    /// registration order. This is the snapshot surface consumed by the
    /// diagnostic formatter.
    pub fn connections(&self) -> impl Iterator<Item = (&str, &[Edge])> {
        self.nodes
            .ids()
            .map(move |id| (self.nodes.label(id), self.adjacency.edges_from(id)))
    }

    pub(crate) fn label(&self, id: NodeId) -> &str {
        self.nodes.label(id)
    }

    pub(crate) fn edges_from(&self, id: NodeId) -> &[Edge] {
        self.adjacency.edges_from(id)
    }

    pub(crate) fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.nodes.ids()
    }
}
