//! Node registry and adjacency storage
//!
//! The arena owns every label and hands out index-stable `NodeId`s; the
//! adjacency store keeps one outgoing edge list per node, in insertion
//! order. The two grow in lockstep: registering a node always creates its
//! (initially empty) edge list, so every arena id indexes a valid list.

use crate::graph::types::{Edge, NodeId};
use std::collections::HashMap;

/// Index-stable registry of uniquely-labeled nodes.
#[derive(Debug, Default, Clone)]
pub(crate) struct NodeArena {
    labels: Vec<String>,
    by_label: HashMap<String, NodeId>,
}

impl NodeArena {
    /// Register a label, returning its id. Idempotent: an existing label
    /// keeps its original id.
    pub(crate) fn insert(&mut self, label: String) -> (NodeId, bool) {
        if let Some(&id) = self.by_label.get(&label) {
            return (id, false);
        }
        let id = NodeId(self.labels.len());
        self.labels.push(label.clone());
        self.by_label.insert(label, id);
        (id, true)
    }

    pub(crate) fn get(&self, label: &str) -> Option<NodeId> {
        self.by_label.get(label).copied()
    }

    pub(crate) fn label(&self, id: NodeId) -> &str {
        &self.labels[id.index()]
    }

    pub(crate) fn len(&self) -> usize {
        self.labels.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.labels.len()).map(NodeId)
    }
}

/// Per-node outgoing edge lists, indexed by `NodeId`.
#[derive(Debug, Default, Clone)]
pub(crate) struct AdjacencyStore {
    lists: Vec<Vec<Edge>>,
}

impl AdjacencyStore {
    /// Create the (empty) edge list for a newly registered node.
    pub(crate) fn register(&mut self) {
        self.lists.push(Vec::new());
    }

    pub(crate) fn append(&mut self, edge: Edge) {
        self.lists[edge.source.index()].push(edge);
    }

    pub(crate) fn edges_from(&self, id: NodeId) -> &[Edge] {
        &self.lists[id.index()]
    }

    /// Total stored edge records (each logical connection counts twice).
    pub(crate) fn record_count(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }
}
