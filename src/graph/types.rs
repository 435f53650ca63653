use crate::error::{Result, SkeinError};
use serde::Serialize;
use std::fmt;

/// Index of a node in the graph's arena.
///
/// Node registration order is stable, so a `NodeId` stays valid for the
/// lifetime of the graph that issued it. Algorithm-local state (distance,
/// predecessor, settled flags) is kept in flat vectors indexed by this id
/// instead of hash maps keyed by label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Weight of a single edge.
///
/// Non-negative by construction: the public API accepts `i64` and rejects
/// negative values before one can reach the store, which is what keeps
/// Dijkstra's settled-node monotonicity sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct EdgeWeight(u64);

impl EdgeWeight {
    pub const ZERO: EdgeWeight = EdgeWeight(0);

    /// Validate a caller-supplied weight. Negative input is a contract
    /// violation reported as `InvalidWeight`.
    pub fn new(weight: i64) -> Result<Self> {
        if weight < 0 {
            return Err(SkeinError::invalid_weight(weight));
        }
        Ok(EdgeWeight(weight as u64))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::ops::Add for EdgeWeight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        EdgeWeight(self.0.saturating_add(other.0))
    }
}

impl From<u64> for EdgeWeight {
    fn from(weight: u64) -> Self {
        EdgeWeight(weight)
    }
}

impl fmt::Display for EdgeWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed edge record, the storage unit of the adjacency store.
///
/// Undirected semantics come from storing a mirrored pair per logical
/// connection: `add_edge(a, b, w)` appends `a -> b` to `a`'s list and
/// `b -> a` to `b`'s, both with the same weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: EdgeWeight,
}
