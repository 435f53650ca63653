//! Path reconstruction from a predecessor map

use crate::graph::types::NodeId;
use crate::graph::WeightedGraph;

/// Rebuild the source-to-target label sequence from the predecessor map
/// produced by a shortest-path run.
///
/// Walks backward from `target` collecting node ids onto a stack, then
/// pops the stack to yield source-to-target order. Returns an empty
/// sequence when `target` was never reached (no predecessor assigned and
/// `target != source`); returns `[source]` when `target == source`.
pub(crate) fn build_path(
    graph: &WeightedGraph,
    source: NodeId,
    target: NodeId,
    predecessors: &[Option<NodeId>],
) -> Vec<String> {
    if target != source && predecessors[target.index()].is_none() {
        return Vec::new();
    }

    let mut stack = vec![target];
    let mut current = target;
    while let Some(previous) = predecessors[current.index()] {
        stack.push(previous);
        current = previous;
    }

    let mut labels = Vec::with_capacity(stack.len());
    while let Some(id) = stack.pop() {
        labels.push(graph.label(id).to_string());
    }
    labels
}
