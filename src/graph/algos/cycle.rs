//! Undirected cycle detection
//!
//! Depth-first walk over every component using an explicit work stack,
//! so deep graphs cannot exhaust the call stack. The edge leading back
//! to the immediate DFS parent is ignored (the mirrored pair would
//! otherwise report a trivial two-node cycle); any other edge into an
//! already-visited node closes a real cycle. Runs in O(V+E) across all
//! components.

use crate::graph::types::NodeId;
use crate::graph::WeightedGraph;

/// True iff the graph, as an undirected simple graph, is not a forest.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub(crate) fn has_cycle(graph: &WeightedGraph) -> bool {
    let mut visited = vec![false; graph.node_count()];
    let mut stack: Vec<(NodeId, Option<NodeId>)> = Vec::new();

    for start in graph.node_ids() {
        if visited[start.index()] {
            continue;
        }
        visited[start.index()] = true;
        stack.push((start, None));

        while let Some((current, parent)) = stack.pop() {
            for edge in graph.edges_from(current) {
                let neighbor = edge.target;
                if Some(neighbor) == parent {
                    continue;
                }
                if visited[neighbor.index()] {
                    return true;
                }
                visited[neighbor.index()] = true;
                stack.push((neighbor, Some(current)));
            }
        }
    }

    false
}
