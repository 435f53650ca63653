//! Prim-style minimum spanning tree construction
//!
//! Grows a tree outward from a deterministically chosen start node,
//! always taking the cheapest frontier edge whose far endpoint is still
//! outside the tree. Edges already inside the tree when popped are
//! simply skipped (lazy invalidation, same scheme as Dijkstra).

use crate::error::{Result, SkeinError};
use crate::graph::frontier::PriorityFrontier;
use crate::graph::types::Edge;
use crate::graph::WeightedGraph;

/// Build a minimum spanning tree over the component reachable from the
/// lexicographically smallest label, returned as a new graph.
///
/// The start node is chosen by smallest label rather than at random so
/// the resulting tree shape is reproducible when equal-weight edges
/// leave a choice. Fails with `EmptyGraph` on a graph with no nodes; a
/// disconnected graph is not an error, the tree simply spans only the
/// start node's component.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub(crate) fn minimum_spanning_tree(graph: &WeightedGraph) -> Result<WeightedGraph> {
    let start = graph
        .node_ids()
        .min_by_key(|&id| graph.label(id))
        .ok_or(SkeinError::EmptyGraph)?;

    let mut tree = WeightedGraph::new();
    let mut in_tree = vec![false; graph.node_count()];
    let mut frontier: PriorityFrontier<Edge> = PriorityFrontier::new();

    tree.add_node(graph.label(start));
    in_tree[start.index()] = true;
    for &edge in graph.edges_from(start) {
        frontier.push(edge.weight.value(), edge);
    }

    while tree.node_count() < graph.node_count() {
        let Some((_, edge)) = frontier.pop_min() else {
            // Frontier exhausted: the remaining nodes are unreachable.
            tracing::debug!(spanned = tree.node_count(), "graph is disconnected");
            break;
        };

        if in_tree[edge.target.index()] {
            continue;
        }
        in_tree[edge.target.index()] = true;

        tree.add_node(graph.label(edge.target));
        tree.insert_edge(graph.label(edge.source), graph.label(edge.target), edge.weight)?;

        for &next in graph.edges_from(edge.target) {
            if !in_tree[next.target.index()] {
                frontier.push(next.weight.value(), next);
            }
        }
    }

    Ok(tree)
}

#[cfg(test)]
mod tests;
