//! Dijkstra shortest-path computation
//!
//! Classic relaxation over a min-heap frontier. Instead of decrease-key,
//! repeated relaxation pushes duplicate entries and stale ones are
//! discarded at extraction by checking the settled flags; correctness
//! relies on non-negative weights, which the edge type guarantees.

use crate::graph::frontier::PriorityFrontier;
use crate::graph::path::build_path;
use crate::graph::types::NodeId;
use crate::graph::WeightedGraph;

/// Compute the shortest path from `source` to `target` and return it as
/// a source-to-target label sequence. An unreachable target yields an
/// empty sequence.
#[tracing::instrument(skip(graph))]
pub(crate) fn shortest_path(graph: &WeightedGraph, source: NodeId, target: NodeId) -> Vec<String> {
    let node_count = graph.node_count();

    // Best-known distance per node, u64::MAX standing in for infinity.
    let mut distances: Vec<u64> = vec![u64::MAX; node_count];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; node_count];
    let mut settled = vec![false; node_count];

    let mut frontier = PriorityFrontier::new();
    distances[source.index()] = 0;
    frontier.push(0, source);

    while let Some((distance, current)) = frontier.pop_min() {
        if settled[current.index()] {
            // Stale entry from an earlier relaxation.
            continue;
        }
        settled[current.index()] = true;

        if current == target {
            // Every remaining frontier entry is at least this far away.
            break;
        }

        for edge in graph.edges_from(current) {
            let neighbor = edge.target;
            if settled[neighbor.index()] {
                continue;
            }

            let candidate = distance.saturating_add(edge.weight.value());
            if candidate < distances[neighbor.index()] {
                distances[neighbor.index()] = candidate;
                predecessors[neighbor.index()] = Some(current);
                frontier.push(candidate, neighbor);
            }
        }
    }

    tracing::debug!(
        settled = settled.iter().filter(|&&s| s).count(),
        reached = settled[target.index()],
        "dijkstra finished"
    );

    build_path(graph, source, target, &predecessors)
}
