use crate::error::SkeinError;
use crate::graph::WeightedGraph;

fn reference_graph() -> WeightedGraph {
    let mut graph = WeightedGraph::new();
    for label in ["A", "B", "C", "D"] {
        graph.add_node(label);
    }
    graph.add_edge("A", "B", 3).unwrap();
    graph.add_edge("B", "D", 4).unwrap();
    graph.add_edge("C", "D", 5).unwrap();
    graph.add_edge("A", "C", 1).unwrap();
    graph.add_edge("B", "C", 2).unwrap();
    graph
}

#[test]
fn test_reference_graph_tree_weight() {
    let tree = reference_graph().minimum_spanning_tree().unwrap();
    // A-C=1, B-C=2, B-D=4.
    assert_eq!(tree.total_weight(), 7);
    assert_eq!(tree.node_count(), 4);
    assert_eq!(tree.edge_count(), 3);
}

#[test]
fn test_tree_is_acyclic_and_spanning() {
    let graph = reference_graph();
    let tree = graph.minimum_spanning_tree().unwrap();

    assert!(!tree.has_cycle());
    assert_eq!(tree.edge_count(), tree.node_count() - 1);
    for label in graph.node_labels() {
        assert!(tree.contains_node(label));
    }
}

#[test]
fn test_empty_graph_is_an_error() {
    let graph = WeightedGraph::new();
    let err = graph.minimum_spanning_tree().unwrap_err();
    assert!(matches!(err, SkeinError::EmptyGraph));
}

#[test]
fn test_single_node_graph() {
    let mut graph = WeightedGraph::new();
    graph.add_node("Only");

    let tree = graph.minimum_spanning_tree().unwrap();
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.edge_count(), 0);
    assert!(tree.contains_node("Only"));
}

#[test]
fn test_disconnected_graph_spans_start_component() {
    let mut graph = WeightedGraph::new();
    for label in ["A", "B", "X", "Y"] {
        graph.add_node(label);
    }
    graph.add_edge("A", "B", 1).unwrap();
    graph.add_edge("X", "Y", 2).unwrap();

    // Growth starts at "A" (smallest label), so only that component is
    // spanned; disconnection is not an error.
    let tree = graph.minimum_spanning_tree().unwrap();
    assert_eq!(tree.node_count(), 2);
    assert!(tree.contains_node("A"));
    assert!(tree.contains_node("B"));
    assert!(!tree.contains_node("X"));
}

#[test]
fn test_heavier_parallel_route_is_excluded() {
    let mut graph = WeightedGraph::new();
    for label in ["A", "B", "C"] {
        graph.add_node(label);
    }
    graph.add_edge("A", "B", 1).unwrap();
    graph.add_edge("B", "C", 1).unwrap();
    graph.add_edge("A", "C", 10).unwrap();

    let tree = graph.minimum_spanning_tree().unwrap();
    assert_eq!(tree.total_weight(), 2);
    assert_eq!(tree.edge_count(), 2);
}

#[test]
fn test_tree_shape_is_deterministic_under_ties() {
    // All edges weigh the same, so tree shape depends entirely on the
    // deterministic start node and insertion-order tie-breaking.
    let build = || {
        let mut graph = WeightedGraph::new();
        for label in ["A", "B", "C", "D"] {
            graph.add_node(label);
        }
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("B", "C", 1).unwrap();
        graph.add_edge("C", "D", 1).unwrap();
        graph.add_edge("D", "A", 1).unwrap();
        graph.minimum_spanning_tree().unwrap()
    };

    let first = build();
    let first_labels: Vec<String> = first.node_labels().map(str::to_string).collect();
    for _ in 0..10 {
        let tree = build();
        let labels: Vec<String> = tree.node_labels().map(str::to_string).collect();
        assert_eq!(labels, first_labels);
        assert_eq!(tree.total_weight(), first.total_weight());
    }
}
