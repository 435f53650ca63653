//! Diagnostic rendering of graph adjacency
//!
//! Supports two output formats:
//! - human: readable one-line-per-node adjacency listing
//! - json: stable, machine-readable JSON
//!
//! Rendering consumes the read-only `connections()` snapshot and has no
//! effect on graph semantics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkeinError};
use crate::graph::WeightedGraph;

/// Output format for diagnostic rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = SkeinError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(SkeinError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// One outgoing connection in a rendered snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub from: String,
    pub to: String,
    pub weight: u64,
}

/// All outgoing connections of a single node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConnections {
    pub label: String,
    pub edges: Vec<ConnectionRecord>,
}

/// Take a read-only snapshot of the adjacency store, in node
/// registration order.
pub fn adjacency_snapshot(graph: &WeightedGraph) -> Vec<NodeConnections> {
    graph
        .connections()
        .map(|(label, edges)| NodeConnections {
            label: label.to_string(),
            edges: edges
                .iter()
                .map(|edge| ConnectionRecord {
                    from: graph.label(edge.source).to_string(),
                    to: graph.label(edge.target).to_string(),
                    weight: edge.weight.value(),
                })
                .collect(),
        })
        .collect()
}

/// Render the adjacency relationships of a graph for debugging.
///
/// Human output has one line per node:
/// `A is connected with: A -> B (3) | A -> C (1)`
pub fn render_adjacency(graph: &WeightedGraph, format: OutputFormat) -> Result<String> {
    let snapshot = adjacency_snapshot(graph);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&snapshot)?),
        OutputFormat::Human => {
            let mut out = String::new();
            for node in &snapshot {
                out.push_str(&node.label);
                out.push_str(" is connected with:");
                let rendered: Vec<String> = node
                    .edges
                    .iter()
                    .map(|edge| format!("{} -> {} ({})", edge.from, edge.to, edge.weight))
                    .collect();
                if !rendered.is_empty() {
                    out.push(' ');
                    out.push_str(&rendered.join(" | "));
                }
                out.push('\n');
            }
            Ok(out)
        }
    }
}
