//! Error types for skein
//!
//! All public-facing errors indicate caller misuse of the API, not
//! transient conditions; they are returned to the caller without retry
//! or recovery. Unreachability between two nodes is NOT an error — it
//! is reported as an empty path.

use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum SkeinError {
    #[error("node not found: {label}")]
    NodeNotFound { label: String },

    #[error("invalid edge weight: {weight} (weights must be non-negative)")]
    InvalidWeight { weight: i64 },

    #[error("cannot compute a spanning tree of an empty graph")]
    EmptyGraph,

    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SkeinError {
    /// Create an error for a label absent from the node registry
    pub fn node_not_found(label: impl Into<String>) -> Self {
        SkeinError::NodeNotFound {
            label: label.into(),
        }
    }

    /// Create an error for a negative caller-supplied edge weight
    pub fn invalid_weight(weight: i64) -> Self {
        SkeinError::InvalidWeight { weight }
    }
}

/// Result type alias for skein operations
pub type Result<T> = std::result::Result<T, SkeinError>;
