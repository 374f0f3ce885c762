//! Error types for graph construction, traversal and ordering.

use thiserror::Error;

use crate::{Label, NumNodes};

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur during graph operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// Malformed input such as a broken edge-code string or a repeated vertex label
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Human-readable description of what was wrong
        reason: String,
    },

    /// A bounded traversal container was full
    #[error("Traversal container exceeded its capacity of {capacity} nodes")]
    CapacityExceeded {
        /// Capacity of the container
        capacity: usize,
    },

    /// Topological ordering was requested for a graph containing a cycle
    #[error("Cycle detected: {unranked} nodes could not be ordered")]
    CycleDetected {
        /// Number of nodes that never reached in-degree zero
        unranked: NumNodes,
    },

    /// An allocation could not be satisfied
    #[error("Out of memory while reserving {requested} elements")]
    OutOfMemory {
        /// Number of elements that were requested
        requested: usize,
    },
}

impl GraphError {
    /// Creates an invalid argument error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates an invalid argument error for a label that does not name any vertex
    pub fn unknown_label(label: Label) -> Self {
        Self::invalid_argument(format!("label '{label}' does not name a vertex"))
    }

    /// Creates a capacity exceeded error
    pub fn capacity_exceeded(capacity: usize) -> Self {
        Self::CapacityExceeded { capacity }
    }

    /// Creates a cycle detected error
    pub fn cycle(unranked: NumNodes) -> Self {
        Self::CycleDetected { unranked }
    }

    /// Creates an out of memory error
    pub fn out_of_memory(requested: usize) -> Self {
        Self::OutOfMemory { requested }
    }
}
