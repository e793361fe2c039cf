//! Error types reported by graph operations.
//!
//! Only operations with preconditions on their node arguments can fail, and
//! they all fail the same way: one of the named nodes is not in the graph.
//! The failing operation is recorded so that callers can tell the cases apart
//! without matching on message text.

use std::fmt;

use thiserror::Error;

/// Graph operations that validate their node arguments.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `Graph::insert_edge`
    InsertEdge,
    /// `Graph::replace_node`
    ReplaceNode,
    /// `Graph::merge_replace_node`
    MergeReplaceNode,
    /// `Graph::erase_edge`
    EraseEdge,
    /// `Graph::is_connected`
    IsConnected,
    /// `Graph::weights`
    Weights,
    /// `Graph::connections`
    Connections,
}

impl Operation {
    /// Name of the operation as it appears in error messages.
    pub fn name(&self) -> &'static str {
        match *self {
            Operation::InsertEdge => "insert_edge",
            Operation::ReplaceNode => "replace_node",
            Operation::MergeReplaceNode => "merge_replace_node",
            Operation::EraseEdge => "erase_edge",
            Operation::IsConnected => "is_connected",
            Operation::Weights => "weights",
            Operation::Connections => "connections",
        }
    }

    /// Human-readable description of the violated precondition.
    pub fn explanation(&self) -> &'static str {
        match *self {
            Operation::InsertEdge => "when either src or dst node does not exist",
            Operation::ReplaceNode => "on a node that doesn't exist",
            Operation::MergeReplaceNode => {
                "on old or new data if they don't exist in the graph"
            }
            Operation::EraseEdge => "on src or dst if they don't exist in the graph",
            Operation::IsConnected => "if src or dst node don't exist in the graph",
            Operation::Weights => "if src or dst node don't exist in the graph",
            Operation::Connections => "if src doesn't exist in the graph",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised by graph operations.
///
/// A failed operation leaves the graph exactly as it was.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node argument required to be present in the graph was missing.
    #[error("Cannot call gdwg::graph<N, E>::{} {}", .0.name(), .0.explanation())]
    PreconditionViolation(Operation),
}

impl GraphError {
    /// Create a precondition violation for the given operation.
    pub fn precondition(operation: Operation) -> Self {
        GraphError::PreconditionViolation(operation)
    }

    /// The operation that failed.
    pub fn operation(&self) -> Operation {
        match *self {
            GraphError::PreconditionViolation(operation) => operation,
        }
    }
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, GraphError>;
