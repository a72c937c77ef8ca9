//! History errors.

use super::node::NodeId;
use thiserror::Error;

/// Errors that can occur when addressing or linking history nodes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HistoryError {
    /// The id was issued by a different history.
    #[error("Node {node} belongs to another history")]
    ForeignNode { node: NodeId },

    /// The id does not name a live node (never created, or discarded).
    #[error("Node {node} does not exist")]
    UnknownNode { node: NodeId },

    /// The node already has a successor; `next` is written only once.
    #[error("Node {node} already has a successor {successor}")]
    SuccessorExists { node: NodeId, successor: NodeId },

    /// The sequence counter cannot advance any further.
    #[error("History sequence counter is exhausted")]
    SequenceExhausted,
}
