//! Integrity violations and preflight rejections.

use crate::core::ReduceError;
use crate::history::NodeId;
use thiserror::Error;

/// Broken structure found while verifying a history.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LinkViolation {
    #[error("Node {node} points back to missing node {target}")]
    DanglingPrevious { node: NodeId, target: NodeId },

    #[error("Node {node} points forward to missing node {target}")]
    DanglingNext { node: NodeId, target: NodeId },

    /// `node.previous == target` but `target.next != node`.
    #[error("Node {node} follows {target}, but {target} does not lead to it")]
    BrokenForwardLink { node: NodeId, target: NodeId },

    /// `node.next == target` but `target.previous != node`.
    #[error("Node {node} leads to {target}, but {target} does not follow it")]
    BrokenBackLink { node: NodeId, target: NodeId },

    /// Following `previous` from this node never reaches a root.
    #[error("Chain ending at node {node} does not reach a root")]
    UnterminatedChain { node: NodeId },
}

/// One action rejected during a dry run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Action {position} ('{kind}') rejected: {error}")]
pub struct PreflightError {
    /// Zero-based position of the action in the batch.
    pub position: usize,
    pub kind: &'static str,
    pub error: ReduceError,
}
