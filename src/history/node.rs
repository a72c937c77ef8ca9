//! History nodes and their identifiers.

use crate::core::Action;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable address of a node inside one [`History`](super::History).
///
/// Ids carry the identity of the history that issued them, so an id from
/// another history is rejected rather than silently resolving to an
/// unrelated node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId {
    pub(crate) history: Uuid,
    pub(crate) index: usize,
}

impl NodeId {
    /// Position of the node in its arena, in creation order.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// One applied action, linked to its neighbours by id.
///
/// `previous` is fixed at creation. `next` is written at most once, when a
/// successor is appended.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct HistoryNode<A: Action> {
    pub(crate) action: A,
    pub(crate) previous: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
    pub(crate) sequence: u64,
    pub(crate) applied_at: DateTime<Utc>,
}

impl<A: Action> HistoryNode<A> {
    pub fn action(&self) -> &A {
        &self.action
    }

    pub fn previous(&self) -> Option<NodeId> {
        self.previous
    }

    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    /// Whether this node starts a chain.
    pub fn is_root(&self) -> bool {
        self.previous.is_none()
    }

    /// Monotonic counter across the whole history, starting at 1.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// When the node was appended.
    pub fn applied_at(&self) -> DateTime<Utc> {
        self.applied_at
    }
}
