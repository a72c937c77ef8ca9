//! Arena that owns every node of a history.

use super::error::HistoryError;
use super::iter::{BackwardIter, ForwardIter, Walk};
use super::node::{HistoryNode, NodeId};
use crate::core::Action;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::trace;
use uuid::Uuid;

/// Owner of a set of linked action chains.
///
/// Nodes are addressed by [`NodeId`] and link to each other by id, never by
/// reference. A history may hold several independent chains: every
/// `append(None, ..)` starts a new root. Discarded slots are never reused,
/// so an id stays either valid or dead for the life of the history.
///
/// # Example
///
/// ```rust
/// use actionlog::history::History;
/// use actionlog::todo::TodoAction;
///
/// let mut history = History::new();
/// let a = history.append(None, TodoAction::Add("a".into())).unwrap();
/// let b = history.append(Some(a), TodoAction::RemoveAll).unwrap();
///
/// let actions: Vec<_> = history.iter_back(Some(b)).unwrap().collect();
/// assert_eq!(actions, vec![&TodoAction::RemoveAll, &TodoAction::Add("a".into())]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "", from = "StoredHistory<A>")]
pub struct History<A: Action> {
    id: Uuid,
    slots: Vec<Option<HistoryNode<A>>>,
    // Derived from `slots`; recomputed on load.
    #[serde(skip_serializing)]
    live: usize,
    sequence: u64,
}

/// Serialized form of a [`History`]; the live count is not trusted.
#[derive(Deserialize)]
#[serde(bound = "")]
struct StoredHistory<A: Action> {
    id: Uuid,
    slots: Vec<Option<HistoryNode<A>>>,
    sequence: u64,
}

impl<A: Action> From<StoredHistory<A>> for History<A> {
    fn from(stored: StoredHistory<A>) -> Self {
        let live = stored.slots.iter().flatten().count();
        Self {
            id: stored.id,
            slots: stored.slots,
            live,
            sequence: stored.sequence,
        }
    }
}

impl<A: Action> Default for History<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action> History<A> {
    /// Create an empty history with a fresh identity.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty history with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            slots: Vec::with_capacity(capacity),
            live: 0,
            sequence: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Look up a live node.
    pub fn node(&self, id: NodeId) -> Result<&HistoryNode<A>, HistoryError> {
        self.check_owner(id)?;
        self.slots
            .get(id.index)
            .and_then(Option::as_ref)
            .ok_or(HistoryError::UnknownNode { node: id })
    }

    /// Whether `id` names a live node of this history.
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_ok()
    }

    /// Append `action` after `previous`, or start a new chain when
    /// `previous` is `None`.
    ///
    /// The predecessor's `next` link is filled in before this returns.
    /// Appending after a node that already has a successor fails with
    /// [`HistoryError::SuccessorExists`]; discard the suffix first.
    pub fn append(&mut self, previous: Option<NodeId>, action: A) -> Result<NodeId, HistoryError> {
        if let Some(prev) = previous {
            if let Some(successor) = self.node(prev)?.next {
                return Err(HistoryError::SuccessorExists {
                    node: prev,
                    successor,
                });
            }
        }

        let sequence = self
            .sequence
            .checked_add(1)
            .ok_or(HistoryError::SequenceExhausted)?;
        let id = NodeId {
            history: self.id,
            index: self.slots.len(),
        };
        self.sequence = sequence;
        trace!(
            node = %id,
            previous = ?previous.map(|p| p.index),
            kind = action.kind(),
            "appending history node"
        );

        self.slots.push(Some(HistoryNode {
            action,
            previous,
            next: None,
            sequence,
            applied_at: Utc::now(),
        }));
        self.live += 1;

        if let Some(prev) = previous {
            self.node_mut(prev)?.next = Some(id);
        }

        Ok(id)
    }

    /// Discard `from` and every node after it in its chain.
    ///
    /// The predecessor of `from`, if any, becomes the end of the chain again
    /// and can accept a new successor. Returns the number of nodes removed.
    pub fn discard_from(&mut self, from: NodeId) -> Result<usize, HistoryError> {
        let previous = self.node(from)?.previous;
        if let Some(prev) = previous {
            self.node_mut(prev)?.next = None;
        }

        let mut removed = 0;
        let mut cursor = Some(from);
        while let Some(id) = cursor {
            match self.slots.get_mut(id.index).and_then(Option::take) {
                Some(node) => {
                    removed += 1;
                    cursor = node.next;
                }
                None => cursor = None,
            }
        }
        self.live = self.live.saturating_sub(removed);

        trace!(node = %from, removed, "discarded history suffix");
        Ok(removed)
    }

    /// Follow `previous` links from `id` to the start of its chain.
    pub fn root_of(&self, id: NodeId) -> Result<NodeId, HistoryError> {
        self.node(id)?;
        let mut root = id;
        for (node_id, _) in Walk::backward(self, Some(id)) {
            root = node_id;
        }
        Ok(root)
    }

    /// Follow `next` links from `id` to the end of its chain.
    pub fn tip_of(&self, id: NodeId) -> Result<NodeId, HistoryError> {
        self.node(id)?;
        let mut tip = id;
        for (node_id, _) in Walk::forward(self, Some(id)) {
            tip = node_id;
        }
        Ok(tip)
    }

    /// Iterate actions from `start` back to its root, newest first.
    ///
    /// `None` yields an iterator that is exhausted from the start.
    pub fn iter_back(&self, start: Option<NodeId>) -> Result<BackwardIter<'_, A>, HistoryError> {
        if let Some(id) = start {
            self.node(id)?;
        }
        Ok(BackwardIter::new(Walk::backward(self, start)))
    }

    /// Iterate actions from `start` forward along `next` links, oldest first.
    pub fn iter_forward(&self, start: Option<NodeId>) -> Result<ForwardIter<'_, A>, HistoryError> {
        if let Some(id) = start {
            self.node(id)?;
        }
        Ok(ForwardIter::new(Walk::forward(self, start)))
    }

    /// Live nodes with their ids, in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &HistoryNode<A>)> + '_ {
        self.slots.iter().enumerate().filter_map(move |(index, slot)| {
            slot.as_ref().map(|node| {
                (
                    NodeId {
                        history: self.id,
                        index,
                    },
                    node,
                )
            })
        })
    }

    /// Number of slots ever allocated, live or discarded.
    pub(crate) fn capacity_used(&self) -> usize {
        self.slots.len()
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut HistoryNode<A>, HistoryError> {
        self.check_owner(id)?;
        self.slots
            .get_mut(id.index)
            .and_then(Option::as_mut)
            .ok_or(HistoryError::UnknownNode { node: id })
    }

    fn check_owner(&self, id: NodeId) -> Result<(), HistoryError> {
        if id.history == self.id {
            Ok(())
        } else {
            Err(HistoryError::ForeignNode { node: id })
        }
    }
}
