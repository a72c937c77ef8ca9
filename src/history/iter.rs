//! Lazy traversal over history chains.
//!
//! A walk is a two-state cursor: active on a node, or exhausted. Once
//! exhausted it stays exhausted and every further `next()` returns `None`.
//! Walks borrow the history and cannot be restarted; build a new one to
//! traverse again.

use super::arena::History;
use super::node::{HistoryNode, NodeId};
use crate::core::Action;
use std::iter::FusedIterator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cursor {
    Active(NodeId),
    Exhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Backward,
    Forward,
}

/// Single-pass walk over `(id, node)` pairs along one chain.
#[derive(Debug)]
pub struct Walk<'a, A: Action> {
    history: &'a History<A>,
    cursor: Cursor,
    direction: Direction,
    // Upper bound on steps; a tampered (cyclic) history cannot loop forever.
    remaining: usize,
}

impl<'a, A: Action> Walk<'a, A> {
    /// Walk from `start` along `previous` links.
    pub(crate) fn backward(history: &'a History<A>, start: Option<NodeId>) -> Self {
        Self::new(history, start, Direction::Backward)
    }

    /// Walk from `start` along `next` links.
    pub(crate) fn forward(history: &'a History<A>, start: Option<NodeId>) -> Self {
        Self::new(history, start, Direction::Forward)
    }

    fn new(history: &'a History<A>, start: Option<NodeId>, direction: Direction) -> Self {
        Self {
            history,
            cursor: start.map_or(Cursor::Exhausted, Cursor::Active),
            direction,
            remaining: history.capacity_used(),
        }
    }

    /// Whether the walk has reached its terminal state.
    pub fn is_exhausted(&self) -> bool {
        self.cursor == Cursor::Exhausted
    }
}

impl<'a, A: Action> Iterator for Walk<'a, A> {
    type Item = (NodeId, &'a HistoryNode<A>);

    fn next(&mut self) -> Option<Self::Item> {
        let Cursor::Active(id) = self.cursor else {
            return None;
        };

        let node = match self.history.node(id) {
            Ok(node) if self.remaining > 0 => node,
            _ => {
                self.cursor = Cursor::Exhausted;
                return None;
            }
        };
        self.remaining -= 1;

        let following = match self.direction {
            Direction::Backward => node.previous,
            Direction::Forward => node.next,
        };
        self.cursor = following.map_or(Cursor::Exhausted, Cursor::Active);

        Some((id, node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor {
            Cursor::Active(_) => (0, Some(self.remaining)),
            Cursor::Exhausted => (0, Some(0)),
        }
    }
}

impl<A: Action> FusedIterator for Walk<'_, A> {}

/// Actions from a starting node back to its root, most recent first.
///
/// # Example
///
/// ```rust
/// use actionlog::history::History;
/// use actionlog::todo::TodoAction;
///
/// let mut history = History::new();
/// let first = history.append(None, TodoAction::RemoveAll).unwrap();
///
/// let mut iter = history.iter_back(Some(first)).unwrap();
/// assert_eq!(iter.next(), Some(&TodoAction::RemoveAll));
/// assert_eq!(iter.next(), None);
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Debug)]
pub struct BackwardIter<'a, A: Action> {
    walk: Walk<'a, A>,
}

impl<'a, A: Action> BackwardIter<'a, A> {
    pub(crate) fn new(walk: Walk<'a, A>) -> Self {
        Self { walk }
    }

    /// Yield the nodes themselves instead of their actions.
    pub fn nodes(self) -> Walk<'a, A> {
        self.walk
    }

    pub fn is_exhausted(&self) -> bool {
        self.walk.is_exhausted()
    }
}

impl<'a, A: Action> Iterator for BackwardIter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next().map(|(_, node)| &node.action)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.walk.size_hint()
    }
}

impl<A: Action> FusedIterator for BackwardIter<'_, A> {}

/// Actions from a starting node along `next` links, oldest first.
#[derive(Debug)]
pub struct ForwardIter<'a, A: Action> {
    walk: Walk<'a, A>,
}

impl<'a, A: Action> ForwardIter<'a, A> {
    pub(crate) fn new(walk: Walk<'a, A>) -> Self {
        Self { walk }
    }

    /// Yield the nodes themselves instead of their actions.
    pub fn nodes(self) -> Walk<'a, A> {
        self.walk
    }
}

impl<'a, A: Action> Iterator for ForwardIter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next().map(|(_, node)| &node.action)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.walk.size_hint()
    }
}

impl<A: Action> FusedIterator for ForwardIter<'_, A> {}
