//! Linked history of applied actions.
//!
//! Nodes live in an arena ([`History`]) and refer to each other through
//! [`NodeId`]s, so `previous`/`next` links never form ownership cycles.
//! Every chain is acyclic and its `previous` links end at a root.
//!
//! Mutation goes through `&mut History`, which means a reader can never see
//! a node whose links are half written. Share a history across threads by
//! wrapping it in the owner's lock of choice.

mod arena;
mod error;
mod iter;
mod node;

pub use arena::History;
pub use error::HistoryError;
pub use iter::{BackwardIter, ForwardIter, Walk};
pub use node::{HistoryNode, NodeId};
