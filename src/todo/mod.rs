//! Todo list domain: the reference set of actions and its reducer.
//!
//! Removal by index uses the reported-error policy: an index outside the
//! list yields [`ReduceError::IndexOutOfRange`](crate::core::ReduceError)
//! and the list is left unchanged.

mod reducer;

pub use reducer::{todo_reducer, TodoReducer};

use serde::{Deserialize, Serialize};

crate::action_enum! {
    /// Requests to change a [`TodoState`].
    pub enum TodoAction {
        /// Append an item to the end of the list.
        Add(String),
        /// Clear the list.
        RemoveAll as "Remove All",
        /// Remove the item at a zero-based position.
        RemoveOne(usize) as "Remove One",
    }
}

/// Ordered list of todo items.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct TodoState {
    pub todos: Vec<String>,
}

impl TodoState {
    pub fn new<I, T>(todos: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            todos: todos.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}
