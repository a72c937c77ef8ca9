//! Store configuration.

use serde::{Deserialize, Serialize};

/// Settings controlling what a [`Store`](super::Store) keeps around.
///
/// Missing fields deserialize to their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Append every applied action to the history. Without it, undo and
    /// replay have nothing to work with.
    pub record_history: bool,

    /// Keep the state produced at every node. When off, earlier states are
    /// rebuilt by re-running the reducer from the initial state.
    pub retain_states: bool,

    /// Number of history nodes to reserve up front.
    pub capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            record_history: true,
            retain_states: true,
            capacity: 0,
        }
    }
}
