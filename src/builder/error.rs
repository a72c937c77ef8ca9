//! Build errors for stores and dispatch tables.

use thiserror::Error;

/// Errors that can occur when building stores and dispatch tables.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Reducer not specified. Call .reducer(reducer) before .build()")]
    MissingReducer,

    #[error("retain_states requires record_history; snapshots are keyed by history node")]
    RetentionWithoutHistory,

    #[error("No handler for action kind(s): {}", .kinds.join(", "))]
    MissingHandlers { kinds: Vec<String> },

    #[error("Action kind '{kind}' is not one of the declared kinds")]
    UnknownKind { kind: String },

    #[error("Action kind '{kind}' has more than one handler")]
    DuplicateHandler { kind: String },
}
