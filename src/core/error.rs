//! Reducer errors.

use thiserror::Error;

/// Errors a reducer reports instead of producing a new state.
///
/// In both cases the input state is left as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReduceError {
    /// No handler exists for this kind of action.
    #[error("Unhandled action kind '{kind}'")]
    UnhandledActionKind { kind: String },

    /// An index-bearing action pointed outside the current state.
    #[error("Index {index} out of range for {len} item(s)")]
    IndexOutOfRange { index: usize, len: usize },
}
