//! Store errors.

use crate::core::ReduceError;
use crate::history::HistoryError;
use thiserror::Error;

/// Errors returned by [`Store`](super::Store) operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The reducer rejected the action; nothing was recorded.
    #[error("Action rejected: {0}")]
    Rejected(#[from] ReduceError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),
}
