//! Imperative shell around the pure core.
//!
//! A [`Store`] owns a reducer, the current state, and the history of the
//! actions applied to reach it. It is where reducing and recording meet:
//! the reducer stays pure and the history stays a plain arena, while the
//! store decides what gets appended, undone, or discarded.

mod config;
mod dispatch;
mod error;

pub use config::StoreConfig;
pub use dispatch::Store;
pub use error::StoreError;
