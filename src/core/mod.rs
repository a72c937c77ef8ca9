//! Core action and reducer types.
//!
//! This module contains the pure functional core:
//! - Actions via the `Action` trait
//! - States via the `State` trait
//! - Reducers computing the next state from a state and an action
//!
//! Nothing in here performs I/O or holds mutable state.

mod action;
mod error;
mod reducer;
mod state;

pub use action::Action;
pub use error::ReduceError;
pub use reducer::{Reducer, ReducerFn};
pub use state::State;
