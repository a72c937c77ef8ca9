//! Builder API for ergonomic store and reducer construction.
//!
//! This module provides fluent builders and macros for declaring actions,
//! assembling reducers from per-kind handlers, and configuring stores.

pub mod error;
pub mod macros;
pub mod store;
pub mod table;

pub use error::BuildError;
pub use store::StoreBuilder;
pub use table::{DispatchTable, DispatchTableBuilder};

use crate::core::{Action, ReduceError, Reducer, ReducerFn, State};
use crate::store::Store;

/// Create a store from a closure reducer, starting at `S::default()`.
///
/// # Example
///
/// ```
/// use actionlog::action_enum;
/// use actionlog::builder::store_from_fn;
///
/// action_enum! {
///     enum Step {
///         Forward(i32),
///         Home,
///     }
/// }
///
/// let mut store = store_from_fn(|position: &i32, step: &Step| {
///     Ok(match step {
///         Step::Forward(n) => position + n,
///         Step::Home => 0,
///     })
/// });
///
/// store.dispatch(Step::Forward(3)).unwrap();
/// assert_eq!(*store.current_state(), 3);
/// ```
pub fn store_from_fn<S, A, F>(reduce: F) -> Store<ReducerFn<S, A>>
where
    S: State,
    A: Action,
    F: Fn(&S, &A) -> Result<S, ReduceError> + Send + Sync + 'static,
{
    Store::new(ReducerFn::new(reduce))
}

/// Create a dispatch table builder for the reducer `R` handles.
///
/// # Example
///
/// ```
/// use actionlog::builder::table_for;
/// use actionlog::todo::{TodoReducer, TodoState};
///
/// let result = table_for::<TodoReducer>()
///     .on("Remove All", |_, _| Ok(TodoState::default()))
///     .build();
/// assert!(result.is_err());
/// ```
pub fn table_for<R: Reducer>() -> DispatchTableBuilder<R::State, R::Action> {
    DispatchTableBuilder::new()
}
