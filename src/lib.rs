//! Actionlog: pure reducers over discriminated-union actions, with a
//! backward-traversable history of every action applied.
//!
//! The core is pure: a reducer maps a state and an action to the next state
//! and never touches the old one. Applied actions are recorded as nodes in
//! an arena-backed linked history that can be walked back to its root, and
//! a store ties the two together with undo and redo.
//!
//! # Core Concepts
//!
//! - **Action**: closed set of tagged variants via the `Action` trait
//! - **Reducer**: total, deterministic transition function
//! - **History**: arena of nodes linked by id, iterated newest first
//! - **Store**: imperative shell that reduces, records, and time-travels
//!
//! # Example
//!
//! ```rust
//! use actionlog::store::Store;
//! use actionlog::todo::{TodoAction, TodoReducer, TodoState};
//! use actionlog::Action;
//!
//! let mut store = Store::new(TodoReducer);
//! store.dispatch(TodoAction::Add("buy milk".into())).unwrap();
//! store.dispatch(TodoAction::Add("walk dog".into())).unwrap();
//! store.dispatch(TodoAction::RemoveOne(0)).unwrap();
//! assert_eq!(store.current_state(), &TodoState::new(["walk dog"]));
//!
//! // Out-of-range removals are reported and change nothing.
//! assert!(store.dispatch(TodoAction::RemoveOne(7)).is_err());
//!
//! let kinds: Vec<_> = store.replay().map(|action| action.kind()).collect();
//! assert_eq!(kinds, vec!["Remove One", "Add", "Add"]);
//! ```

pub mod builder;
pub mod core;
pub mod history;
pub mod integrity;
pub mod store;
pub mod todo;

// Re-export commonly used types
pub use self::core::{Action, ReduceError, Reducer, State};
pub use history::{History, HistoryNode, NodeId};
pub use store::{Store, StoreError};
