//! Store that applies actions through a reducer and records them.

use super::config::StoreConfig;
use super::error::StoreError;
use crate::core::{Action, Reducer};
use crate::history::{BackwardIter, History, HistoryError, NodeId, Walk};
use crate::integrity::{self, PreflightError};
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, warn};

/// Holds the current state, the reducer, and the history of applied actions.
///
/// The history of a store is always a single chain. Undo moves the head
/// back along `previous` links and redo follows `next`; dispatching while
/// the head is not at the tip discards the undone suffix first.
///
/// # Example
///
/// ```rust
/// use actionlog::store::Store;
/// use actionlog::todo::{TodoAction, TodoReducer, TodoState};
///
/// let mut store = Store::new(TodoReducer);
/// store.dispatch(TodoAction::Add("buy milk".into())).unwrap();
/// store.dispatch(TodoAction::Add("walk dog".into())).unwrap();
///
/// store.undo().unwrap();
/// assert_eq!(store.current_state(), &TodoState::new(["buy milk"]));
///
/// store.redo().unwrap();
/// assert_eq!(store.current_state().len(), 2);
/// assert_eq!(store.replay().count(), 2);
/// ```
pub struct Store<R: Reducer> {
    reducer: R,
    config: StoreConfig,
    initial: R::State,
    current: R::State,
    history: History<R::Action>,
    root: Option<NodeId>,
    head: Option<NodeId>,
    snapshots: HashMap<NodeId, R::State>,
}

impl<R: Reducer> Store<R> {
    /// Create a store starting from `R::State::default()` with the default
    /// configuration.
    pub fn new(reducer: R) -> Self {
        Self::from_parts(reducer, R::State::default(), StoreConfig::default())
    }

    pub(crate) fn from_parts(reducer: R, initial: R::State, config: StoreConfig) -> Self {
        Self {
            reducer,
            history: History::with_capacity(config.capacity),
            snapshots: HashMap::new(),
            current: initial.clone(),
            initial,
            config,
            root: None,
            head: None,
        }
    }

    pub fn current_state(&self) -> &R::State {
        &self.current
    }

    pub fn initial_state(&self) -> &R::State {
        &self.initial
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn history(&self) -> &History<R::Action> {
        &self.history
    }

    /// Node of the most recently applied action that has not been undone.
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn reducer(&self) -> &R {
        &self.reducer
    }

    /// Apply an action.
    ///
    /// On rejection the state and history are left untouched and the
    /// reducer's error is returned.
    pub fn dispatch(&mut self, action: R::Action) -> Result<&R::State, StoreError> {
        let next = match self.reducer.reduce(&self.current, &action) {
            Ok(next) => next,
            Err(error) => {
                warn!(kind = action.kind(), %error, "action rejected");
                return Err(error.into());
            }
        };

        if self.config.record_history {
            self.discard_redo()?;
            let kind = action.kind();
            let id = self.history.append(self.head, action)?;
            if self.head.is_none() {
                self.root = Some(id);
            }
            if self.config.retain_states {
                self.snapshots.insert(id, next.clone());
            }
            self.head = Some(id);
            debug!(kind, node = %id, "dispatched action");
        } else {
            debug!(kind = action.kind(), "dispatched action without history");
        }

        self.current = next;
        Ok(&self.current)
    }

    /// Step back one action. Returns the undone action, or `None` when
    /// already at the initial state.
    pub fn undo(&mut self) -> Result<Option<R::Action>, StoreError> {
        let Some(head) = self.head else {
            return Ok(None);
        };

        let node = self.history.node(head)?;
        let previous = node.previous();
        let action = node.action().clone();

        self.current = self.state_at(previous)?;
        self.head = previous;
        debug!(kind = action.kind(), node = %head, "undid action");
        Ok(Some(action))
    }

    /// Re-apply the most recently undone action. Returns it, or `None` when
    /// there is nothing to redo.
    pub fn redo(&mut self) -> Result<Option<R::Action>, StoreError> {
        let Some(target) = self.redo_target()? else {
            return Ok(None);
        };

        let action = self.history.node(target)?.action().clone();
        self.current = self.state_at(Some(target))?;
        self.head = Some(target);
        debug!(kind = action.kind(), node = %target, "redid action");
        Ok(Some(action))
    }

    pub fn can_undo(&self) -> bool {
        self.head.is_some()
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.redo_target(), Ok(Some(_)))
    }

    /// Applied actions from the head back to the first, newest first.
    pub fn replay(&self) -> BackwardIter<'_, R::Action> {
        BackwardIter::new(Walk::backward(&self.history, self.head))
    }

    /// State right after `node` was applied; `None` means the initial state.
    ///
    /// Uses the retained snapshot when there is one, otherwise re-runs the
    /// reducer from the initial state along the chain.
    pub fn state_at(&self, node: Option<NodeId>) -> Result<R::State, StoreError> {
        let Some(node) = node else {
            return Ok(self.initial.clone());
        };
        if let Some(snapshot) = self.snapshots.get(&node) {
            return Ok(snapshot.clone());
        }

        let root = self.history.root_of(node)?;
        let mut state = self.initial.clone();
        for (id, entry) in Walk::forward(&self.history, Some(root)) {
            state = self.reducer.reduce(&state, entry.action())?;
            if id == node {
                return Ok(state);
            }
        }
        Err(HistoryError::UnknownNode { node }.into())
    }

    /// Dry-run `actions` against the current state, reporting every
    /// rejection instead of stopping at the first.
    pub fn preflight(
        &self,
        actions: &[R::Action],
    ) -> Validation<R::State, NonEmptyVec<PreflightError>> {
        integrity::preflight(&self.reducer, &self.current, actions)
    }

    fn redo_target(&self) -> Result<Option<NodeId>, HistoryError> {
        match self.head {
            Some(head) => Ok(self.history.node(head)?.next()),
            None => Ok(self.root),
        }
    }

    fn discard_redo(&mut self) -> Result<(), HistoryError> {
        let Some(stale) = self.redo_target()? else {
            return Ok(());
        };

        let removed = self.history.discard_from(stale)?;
        if self.head.is_none() {
            self.root = None;
        }
        let history = &self.history;
        self.snapshots.retain(|id, _| history.contains(*id));
        debug!(removed, "discarded undone actions");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ReduceError;
    use crate::todo::{TodoAction, TodoReducer, TodoState};
    use tracing_test::traced_test;

    fn add(text: &str) -> TodoAction {
        TodoAction::Add(text.to_string())
    }

    fn store_with(config: StoreConfig) -> Store<TodoReducer> {
        Store::from_parts(TodoReducer, TodoState::default(), config)
    }

    #[test]
    fn dispatch_applies_and_records() {
        let mut store = Store::new(TodoReducer);
        store.dispatch(add("a")).unwrap();
        store.dispatch(add("b")).unwrap();

        assert_eq!(store.current_state(), &TodoState::new(["a", "b"]));
        assert_eq!(store.history().len(), 2);
        assert!(store.head().is_some());
    }

    #[test]
    fn rejected_action_changes_nothing() {
        let mut store = Store::new(TodoReducer);
        store.dispatch(add("a")).unwrap();
        let head = store.head();

        let result = store.dispatch(TodoAction::RemoveOne(5));

        assert_eq!(
            result.map(|_| ()),
            Err(StoreError::Rejected(ReduceError::IndexOutOfRange {
                index: 5,
                len: 1
            }))
        );
        assert_eq!(store.current_state(), &TodoState::new(["a"]));
        assert_eq!(store.history().len(), 1);
        assert_eq!(store.head(), head);
    }

    #[test]
    fn replay_runs_newest_first() {
        let mut store = Store::new(TodoReducer);
        for text in ["A", "B", "C", "D"] {
            store.dispatch(add(text)).unwrap();
        }

        let replayed: Vec<_> = store.replay().cloned().collect();
        assert_eq!(replayed, vec![add("D"), add("C"), add("B"), add("A")]);
    }

    #[test]
    fn undo_and_redo_walk_the_chain() {
        let mut store = Store::new(TodoReducer);
        store.dispatch(add("a")).unwrap();
        store.dispatch(add("b")).unwrap();

        assert_eq!(store.undo().unwrap(), Some(add("b")));
        assert_eq!(store.current_state(), &TodoState::new(["a"]));
        assert_eq!(store.undo().unwrap(), Some(add("a")));
        assert_eq!(store.current_state(), &TodoState::default());
        assert_eq!(store.undo().unwrap(), None);
        assert!(!store.can_undo());

        assert_eq!(store.redo().unwrap(), Some(add("a")));
        assert_eq!(store.redo().unwrap(), Some(add("b")));
        assert_eq!(store.redo().unwrap(), None);
        assert_eq!(store.current_state(), &TodoState::new(["a", "b"]));
    }

    #[test]
    fn dispatch_after_undo_discards_suffix() {
        let mut store = Store::new(TodoReducer);
        store.dispatch(add("a")).unwrap();
        store.dispatch(add("b")).unwrap();
        store.dispatch(add("c")).unwrap();
        store.undo().unwrap();
        store.undo().unwrap();

        store.dispatch(add("x")).unwrap();

        assert!(!store.can_redo());
        assert_eq!(store.history().len(), 2);
        assert_eq!(store.current_state(), &TodoState::new(["a", "x"]));
        let replayed: Vec<_> = store.replay().cloned().collect();
        assert_eq!(replayed, vec![add("x"), add("a")]);
    }

    #[test]
    fn dispatch_after_full_undo_starts_new_root() {
        let mut store = Store::new(TodoReducer);
        store.dispatch(add("a")).unwrap();
        store.undo().unwrap();

        store.dispatch(add("b")).unwrap();

        assert_eq!(store.history().len(), 1);
        assert_eq!(store.replay().count(), 1);
        assert_eq!(store.current_state(), &TodoState::new(["b"]));
    }

    #[test]
    fn states_are_rebuilt_without_snapshots() {
        let mut store = store_with(StoreConfig {
            retain_states: false,
            ..StoreConfig::default()
        });
        store.dispatch(add("a")).unwrap();
        store.dispatch(add("b")).unwrap();
        store.dispatch(TodoAction::RemoveOne(0)).unwrap();

        store.undo().unwrap();
        assert_eq!(store.current_state(), &TodoState::new(["a", "b"]));
        store.redo().unwrap();
        assert_eq!(store.current_state(), &TodoState::new(["b"]));
    }

    #[test]
    fn rebuilt_state_matches_snapshot() {
        let mut retained = Store::new(TodoReducer);
        let mut rebuilt = store_with(StoreConfig {
            retain_states: false,
            ..StoreConfig::default()
        });
        for action in [add("a"), add("b"), TodoAction::RemoveOne(1), add("c")] {
            retained.dispatch(action.clone()).unwrap();
            rebuilt.dispatch(action).unwrap();
        }

        let retained_nodes: Vec<_> = retained.replay().nodes().map(|(id, _)| id).collect();
        let rebuilt_nodes: Vec<_> = rebuilt.replay().nodes().map(|(id, _)| id).collect();
        for (kept, replayed) in retained_nodes.iter().zip(&rebuilt_nodes) {
            assert_eq!(
                retained.state_at(Some(*kept)).unwrap(),
                rebuilt.state_at(Some(*replayed)).unwrap()
            );
        }
    }

    #[test]
    fn history_can_be_disabled() {
        let mut store = store_with(StoreConfig {
            record_history: false,
            retain_states: false,
            capacity: 0,
        });
        store.dispatch(add("a")).unwrap();

        assert_eq!(store.current_state(), &TodoState::new(["a"]));
        assert!(store.history().is_empty());
        assert_eq!(store.undo().unwrap(), None);
        assert_eq!(store.replay().count(), 0);
    }

    #[test]
    fn state_at_none_is_initial() {
        let store = Store::from_parts(
            TodoReducer,
            TodoState::new(["seed"]),
            StoreConfig::default(),
        );
        assert_eq!(store.state_at(None).unwrap(), TodoState::new(["seed"]));
    }

    #[test]
    fn state_at_foreign_node_fails() {
        let mut store = Store::new(TodoReducer);
        let mut other = Store::new(TodoReducer);
        other.dispatch(add("a")).unwrap();
        let foreign = other.head();

        store.dispatch(add("a")).unwrap();
        assert!(matches!(
            store.state_at(foreign),
            Err(StoreError::History(HistoryError::ForeignNode { .. }))
        ));
    }

    #[test]
    fn preflight_uses_current_state() {
        let mut store = Store::new(TodoReducer);
        store.dispatch(add("a")).unwrap();

        let result = store.preflight(&[TodoAction::RemoveOne(0), TodoAction::RemoveOne(0)]);

        assert!(result.is_failure());
        assert_eq!(store.current_state(), &TodoState::new(["a"]));
    }

    #[test]
    #[traced_test]
    fn rejection_is_logged() {
        let mut store = Store::new(TodoReducer);
        let _ = store.dispatch(TodoAction::RemoveOne(3));

        assert!(logs_contain("action rejected"));
        assert!(logs_contain("Remove One"));
    }

    #[test]
    #[traced_test]
    fn dispatch_is_logged() {
        let mut store = Store::new(TodoReducer);
        store.dispatch(add("a")).unwrap();
        store.undo().unwrap();

        assert!(logs_contain("dispatched action"));
        assert!(logs_contain("undid action"));
    }
}
