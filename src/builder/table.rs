//! Dispatch tables: reducers assembled from per-kind handlers at runtime.

use crate::builder::error::BuildError;
use crate::core::{Action, ReduceError, Reducer, State};
use std::collections::HashMap;

type Handler<S, A> = Box<dyn Fn(&S, &A) -> Result<S, ReduceError> + Send + Sync>;

/// Reducer that looks up a handler by `Action::kind()`.
///
/// A kind without a handler fails with
/// [`ReduceError::UnhandledActionKind`]; it never falls through to the
/// unchanged state.
pub struct DispatchTable<S: State, A: Action> {
    handlers: HashMap<&'static str, Handler<S, A>>,
}

impl<S: State, A: Action> DispatchTable<S, A> {
    /// Whether a handler is registered for `kind`.
    pub fn handles(&self, kind: &str) -> bool {
        self.handlers.contains_key(kind)
    }
}

impl<S: State, A: Action> Reducer for DispatchTable<S, A> {
    type State = S;
    type Action = A;

    fn reduce(&self, state: &S, action: &A) -> Result<S, ReduceError> {
        let kind = action.kind();
        let handler = self
            .handlers
            .get(kind)
            .ok_or_else(|| ReduceError::UnhandledActionKind {
                kind: kind.to_string(),
            })?;
        handler(state, action)
    }
}

/// Builder for dispatch tables with a fluent API.
///
/// # Example
///
/// ```rust
/// use actionlog::builder::DispatchTableBuilder;
/// use actionlog::core::Reducer;
/// use actionlog::todo::{TodoAction, TodoState};
///
/// let table = DispatchTableBuilder::<TodoState, TodoAction>::new()
///     .on("Add", |state, action| {
///         let mut next = state.clone();
///         if let TodoAction::Add(item) = action {
///             next.todos.push(item.clone());
///         }
///         Ok(next)
///     })
///     .on("Remove All", |_, _| Ok(TodoState::default()))
///     .build_partial()
///     .unwrap();
///
/// let state = table.reduce(&TodoState::default(), &TodoAction::Add("a".into())).unwrap();
/// assert_eq!(state.len(), 1);
/// assert!(table.reduce(&state, &TodoAction::RemoveOne(0)).is_err());
/// ```
pub struct DispatchTableBuilder<S: State, A: Action> {
    handlers: Vec<(String, Handler<S, A>)>,
}

impl<S: State, A: Action> DispatchTableBuilder<S, A> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register the handler for one kind.
    pub fn on<F>(mut self, kind: &str, handler: F) -> Self
    where
        F: Fn(&S, &A) -> Result<S, ReduceError> + Send + Sync + 'static,
    {
        self.handlers.push((kind.to_string(), Box::new(handler)));
        self
    }

    /// Build the table, requiring a handler for every kind in
    /// `A::kinds()`.
    pub fn build(self) -> Result<DispatchTable<S, A>, BuildError> {
        let table = self.build_partial()?;

        let missing: Vec<String> = A::kinds()
            .iter()
            .filter(|kind| !table.handles(kind))
            .map(|kind| kind.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(BuildError::MissingHandlers { kinds: missing });
        }

        Ok(table)
    }

    /// Build the table without requiring full coverage. Kinds left out
    /// fail at `reduce` time with `UnhandledActionKind`.
    pub fn build_partial(self) -> Result<DispatchTable<S, A>, BuildError> {
        let mut handlers = HashMap::new();

        for (kind, handler) in self.handlers {
            let Some(declared) = A::kinds().iter().copied().find(|k| *k == kind) else {
                return Err(BuildError::UnknownKind { kind });
            };
            if handlers.insert(declared, handler).is_some() {
                return Err(BuildError::DuplicateHandler { kind });
            }
        }

        Ok(DispatchTable { handlers })
    }
}

impl<S: State, A: Action> Default for DispatchTableBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
