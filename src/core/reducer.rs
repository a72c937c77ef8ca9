//! Reducers: pure functions from (state, action) to the next state.

use super::action::Action;
use super::error::ReduceError;
use super::state::State;
use std::marker::PhantomData;

/// Pure transition function over a closed set of actions.
///
/// Implementations must be deterministic: structurally equal inputs give
/// structurally equal outputs. A failed reduction returns an error and
/// leaves the input untouched.
///
/// # Example
///
/// ```rust
/// use actionlog::core::{Action, ReduceError, Reducer};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum CounterAction {
///     Increment(i64),
///     Reset,
/// }
///
/// impl Action for CounterAction {
///     fn kind(&self) -> &'static str {
///         match self {
///             Self::Increment(_) => "Increment",
///             Self::Reset => "Reset",
///         }
///     }
///
///     fn kinds() -> &'static [&'static str] {
///         &["Increment", "Reset"]
///     }
/// }
///
/// struct Counter;
///
/// impl Reducer for Counter {
///     type State = i64;
///     type Action = CounterAction;
///
///     fn reduce(&self, state: &i64, action: &CounterAction) -> Result<i64, ReduceError> {
///         Ok(match action {
///             CounterAction::Increment(by) => state + by,
///             CounterAction::Reset => 0,
///         })
///     }
/// }
///
/// assert_eq!(Counter.reduce(&1, &CounterAction::Increment(2)), Ok(3));
/// assert_eq!(Counter.reduce_or_default(None, &CounterAction::Increment(5)), Ok(5));
/// ```
pub trait Reducer: Send + Sync {
    type State: State;
    type Action: Action;

    /// Compute the next state.
    fn reduce(&self, state: &Self::State, action: &Self::Action)
        -> Result<Self::State, ReduceError>;

    /// Compute the next state, starting from `State::default()` when no
    /// state is supplied.
    fn reduce_or_default(
        &self,
        state: Option<&Self::State>,
        action: &Self::Action,
    ) -> Result<Self::State, ReduceError> {
        match state {
            Some(state) => self.reduce(state, action),
            None => self.reduce(&Self::State::default(), action),
        }
    }
}

type ReduceFn<S, A> = Box<dyn Fn(&S, &A) -> Result<S, ReduceError> + Send + Sync>;

/// A reducer backed by a closure.
///
/// # Example
///
/// ```rust
/// use actionlog::core::{Action, Reducer, ReducerFn};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Push(String);
///
/// impl Action for Push {
///     fn kind(&self) -> &'static str { "Push" }
///     fn kinds() -> &'static [&'static str] { &["Push"] }
/// }
///
/// let reducer = ReducerFn::new(|state: &Vec<String>, action: &Push| {
///     let mut next = state.clone();
///     next.push(action.0.clone());
///     Ok(next)
/// });
///
/// let state = reducer.reduce(&Vec::new(), &Push("a".into())).unwrap();
/// assert_eq!(state, vec!["a".to_string()]);
/// ```
pub struct ReducerFn<S: State, A: Action> {
    reduce: ReduceFn<S, A>,
    _phantom: PhantomData<(S, A)>,
}

impl<S: State, A: Action> ReducerFn<S, A> {
    /// Wrap a pure function. It must be deterministic and free of side
    /// effects.
    pub fn new<F>(reduce: F) -> Self
    where
        F: Fn(&S, &A) -> Result<S, ReduceError> + Send + Sync + 'static,
    {
        ReducerFn {
            reduce: Box::new(reduce),
            _phantom: PhantomData,
        }
    }
}

impl<S: State, A: Action> Reducer for ReducerFn<S, A> {
    type State = S;
    type Action = A;

    fn reduce(&self, state: &S, action: &A) -> Result<S, ReduceError> {
        (self.reduce)(state, action)
    }
}
