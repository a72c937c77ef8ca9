//! Reducer for the todo list.

use super::{TodoAction, TodoState};
use crate::core::{ReduceError, Reducer};

/// Compute the next todo list. Absent state starts from an empty list.
///
/// # Example
///
/// ```rust
/// use actionlog::todo::{todo_reducer, TodoAction, TodoState};
///
/// let state = todo_reducer(None, &TodoAction::Add("buy milk".into())).unwrap();
/// assert_eq!(state, TodoState::new(["buy milk"]));
/// ```
pub fn todo_reducer(
    state: Option<&TodoState>,
    action: &TodoAction,
) -> Result<TodoState, ReduceError> {
    TodoReducer.reduce_or_default(state, action)
}

/// Exhaustive reducer over [`TodoAction`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;

    fn reduce(&self, state: &TodoState, action: &TodoAction) -> Result<TodoState, ReduceError> {
        match action {
            TodoAction::Add(payload) => {
                let mut todos = state.todos.clone();
                todos.push(payload.clone());
                Ok(TodoState { todos })
            }
            TodoAction::RemoveAll => Ok(TodoState::default()),
            TodoAction::RemoveOne(index) => {
                let index = *index;
                if index >= state.todos.len() {
                    return Err(ReduceError::IndexOutOfRange {
                        index,
                        len: state.todos.len(),
                    });
                }
                let mut todos = state.todos.clone();
                todos.remove(index);
                Ok(TodoState { todos })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(text: &str) -> TodoAction {
        TodoAction::Add(text.to_string())
    }

    #[test]
    fn add_appends_to_end() {
        let state = TodoState::new(["a"]);
        let next = TodoReducer.reduce(&state, &add("b")).unwrap();
        assert_eq!(next, TodoState::new(["a", "b"]));
    }

    #[test]
    fn remove_all_clears() {
        let state = TodoState::new(["a", "b", "c"]);
        let next = TodoReducer.reduce(&state, &TodoAction::RemoveAll).unwrap();
        assert!(next.is_empty());
    }

    #[test]
    fn remove_one_removes_only_that_index() {
        let state = TodoState::new(["a", "b", "c"]);
        let next = TodoReducer
            .reduce(&state, &TodoAction::RemoveOne(1))
            .unwrap();
        assert_eq!(next, TodoState::new(["a", "c"]));
    }

    #[test]
    fn remove_one_out_of_range_is_reported() {
        let state = TodoState::new(["a"]);
        let result = TodoReducer.reduce(&state, &TodoAction::RemoveOne(1));
        assert_eq!(
            result,
            Err(ReduceError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(state, TodoState::new(["a"]));
    }

    #[test]
    fn remove_one_on_empty_list_is_reported() {
        let result = todo_reducer(None, &TodoAction::RemoveOne(0));
        assert_eq!(
            result,
            Err(ReduceError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn input_state_is_never_mutated() {
        let state = TodoState::new(["a"]);
        let _ = TodoReducer.reduce(&state, &add("b")).unwrap();
        let _ = TodoReducer.reduce(&state, &TodoAction::RemoveAll).unwrap();
        assert_eq!(state, TodoState::new(["a"]));
    }

    #[test]
    fn todo_scenario() {
        let state = todo_reducer(None, &add("buy milk")).unwrap();
        assert_eq!(state, TodoState::new(["buy milk"]));

        let state = todo_reducer(Some(&state), &add("walk dog")).unwrap();
        assert_eq!(state, TodoState::new(["buy milk", "walk dog"]));

        let state = todo_reducer(Some(&state), &TodoAction::RemoveOne(0)).unwrap();
        assert_eq!(state, TodoState::new(["walk dog"]));

        let state = todo_reducer(Some(&state), &TodoAction::RemoveAll).unwrap();
        assert_eq!(state, TodoState::default());
    }
}
