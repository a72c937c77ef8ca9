//! Dry runs of action batches.

use crate::core::{Action, Reducer};
use crate::integrity::violations::PreflightError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Run `actions` through `reducer` starting at `state` without recording
/// anything, and report EVERY rejection.
///
/// A rejected action leaves the running state as it was and the batch
/// continues with the next action. On success the final state is returned.
///
/// # Example
///
/// ```rust
/// use actionlog::integrity::preflight;
/// use actionlog::todo::{TodoAction, TodoReducer, TodoState};
///
/// let batch = [
///     TodoAction::RemoveOne(0),
///     TodoAction::Add("a".into()),
///     TodoAction::RemoveOne(4),
/// ];
///
/// let result = preflight(&TodoReducer, &TodoState::default(), &batch);
/// assert!(result.is_failure());
/// ```
pub fn preflight<R: Reducer>(
    reducer: &R,
    state: &R::State,
    actions: &[R::Action],
) -> Validation<R::State, NonEmptyVec<PreflightError>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<PreflightError>>> = Vec::new();
    let mut current = state.clone();

    for (position, action) in actions.iter().enumerate() {
        match reducer.reduce(&current, action) {
            Ok(next) => {
                current = next;
                checks.push(Validation::success(()));
            }
            Err(error) => checks.push(Validation::fail(PreflightError {
                position,
                kind: action.kind(),
                error,
            })),
        }
    }

    Validation::all_vec(checks).map(move |_| current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ReduceError;
    use crate::todo::{TodoAction, TodoReducer, TodoState};

    #[test]
    fn clean_batch_yields_final_state() {
        let batch = [
            TodoAction::Add("a".to_string()),
            TodoAction::Add("b".to_string()),
            TodoAction::RemoveOne(0),
        ];

        match preflight(&TodoReducer, &TodoState::default(), &batch) {
            Validation::Success(state) => assert_eq!(state, TodoState::new(["b"])),
            Validation::Failure(_) => panic!("Expected success"),
        }
    }

    #[test]
    fn empty_batch_keeps_state() {
        let state = TodoState::new(["a"]);
        match preflight(&TodoReducer, &state, &[]) {
            Validation::Success(result) => assert_eq!(result, state),
            Validation::Failure(_) => panic!("Expected success"),
        }
    }

    #[test]
    fn preflight_accumulates_all_rejections() {
        let batch = [
            TodoAction::RemoveOne(0),
            TodoAction::Add("a".to_string()),
            TodoAction::RemoveOne(3),
            TodoAction::RemoveAll,
        ];

        match preflight(&TodoReducer, &TodoState::default(), &batch) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);

                let positions: Vec<usize> = errors.iter().map(|e| e.position).collect();
                assert_eq!(positions, vec![0, 2]);

                assert!(errors.iter().any(|e| e.kind == "Remove One"
                    && e.error == ReduceError::IndexOutOfRange { index: 3, len: 1 }));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }
}
