//! Structural checks over a history, accumulated with Validation.

use crate::core::Action;
use crate::history::{History, NodeId, Walk};
use crate::integrity::violations::LinkViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<LinkViolation>>;

/// Verify every live node of `history`, collecting ALL violations.
///
/// Checks that each `previous`/`next` target is live and links back, that
/// `previous` chains end at a root.
/// Histories built through `append` always pass; violations only show up
/// in histories deserialized from tampered data.
pub fn verify<A: Action>(history: &History<A>) -> Validation<(), NonEmptyVec<LinkViolation>> {
    let mut checks: Vec<Check> = Vec::new();

    for (id, node) in history.nodes() {
        if let Some(target) = node.previous() {
            checks.push(check_previous(history, id, target));
        }
        if let Some(target) = node.next() {
            checks.push(check_next(history, id, target));
        }
        checks.push(check_terminates(history, id));
    }

    Validation::all_vec(checks).map(|_| ())
}

fn check_previous<A: Action>(history: &History<A>, id: NodeId, target: NodeId) -> Check {
    match history.node(target) {
        Err(_) => Validation::fail(LinkViolation::DanglingPrevious { node: id, target }),
        Ok(prev) if prev.next() != Some(id) => {
            Validation::fail(LinkViolation::BrokenForwardLink { node: id, target })
        }
        Ok(_) => Validation::success(()),
    }
}

fn check_next<A: Action>(history: &History<A>, id: NodeId, target: NodeId) -> Check {
    match history.node(target) {
        Err(_) => Validation::fail(LinkViolation::DanglingNext { node: id, target }),
        Ok(next) if next.previous() != Some(id) => {
            Validation::fail(LinkViolation::BrokenBackLink { node: id, target })
        }
        Ok(_) => Validation::success(()),
    }
}

fn check_terminates<A: Action>(history: &History<A>, id: NodeId) -> Check {
    let reaches_root = Walk::backward(history, Some(id))
        .last()
        .is_some_and(|(_, node)| node.is_root());
    if reaches_root {
        Validation::success(())
    } else {
        Validation::fail(LinkViolation::UnterminatedChain { node: id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::TodoAction;
    use serde_json::Value;

    fn chain(len: usize) -> History<TodoAction> {
        let mut history = History::new();
        let mut previous = None;
        for i in 0..len {
            previous = Some(
                history
                    .append(previous, TodoAction::Add(format!("item {i}")))
                    .unwrap(),
            );
        }
        history
    }

    fn tamper(history: &History<TodoAction>, edit: impl FnOnce(&mut Value)) -> History<TodoAction> {
        let mut value = serde_json::to_value(history).unwrap();
        edit(&mut value);
        serde_json::from_value(value).unwrap()
    }

    fn violations(history: &History<TodoAction>) -> Vec<LinkViolation> {
        match verify(history) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    #[test]
    fn appended_history_verifies() {
        assert!(verify(&chain(5)).is_success());
    }

    #[test]
    fn empty_history_verifies() {
        assert!(verify(&History::<TodoAction>::new()).is_success());
    }

    #[test]
    fn discarded_suffix_still_verifies() {
        let mut history = chain(4);
        let third = history.nodes().nth(2).map(|(id, _)| id).unwrap();
        history.discard_from(third).unwrap();
        assert!(verify(&history).is_success());
    }

    #[test]
    fn cycle_is_reported() {
        let history = chain(3);
        // Point the root back at the tip.
        let tampered = tamper(&history, |value| {
            value["slots"][0]["previous"] = value["slots"][1]["previous"].clone();
            value["slots"][0]["previous"]["index"] = serde_json::json!(2);
        });

        let found = violations(&tampered);
        assert!(found
            .iter()
            .any(|v| matches!(v, LinkViolation::UnterminatedChain { .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, LinkViolation::BrokenForwardLink { .. })));
    }

    #[test]
    fn dangling_link_is_reported() {
        let history = chain(2);
        let tampered = tamper(&history, |value| {
            value["slots"][1]["previous"]["index"] = serde_json::json!(7);
        });

        let found = violations(&tampered);
        assert!(found
            .iter()
            .any(|v| matches!(v, LinkViolation::DanglingPrevious { .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, LinkViolation::BrokenBackLink { .. })));
    }

    #[test]
    fn all_violations_are_accumulated() {
        let history = chain(3);
        let tampered = tamper(&history, |value| {
            value["slots"][1]["next"] = Value::Null;
            value["slots"][0]["next"]["index"] = serde_json::json!(5);
        });

        let found = violations(&tampered);
        assert!(found.len() >= 2);
        assert!(found
            .iter()
            .any(|v| matches!(v, LinkViolation::DanglingNext { .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, LinkViolation::BrokenForwardLink { .. })));
    }
}
