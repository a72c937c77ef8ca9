//! Core State trait for reducer-driven values.
//!
//! A state is a plain immutable value. Reducers never mutate one in place;
//! they build the next value and leave the old one inspectable.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for values produced by a reducer.
///
/// # Required Traits
///
/// - `Clone`: snapshots are kept per history node
/// - `PartialEq`: replayed states are compared structurally
/// - `Default`: the starting value when the caller supplies none
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states travel with their histories
///
/// Implemented for every type meeting the bounds.
///
/// # Example
///
/// ```rust
/// use actionlog::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
/// struct Counter {
///     value: i64,
/// }
///
/// fn assert_state<S: State>(_: &S) {}
/// assert_state(&Counter::default());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Default + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

impl<T> State for T where
    T: Clone + PartialEq + Debug + Default + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
    struct Basket {
        items: Vec<String>,
    }

    fn starting<S: State>() -> S {
        S::default()
    }

    #[test]
    fn default_is_the_starting_value() {
        let basket: Basket = starting();
        assert!(basket.items.is_empty());
    }

    #[test]
    fn state_serializes_correctly() {
        let basket = Basket {
            items: vec!["apple".to_string()],
        };
        let json = serde_json::to_string(&basket).unwrap();
        let deserialized: Basket = serde_json::from_str(&json).unwrap();
        assert_eq!(basket, deserialized);
    }

    #[test]
    fn clone_leaves_original_inspectable() {
        let original = Basket {
            items: vec!["pear".to_string()],
        };
        let mut next = original.clone();
        next.items.push("plum".to_string());

        assert_eq!(original.items.len(), 1);
        assert_eq!(next.items.len(), 2);
    }
}
