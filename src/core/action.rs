//! Action trait for discriminated-union transition requests.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for actions: immutable tagged records describing one transition.
///
/// The set of kinds is closed. `kinds()` lists every kind the type can
/// produce, and `kind()` must always return one of them. Most implementors
/// come from the [`action_enum!`](crate::action_enum) macro.
///
/// # Example
///
/// ```rust
/// use actionlog::core::Action;
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
/// assert_eq!(CounterAction::Increment(2).kind(), "Increment");
/// assert_eq!(CounterAction::kinds().len(), 2);
/// ```
pub trait Action:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// The discriminant of this action, used for logging and dispatch.
    fn kind(&self) -> &'static str;

    /// Every kind this action type can carry.
    fn kinds() -> &'static [&'static str]
    where
        Self: Sized;
}
