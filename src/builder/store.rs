//! Builder for constructing stores.

use crate::builder::error::BuildError;
use crate::core::Reducer;
use crate::store::{Store, StoreConfig};

/// Builder for constructing stores with a fluent API.
///
/// # Example
///
/// ```rust
/// use actionlog::builder::StoreBuilder;
/// use actionlog::todo::{TodoAction, TodoReducer, TodoState};
///
/// let mut store = StoreBuilder::new()
///     .reducer(TodoReducer)
///     .initial(TodoState::new(["existing"]))
///     .capacity(16)
///     .build()
///     .unwrap();
///
/// store.dispatch(TodoAction::Add("new".into())).unwrap();
/// assert_eq!(store.current_state().len(), 2);
/// ```
pub struct StoreBuilder<R: Reducer> {
    reducer: Option<R>,
    initial: Option<R::State>,
    config: StoreConfig,
}

impl<R: Reducer> StoreBuilder<R> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            reducer: None,
            initial: None,
            config: StoreConfig::default(),
        }
    }

    /// Set the reducer (required).
    pub fn reducer(mut self, reducer: R) -> Self {
        self.reducer = Some(reducer);
        self
    }

    /// Set the initial state. Defaults to `R::State::default()`.
    pub fn initial(mut self, state: R::State) -> Self {
        self.initial = Some(state);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    pub fn record_history(mut self, enabled: bool) -> Self {
        self.config.record_history = enabled;
        self
    }

    pub fn retain_states(mut self, enabled: bool) -> Self {
        self.config.retain_states = enabled;
        self
    }

    /// Reserve room for `capacity` history nodes.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Build the store.
    /// Returns an error if the reducer is missing or the configuration is
    /// inconsistent.
    pub fn build(self) -> Result<Store<R>, BuildError> {
        let reducer = self.reducer.ok_or(BuildError::MissingReducer)?;

        if self.config.retain_states && !self.config.record_history {
            return Err(BuildError::RetentionWithoutHistory);
        }

        let initial = self.initial.unwrap_or_default();
        Ok(Store::from_parts(reducer, initial, self.config))
    }
}

impl<R: Reducer> Default for StoreBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}
