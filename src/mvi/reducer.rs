//! Reducer trait for the store.

use std::sync::Arc;

use super::action::Action;
use super::state::UiState;
use crate::error::ReduceError;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State. A reducer that
/// does not handle an action returns the input `Arc` itself, so callers can
/// detect "no change" with [`Arc::ptr_eq`].
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    ///
    /// This should be a pure function with no side effects. An error leaves
    /// the caller's state untouched.
    fn reduce(
        state: &Arc<Self::State>,
        action: &Self::Action,
    ) -> Result<Arc<Self::State>, ReduceError>;
}

/// Identity passthrough for actions a reducer ignores.
pub fn unchanged<S>(state: &Arc<S>) -> Result<Arc<S>, ReduceError> {
    Ok(Arc::clone(state))
}
