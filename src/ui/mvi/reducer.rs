//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure, total function: (State, Intent) -> State.
pub trait Reducer: 'static {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// Takes the state by value; the caller keeps nothing aliased to it.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
