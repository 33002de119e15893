//! Base trait for intents (actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents are what the store dispatches:
/// - User actions (button presses, key bindings)
/// - Deferred actions (a timer firing)
///
/// Reducers interpret intents to produce new states.
pub trait Intent: Send + 'static {}
