//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent user actions (key presses on the cart screen) and
/// system events (a share link becoming available). They are processed by
/// reducers to produce new states.
pub trait Intent: Send + 'static {}
