//! Base trait for intents (user/system actions).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses on the grid or modal)
/// - Fetch completions (image pages, favorites, breeds)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
