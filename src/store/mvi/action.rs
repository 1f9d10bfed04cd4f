//! Base trait for actions.

/// Marker trait for action records.
///
/// Actions represent:
/// - Consumer requests (add to cart, logout)
/// - Phases of an asynchronous operation (pending, fulfilled, rejected)
///
/// Actions are processed by reducers to produce new states.
pub trait Action: Send + 'static {}
