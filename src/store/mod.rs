//! Process-wide state container.
//!
//! [`Store`] owns one [`AppState`] composed of every slice. Reads go through
//! [`Store::select`]; the only write path is [`Store::dispatch`], which is
//! serialized so reducer applications never interleave and subscribers see
//! them in dispatch order.

mod app;
mod async_phase;
mod container;
pub mod mvi;
mod thunk;

pub use app::{AppAction, AppReducer, AppState};
pub use async_phase::{fold_phase, AsyncAction, AsyncFlags, Phase, RequestId};
pub use container::{Store, SubscriptionId};
pub use thunk::dispatch_async;
