//! Product catalogue slice.
//!
//! - `state.rs` - list, current product, loading/error flags
//! - `action.rs` - three-phase actions for each catalogue operation
//! - `reducer.rs` - state transitions

mod action;
mod reducer;
mod state;

pub use action::{ProductAction, ProductUpdate};
pub use reducer::ProductReducer;
pub use state::ProductState;
