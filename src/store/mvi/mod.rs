//! Unidirectional data flow primitives shared by every slice.
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **State**: plain data owned by a slice
//! - **Action**: a tagged record describing a transition
//! - **Reducer**: pure function `(State, Action) -> State`

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::SliceState;
