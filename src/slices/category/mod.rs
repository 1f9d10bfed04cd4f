//! Category slice.

mod action;
mod reducer;
mod state;

pub use action::CategoryAction;
pub use reducer::CategoryReducer;
pub use state::CategoryState;
