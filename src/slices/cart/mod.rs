//! Client-side cart slice. Nothing here talks to the API.

mod action;
mod reducer;
mod state;

pub use action::CartAction;
pub use reducer::CartReducer;
pub use state::CartState;
