//! Domain slices: one state subtree, its actions and its pure reducer each.

pub mod cart;
pub mod category;
pub mod product;
pub mod user;
