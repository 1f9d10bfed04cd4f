//! Headless client for The Trendy Store.
//!
//! Product browsing, product detail, a client-side cart and demo/guest
//! authentication, all held in one [`store::Store`] made of independent
//! slices. Remote operations are three-phase async actions run through the
//! [`storefront::Storefront`] facade.

pub mod api;
pub mod cli;
pub mod config;
pub mod debounce;
pub mod domain;
pub mod logging;
pub mod slices;
pub mod storage;
pub mod store;
pub mod storefront;
