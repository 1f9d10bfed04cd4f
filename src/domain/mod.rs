//! Storefront data model shared by the API client and the slices.
//!
//! Field names follow the remote API's JSON: identifiers travel as `_id`
//! and a product's embedded category as `categoryId`.

mod cart;
mod category;
mod image;
mod product;
mod user;

use thiserror::Error;

pub use cart::CartItem;
pub use category::Category;
pub use image::{clean_image, display_image, is_valid_image_url, DEFAULT_IMAGE};
pub use product::{CategorySummary, DeletedProduct, Page, Product, ProductDraft, ProductQuery};
pub use user::{LoginResponse, Role, User, UserCredential, UserProfile};

/// Client-side input problems, caught before any request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("minimum price {min} is above maximum price {max}")]
    PriceRange { min: String, max: String },
}
