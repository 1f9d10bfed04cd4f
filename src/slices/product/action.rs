use crate::domain::{DeletedProduct, Page, Product, ProductDraft, ProductQuery};
use crate::store::mvi::Action;
use crate::store::AsyncAction;

/// Argument of an update: which product, and its new fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub id: String,
    pub draft: ProductDraft,
}

/// Actions handled by the product slice.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Unfiltered listing.
    FetchAll(AsyncAction<(), Page<Product>>),
    /// Single product by id.
    FetchOne(AsyncAction<String, Product>),
    /// Listing filtered by search, price range and page.
    FetchFiltered(AsyncAction<ProductQuery, Page<Product>>),
    /// Filtered listing scoped to one category.
    FetchByCategory(AsyncAction<ProductQuery, Page<Product>>),
    Create(AsyncAction<ProductDraft, Product>),
    Update(AsyncAction<ProductUpdate, Product>),
    /// Argument is the id requested; the payload carries the id the
    /// server actually removed.
    Delete(AsyncAction<String, DeletedProduct>),
}

impl Action for ProductAction {}

impl ProductAction {
    /// Action type tag, e.g. `products/fetchOne/pending`.
    pub fn type_name(&self) -> String {
        let (operation, phase) = match self {
            ProductAction::FetchAll(a) => ("fetchAll", a.phase.name()),
            ProductAction::FetchOne(a) => ("fetchOne", a.phase.name()),
            ProductAction::FetchFiltered(a) => ("fetchFiltered", a.phase.name()),
            ProductAction::FetchByCategory(a) => ("fetchByCategory", a.phase.name()),
            ProductAction::Create(a) => ("create", a.phase.name()),
            ProductAction::Update(a) => ("update", a.phase.name()),
            ProductAction::Delete(a) => ("delete", a.phase.name()),
        };
        format!("products/{}/{}", operation, phase)
    }
}
