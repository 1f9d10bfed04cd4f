//! Typed wrappers for the storefront API endpoints.

use crate::api::client::{ApiClient, ApiRequest};
use crate::api::error::RequestError;
use crate::config::SecureString;
use crate::domain::{
    Category, DeletedProduct, LoginResponse, Page, Product, ProductDraft, ProductQuery,
    UserCredential, UserProfile,
};

impl ApiClient {
    /// `GET /products`
    pub async fn fetch_products(&self) -> Result<Page<Product>, RequestError> {
        self.send(ApiRequest::get(&["products"])).await
    }

    /// `GET /products/{id}`
    pub async fn fetch_product(&self, id: &str) -> Result<Product, RequestError> {
        self.send(ApiRequest::get(&["products", id])).await
    }

    /// `GET /products/all?searchQuery&minPrice&maxPrice&offset&limit`, or
    /// `GET /products/category/{categoryId}?…` when the query is scoped.
    pub async fn search_products(&self, query: &ProductQuery) -> Result<Page<Product>, RequestError> {
        query.validate()?;
        let request = match &query.category_id {
            Some(category_id) => ApiRequest::get(&["products", "category", category_id.as_str()]),
            None => ApiRequest::get(&["products", "all"]),
        };
        self.send(request.query(query)?).await
    }

    /// `POST /products`
    pub async fn create_product(
        &self,
        draft: &ProductDraft,
        token: Option<&SecureString>,
    ) -> Result<Product, RequestError> {
        draft.validate()?;
        let request = ApiRequest::post(&["products"]).json(draft)?.bearer(token);
        self.send(request).await
    }

    /// `PUT /products/{id}`
    pub async fn update_product(
        &self,
        id: &str,
        draft: &ProductDraft,
        token: Option<&SecureString>,
    ) -> Result<Product, RequestError> {
        draft.validate()?;
        let request = ApiRequest::put(&["products", id]).json(draft)?.bearer(token);
        self.send(request).await
    }

    /// `DELETE /products/{id}`; the server echoes the removed identifier.
    pub async fn delete_product(
        &self,
        id: &str,
        token: Option<&SecureString>,
    ) -> Result<DeletedProduct, RequestError> {
        self.send(ApiRequest::delete(&["products", id]).bearer(token))
            .await
    }

    /// `GET /categories`
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, RequestError> {
        self.send(ApiRequest::get(&["categories"])).await
    }

    /// `GET /categories/{id}`
    pub async fn fetch_category(&self, id: &str) -> Result<Category, RequestError> {
        self.send(ApiRequest::get(&["categories", id])).await
    }

    /// `POST /users/login`
    pub async fn login(&self, credential: &UserCredential) -> Result<LoginResponse, RequestError> {
        self.send(ApiRequest::post(&["users", "login"]).json(credential)?)
            .await
    }

    /// `GET /users/profile` with the given bearer token.
    pub async fn profile(&self, token: &SecureString) -> Result<UserProfile, RequestError> {
        self.send(ApiRequest::get(&["users", "profile"]).bearer(Some(token)))
            .await
    }
}
