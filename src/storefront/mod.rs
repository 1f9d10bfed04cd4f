//! Application root: the store plus everything its async actions need.
//!
//! Consumers call methods here instead of wiring actions by hand. Every
//! remote method returns the final [`Phase`] of its operation; the same
//! outcome is already reflected in the store by the time it returns.

mod error;

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::api::{ApiClient, RequestError};
use crate::config::{Config, DemoCredentialStatus, SecureString};
use crate::debounce::Debouncer;
use crate::domain::{
    Category, DeletedProduct, LoginResponse, Page, Product, ProductDraft, ProductQuery, User,
    UserCredential, UserProfile,
};
use crate::slices::cart::CartAction;
use crate::slices::category::CategoryAction;
use crate::slices::product::{ProductAction, ProductUpdate};
use crate::slices::user::UserAction;
use crate::storage::{FileTokenStorage, TokenStorage};
use crate::store::{dispatch_async, AppAction, AsyncAction, Phase, Store};

pub use error::StorefrontError;

pub struct Storefront {
    config: Config,
    store: Store,
    api: ApiClient,
    tokens: Arc<dyn TokenStorage>,
    add_to_cart: Debouncer,
}

impl Storefront {
    /// Build from configuration with the token persisted on disk.
    pub fn from_config(config: Config) -> Result<Self, StorefrontError> {
        let tokens = Arc::new(FileTokenStorage::new(config.storage.token_path()));
        Self::new(config, tokens)
    }

    pub fn new(config: Config, tokens: Arc<dyn TokenStorage>) -> Result<Self, StorefrontError> {
        config.validate()?;
        let api = ApiClient::new(&config.api)?;
        Ok(Self::with_parts(config, Store::default(), api, tokens))
    }

    /// Assemble from existing parts, e.g. a store shared with other consumers.
    pub fn with_parts(
        config: Config,
        store: Store,
        api: ApiClient,
        tokens: Arc<dyn TokenStorage>,
    ) -> Self {
        let add_to_cart = Debouncer::new(config.storefront.add_to_cart_debounce());
        Self {
            config,
            store,
            api,
            tokens,
            add_to_cart,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn token(&self) -> Option<SecureString> {
        self.store.select(|s| s.users.token().cloned())
    }

    // -- Products -------------------------------------------------------------

    pub async fn fetch_products(&self) -> Phase<Page<Product>> {
        dispatch_async(
            &self.store,
            (),
            |a| ProductAction::FetchAll(a).into(),
            self.api.fetch_products(),
        )
        .await
    }

    pub async fn fetch_single_product(&self, id: &str) -> Phase<Product> {
        dispatch_async(
            &self.store,
            id.to_string(),
            |a| ProductAction::FetchOne(a).into(),
            self.api.fetch_product(id),
        )
        .await
    }

    /// Filtered listing; scoped to a category when the query names one.
    pub async fn search_products(&self, query: ProductQuery) -> Phase<Page<Product>> {
        type Wrap = fn(AsyncAction<ProductQuery, Page<Product>>) -> AppAction;
        let wrap: Wrap = if query.category_id.is_some() {
            |a| ProductAction::FetchByCategory(a).into()
        } else {
            |a| ProductAction::FetchFiltered(a).into()
        };
        dispatch_async(&self.store, query.clone(), wrap, self.api.search_products(&query)).await
    }

    pub async fn create_product(&self, draft: ProductDraft) -> Phase<Product> {
        let token = self.token();
        dispatch_async(
            &self.store,
            draft.clone(),
            |a| ProductAction::Create(a).into(),
            self.api.create_product(&draft, token.as_ref()),
        )
        .await
    }

    pub async fn update_product(&self, id: &str, draft: ProductDraft) -> Phase<Product> {
        let token = self.token();
        let arg = ProductUpdate {
            id: id.to_string(),
            draft: draft.clone(),
        };
        dispatch_async(
            &self.store,
            arg,
            |a| ProductAction::Update(a).into(),
            self.api.update_product(id, &draft, token.as_ref()),
        )
        .await
    }

    pub async fn delete_product(&self, id: &str) -> Phase<DeletedProduct> {
        let token = self.token();
        dispatch_async(
            &self.store,
            id.to_string(),
            |a| ProductAction::Delete(a).into(),
            self.api.delete_product(id, token.as_ref()),
        )
        .await
    }

    /// The first few products of the current listing.
    pub fn featured_products(&self) -> Vec<Product> {
        let count = self.config.storefront.featured_count;
        self.store.select(|s| s.products.featured(count).to_vec())
    }

    // -- Categories -----------------------------------------------------------

    pub async fn fetch_categories(&self) -> Phase<Vec<Category>> {
        dispatch_async(
            &self.store,
            (),
            |a| CategoryAction::FetchAll(a).into(),
            self.api.fetch_categories(),
        )
        .await
    }

    pub async fn fetch_single_category(&self, id: &str) -> Phase<Category> {
        dispatch_async(
            &self.store,
            id.to_string(),
            |a| CategoryAction::FetchOne(a).into(),
            self.api.fetch_category(id),
        )
        .await
    }

    // -- Users ----------------------------------------------------------------

    /// Log in and persist the returned token.
    ///
    /// A token that cannot be persisted only costs the next restart its
    /// silent re-authentication, so the login still succeeds.
    pub async fn login(&self, credential: UserCredential) -> Phase<LoginResponse> {
        let call = async {
            let response = self.api.login(&credential).await?;
            if let Err(e) = self.tokens.save(&SecureString::new(response.token.clone())) {
                tracing::warn!(error = %e, "Failed to persist auth token");
            }
            Ok::<_, RequestError>(response)
        };
        dispatch_async(
            &self.store,
            credential.clone(),
            |a| UserAction::Login(a).into(),
            call,
        )
        .await
    }

    /// Log in with the configured demo account.
    pub async fn login_as_guest(&self) -> Result<Phase<LoginResponse>, StorefrontError> {
        match self.config.demo.resolve() {
            DemoCredentialStatus::Configured(credential) => Ok(self.login(credential).await),
            DemoCredentialStatus::Unconfigured { reason } => {
                Err(StorefrontError::DemoCredentials { reason })
            }
        }
    }

    /// Re-authenticate with a token. A token the server refuses is
    /// forgotten so the next start does not try it again.
    pub async fn authenticate(&self, token: SecureString) -> Phase<UserProfile> {
        let call = async {
            let result = self.api.profile(&token).await;
            if let Err(e) = &result {
                if matches!(e.status(), Some(401 | 403)) {
                    if let Err(e) = self.tokens.clear() {
                        tracing::warn!(error = %e, "Failed to clear rejected auth token");
                    }
                }
            }
            result
        };
        dispatch_async(
            &self.store,
            token.clone(),
            |a| UserAction::Authenticate(a).into(),
            call,
        )
        .await
    }

    /// Startup hook: re-authenticate silently from the stored token.
    ///
    /// Returns `None` when a user is already loaded or no token is stored.
    pub async fn restore_session(&self) -> Option<Phase<UserProfile>> {
        if self.store.select(|s| s.users.is_authenticated()) {
            return None;
        }

        let token = match self.tokens.load() {
            Ok(Some(token)) => token,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored auth token");
                return None;
            }
        };

        tracing::debug!("Restoring session from stored token");
        Some(self.authenticate(token).await)
    }

    pub fn logout(&self) {
        if let Err(e) = self.tokens.clear() {
            tracing::warn!(error = %e, "Failed to clear auth token");
        }
        self.store.dispatch(UserAction::Logout);
    }

    pub fn current_user(&self) -> Option<User> {
        self.store.select(|s| s.users.user.clone())
    }

    pub fn is_admin(&self) -> bool {
        self.store.select(|s| s.users.is_admin())
    }

    // -- Cart -----------------------------------------------------------------

    /// Debounced add-to-cart: rapid repeats within the window add once.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn add_to_cart(&self, product: Product) {
        let store = self.store.clone();
        self.add_to_cart.call(move || store.dispatch(CartAction::AddToCart(product)));
    }

    pub fn add_to_cart_now(&self, product: Product) {
        self.store.dispatch(CartAction::AddToCart(product));
    }

    pub fn has_pending_cart_add(&self) -> bool {
        self.add_to_cart.is_pending()
    }

    pub fn remove_from_cart(&self, product_id: &str) {
        self.store.dispatch(CartAction::RemoveFromCart {
            product_id: product_id.to_string(),
        });
    }

    pub fn update_cart_quantity(&self, product_id: &str, quantity: u32) {
        self.store.dispatch(CartAction::UpdateQuantity {
            product_id: product_id.to_string(),
            quantity,
        });
    }

    pub fn increase_cart_quantity(&self, product_id: &str) {
        self.store.dispatch(CartAction::IncreaseQuantity {
            product_id: product_id.to_string(),
        });
    }

    pub fn decrease_cart_quantity(&self, product_id: &str) {
        self.store.dispatch(CartAction::DecreaseQuantity {
            product_id: product_id.to_string(),
        });
    }

    pub fn clear_cart(&self) {
        self.add_to_cart.cancel();
        self.store.dispatch(CartAction::ClearCart);
    }

    pub fn cart_total(&self) -> Decimal {
        self.store.select(|s| s.cart.total())
    }
}
