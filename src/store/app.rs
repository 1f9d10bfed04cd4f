//! Root state and action composing every slice.

use crate::slices::cart::{CartAction, CartReducer, CartState};
use crate::slices::category::{CategoryAction, CategoryReducer, CategoryState};
use crate::slices::product::{ProductAction, ProductReducer, ProductState};
use crate::slices::user::{UserAction, UserReducer, UserState};
use crate::store::mvi::{Action, Reducer, SliceState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub products: ProductState,
    pub categories: CategoryState,
    pub users: UserState,
    pub cart: CartState,
}

impl SliceState for AppState {}

/// Any action the store accepts, tagged by the slice it targets.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Product(ProductAction),
    Category(CategoryAction),
    User(UserAction),
    Cart(CartAction),
}

impl Action for AppAction {}

impl AppAction {
    pub fn type_name(&self) -> String {
        match self {
            AppAction::Product(a) => a.type_name(),
            AppAction::Category(a) => a.type_name(),
            AppAction::User(a) => a.type_name(),
            AppAction::Cart(a) => a.type_name().to_string(),
        }
    }
}

impl From<ProductAction> for AppAction {
    fn from(action: ProductAction) -> Self {
        AppAction::Product(action)
    }
}

impl From<CategoryAction> for AppAction {
    fn from(action: CategoryAction) -> Self {
        AppAction::Category(action)
    }
}

impl From<UserAction> for AppAction {
    fn from(action: UserAction) -> Self {
        AppAction::User(action)
    }
}

impl From<CartAction> for AppAction {
    fn from(action: CartAction) -> Self {
        AppAction::Cart(action)
    }
}

/// Routes each action to its slice; the other slices pass through untouched.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        match action {
            AppAction::Product(action) => {
                state.products = ProductReducer::reduce(state.products, action);
            }
            AppAction::Category(action) => {
                state.categories = CategoryReducer::reduce(state.categories, action);
            }
            AppAction::User(action) => {
                state.users = UserReducer::reduce(state.users, action);
            }
            AppAction::Cart(action) => {
                state.cart = CartReducer::reduce(state.cart, action);
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{AsyncAction, RequestId};

    #[test]
    fn actions_only_touch_their_slice() {
        let state = AppState {
            cart: CartState::default(),
            ..AppState::default()
        };
        let next = AppReducer::reduce(
            state.clone(),
            CategoryAction::FetchAll(AsyncAction::pending(RequestId::new(), ())).into(),
        );
        assert!(next.categories.loading);
        assert_eq!(next.products, state.products);
        assert_eq!(next.users, state.users);
        assert_eq!(next.cart, state.cart);
    }

    #[test]
    fn type_name_is_prefixed_by_slice() {
        let action: AppAction = UserAction::Logout.into();
        assert_eq!(action.type_name(), "users/logout");
        let action: AppAction = CartAction::ClearCart.into();
        assert_eq!(action.type_name(), "cart/clearCart");
    }
}
