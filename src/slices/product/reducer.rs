use crate::store::fold_phase;
use crate::store::mvi::Reducer;

use super::action::ProductAction;
use super::state::ProductState;

/// Reducer for catalogue state transitions.
///
/// Rejections only touch the flags; cached data survives a failed request.
pub struct ProductReducer;

impl Reducer for ProductReducer {
    type State = ProductState;
    type Action = ProductAction;

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        match action {
            ProductAction::FetchAll(action) => {
                if let Some(page) = fold_phase(&mut state, action.phase) {
                    state.items = page.items;
                    state.total = page.total_count;
                }
            }

            ProductAction::FetchFiltered(action) | ProductAction::FetchByCategory(action) => {
                if let Some(page) = fold_phase(&mut state, action.phase) {
                    state.items = page.items;
                    state.total = page.total_count;
                }
            }

            ProductAction::FetchOne(action) => {
                if let Some(product) = fold_phase(&mut state, action.phase) {
                    state.item = Some(product);
                }
            }

            ProductAction::Create(action) => {
                if let Some(product) = fold_phase(&mut state, action.phase) {
                    state.items.push(product);
                }
            }

            ProductAction::Update(action) => {
                if let Some(product) = fold_phase(&mut state, action.phase) {
                    for existing in state.items.iter_mut().filter(|p| p.id == product.id) {
                        *existing = product.clone();
                    }
                }
            }

            ProductAction::Delete(action) => {
                if let Some(deleted) = fold_phase(&mut state, action.phase) {
                    state.items.retain(|p| p.id != deleted.id);
                }
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategorySummary, DeletedProduct, Page, Product, ProductDraft};
    use crate::slices::product::ProductUpdate;
    use crate::store::{AsyncAction, RequestId};
    use rust_decimal::Decimal;

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: id.to_string(),
            title: format!("Product {}", id),
            price: Decimal::from(price),
            description: format!("Description {}", id),
            image: format!("Image {}", id),
            category: CategorySummary {
                id: id.to_string(),
                name: format!("Category {}", id),
                image: format!("Image {}", id),
            },
            quantity: 2,
        }
    }

    fn page() -> Page<Product> {
        Page {
            items: vec![product("3", 30), product("4", 40)],
            total_count: 2,
        }
    }

    #[test]
    fn fetch_one_pending_keeps_current_item() {
        let state = ProductState {
            item: Some(product("1", 10)),
            ..ProductState::default()
        };
        let next = ProductReducer::reduce(
            state,
            ProductAction::FetchOne(AsyncAction::pending(RequestId::new(), "2".into())),
        );
        assert!(next.loading);
        assert_eq!(next.item, Some(product("1", 10)));
    }

    #[test]
    fn filtered_and_category_listings_replace_items() {
        let state = ProductState {
            items: vec![product("9", 90)],
            total: 1,
            ..ProductState::default()
        };
        let next = ProductReducer::reduce(
            state,
            ProductAction::FetchByCategory(AsyncAction::fulfilled(
                RequestId::new(),
                Default::default(),
                page(),
            )),
        );
        assert_eq!(next.items, page().items);
        assert_eq!(next.total, 2);
    }

    #[test]
    fn update_for_unknown_id_changes_nothing_but_flags() {
        let state = ProductState {
            items: vec![product("1", 10)],
            loading: true,
            ..ProductState::default()
        };
        let next = ProductReducer::reduce(
            state,
            ProductAction::Update(AsyncAction::fulfilled(
                RequestId::new(),
                ProductUpdate {
                    id: "7".into(),
                    draft: ProductDraft {
                        title: "x".into(),
                        price: Decimal::ONE,
                        description: String::new(),
                        category_id: "1".into(),
                        image: String::new(),
                    },
                },
                product("7", 70),
            )),
        );
        assert_eq!(next.items, vec![product("1", 10)]);
        assert!(!next.loading);
    }

    #[test]
    fn delete_of_missing_id_keeps_items() {
        let state = ProductState {
            items: vec![product("1", 10)],
            ..ProductState::default()
        };
        let next = ProductReducer::reduce(
            state,
            ProductAction::Delete(AsyncAction::fulfilled(
                RequestId::new(),
                "1".into(),
                DeletedProduct { id: "2".into() },
            )),
        );
        assert_eq!(next.items.len(), 1);
    }

    #[test]
    fn type_names_follow_slice_operation_phase() {
        let action = ProductAction::Delete(AsyncAction::rejected(
            RequestId::new(),
            "1".into(),
            "error",
        ));
        assert_eq!(action.type_name(), "products/delete/rejected");
    }

    #[test]
    fn featured_and_pages() {
        let state = ProductState {
            items: vec![product("1", 1), product("2", 2), product("3", 3)],
            total: 21,
            ..ProductState::default()
        };
        assert_eq!(state.featured(2).len(), 2);
        assert_eq!(state.featured(10).len(), 3);
        assert_eq!(state.page_count(10), 3);
        assert_eq!(state.page_count(0), 0);
        assert!(state.find("2").is_some());
        assert!(state.find("9").is_none());
    }
}
