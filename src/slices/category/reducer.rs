use crate::store::fold_phase;
use crate::store::mvi::Reducer;

use super::action::CategoryAction;
use super::state::CategoryState;

pub struct CategoryReducer;

impl Reducer for CategoryReducer {
    type State = CategoryState;
    type Action = CategoryAction;

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        match action {
            CategoryAction::FetchAll(action) => {
                if let Some(categories) = fold_phase(&mut state, action.phase) {
                    state.total = categories.len() as u64;
                    state.items = categories;
                }
            }
            CategoryAction::FetchOne(action) => {
                if let Some(category) = fold_phase(&mut state, action.phase) {
                    state.item = Some(category);
                }
            }
        }
        state
    }
}
