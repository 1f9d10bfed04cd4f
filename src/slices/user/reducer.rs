use crate::domain::User;
use crate::store::fold_phase;
use crate::store::mvi::Reducer;

use super::action::UserAction;
use super::state::UserState;

pub struct UserReducer;

impl Reducer for UserReducer {
    type State = UserState;
    type Action = UserAction;

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        match action {
            UserAction::Login(action) => {
                if let Some(response) = fold_phase(&mut state, action.phase) {
                    state.user = Some(User::from_profile(response.user, response.token));
                }
            }
            UserAction::Authenticate(action) => {
                if let Some(profile) = fold_phase(&mut state, action.phase) {
                    state.user = Some(User::from_profile(profile, action.arg.expose()));
                }
            }
            UserAction::Logout => state = UserState::default(),
        }
        state
    }
}
