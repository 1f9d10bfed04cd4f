use crate::config::SecureString;
use crate::domain::User;
use crate::store::mvi::SliceState;
use crate::store::AsyncFlags;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserState {
    /// `None` until a login or token re-authentication succeeds.
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SliceState for UserState {}

impl AsyncFlags for UserState {
    fn loading_mut(&mut self) -> &mut bool {
        &mut self.loading
    }

    fn error_mut(&mut self) -> &mut Option<String> {
        &mut self.error
    }
}

impl UserState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    pub fn token(&self) -> Option<&SecureString> {
        self.user.as_ref().map(|u| &u.token)
    }
}
